#[derive(Debug, Clone)]
pub struct CollectionConfig {
    pub initial_capacity: usize,
    /// Emit a `trace` event for every raised notification.
    pub trace_notifications: bool,
}

pub const DEFAULT_INITIAL_CAPACITY: usize = 0;

impl Default for CollectionConfig {
    fn default() -> Self {
        Self {
            initial_capacity: DEFAULT_INITIAL_CAPACITY,
            trace_notifications: true,
        }
    }
}
