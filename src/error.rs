//! Runtime error type for the collection primitives. Kept as a small enum with a hand-written `Display`.
use std::{error::Error as StdError, fmt};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PropertyBindError {
    UnknownSubscription(u64),                          // unsubscribe with an id this collection never issued
    IndexOutOfRange { index: usize, len: usize },      // positional mutation past the end
}

impl fmt::Display for PropertyBindError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PropertyBindError::UnknownSubscription(id) => write!(f, "unknown subscription id {id}"),
            PropertyBindError::IndexOutOfRange { index, len } => {
                write!(f, "index {index} out of range for collection of length {len}")
            }
        }
    }
}
impl StdError for PropertyBindError {}

pub type Result<T = ()> = std::result::Result<T, PropertyBindError>;
