pub mod backref;
pub mod collection;
pub mod config;
pub mod error;
pub mod registry;

pub use backref::{BackReference, ParentRef};
pub use collection::{
    ChangeAction, CollectionChanged, Handler, ObservableCollection, ObservableVec, SubscriptionId,
};

pub mod prelude {
    pub use crate::backref::{BackReference, ParentRef};
    pub use crate::collection::{ChangeAction, CollectionChanged, ObservableCollection, ObservableVec};
    pub use crate::config::CollectionConfig;
    pub use crate::error::{PropertyBindError, Result};
    pub use property_bind_macros::{PropertyBind, PropertyBindSingle};
}

pub use property_bind_macros::*;

// Paths used by macro expansions; not part of the public API.
#[doc(hidden)]
pub mod __private {
    pub use inventory;
    pub use tracing;
}
