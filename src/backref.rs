//! Back-reference slots: the element-side half of a binding.
use parking_lot::RwLock;

use std::{
    fmt,
    sync::{Arc, Weak},
};

/// A field that can be pointed at the owner of the collection its element was inserted into.
///
/// Generated handlers call `assign` once per inserted element; nothing ever clears it.
pub trait BackReference<P> {
    fn assign(&self, owner: &Weak<P>);
}

/// Weak pointer to a parent, settable through a shared reference.
pub struct ParentRef<P> {
    inner: RwLock<Weak<P>>,
}

impl<P> ParentRef<P> {
    pub fn new() -> Self {
        Self {
            inner: RwLock::new(Weak::new()),
        }
    }

    pub fn to(parent: &Arc<P>) -> Self {
        Self {
            inner: RwLock::new(Arc::downgrade(parent)),
        }
    }

    /// The parent, if one was assigned and is still alive.
    pub fn get(&self) -> Option<Arc<P>> {
        self.inner.read().upgrade()
    }

    pub fn points_to(&self, parent: &Arc<P>) -> bool {
        std::ptr::eq(self.inner.read().as_ptr(), Arc::as_ptr(parent))
    }

    pub fn is_set(&self) -> bool {
        self.inner.read().strong_count() > 0
    }

    pub fn clear(&self) {
        *self.inner.write() = Weak::new();
    }
}

impl<P> Default for ParentRef<P> {
    fn default() -> Self {
        Self::new()
    }
}

impl<P> Clone for ParentRef<P> {
    fn clone(&self) -> Self {
        Self {
            inner: RwLock::new(self.inner.read().clone()),
        }
    }
}

impl<P> fmt::Debug for ParentRef<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ParentRef").field("set", &self.is_set()).finish()
    }
}

impl<P> BackReference<P> for ParentRef<P> {
    fn assign(&self, owner: &Weak<P>) {
        *self.inner.write() = owner.clone();
    }
}

impl<P> BackReference<P> for RwLock<Weak<P>> {
    fn assign(&self, owner: &Weak<P>) {
        *self.write() = owner.clone();
    }
}
