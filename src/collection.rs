//! Observable ordered collection: the mutation-notification channel generated bindings subscribe to.
//!
//! Notifications are raised synchronously on the mutating thread, after the mutation is applied,
//! in subscription order. A handler sees the affected items through a borrowed slice. It may read
//! the collection that raised the notification but must not mutate it.
//!
//! Reads take the items lock recursively, so a handler reading its own collection does not block
//! behind a writer queued on another thread.
use parking_lot::{RwLock, RwLockReadGuard, RwLockWriteGuard};
use smallvec::SmallVec;

use std::{
    fmt,
    sync::{
        atomic::{AtomicU64, Ordering},
        Arc,
    },
};

use crate::config::CollectionConfig;
use crate::error::{PropertyBindError, Result};

/// How a collection changed.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ChangeAction {
    Add,
    Remove,
    Replace,
    Reset,
    Move,
}

/// One structured mutation event.
pub struct CollectionChanged<'a, T> {
    action: ChangeAction,
    new_items: Option<&'a [T]>,
    old_items: Option<&'a [T]>,
    new_index: Option<usize>,
    old_index: Option<usize>,
}

impl<'a, T> CollectionChanged<'a, T> {
    pub fn added(items: &'a [T], index: usize) -> Self {
        Self {
            action: ChangeAction::Add,
            new_items: Some(items),
            old_items: None,
            new_index: Some(index),
            old_index: None,
        }
    }
    pub fn removed(items: &'a [T], index: usize) -> Self {
        Self {
            action: ChangeAction::Remove,
            new_items: None,
            old_items: Some(items),
            new_index: None,
            old_index: Some(index),
        }
    }
    pub fn replaced(new_items: &'a [T], old_items: &'a [T], index: usize) -> Self {
        Self {
            action: ChangeAction::Replace,
            new_items: Some(new_items),
            old_items: Some(old_items),
            new_index: Some(index),
            old_index: Some(index),
        }
    }
    pub fn moved(items: &'a [T], from: usize, to: usize) -> Self {
        Self {
            action: ChangeAction::Move,
            new_items: Some(items),
            old_items: Some(items),
            new_index: Some(to),
            old_index: Some(from),
        }
    }
    pub fn reset() -> Self {
        Self {
            action: ChangeAction::Reset,
            new_items: None,
            old_items: None,
            new_index: None,
            old_index: None,
        }
    }

    pub fn action(&self) -> ChangeAction {
        self.action
    }
    /// Newly inserted (or replacing) items, in insertion order.
    pub fn new_items(&self) -> Option<&'a [T]> {
        self.new_items
    }
    pub fn old_items(&self) -> Option<&'a [T]> {
        self.old_items
    }
    pub fn new_index(&self) -> Option<usize> {
        self.new_index
    }
    pub fn old_index(&self) -> Option<usize> {
        self.old_index
    }
}

impl<T> fmt::Debug for CollectionChanged<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CollectionChanged")
            .field("action", &self.action)
            .field("new_items", &self.new_items.map(<[T]>::len))
            .field("old_items", &self.old_items.map(<[T]>::len))
            .field("new_index", &self.new_index)
            .field("old_index", &self.old_index)
            .finish()
    }
}

pub type Handler<T> = Box<dyn Fn(&CollectionChanged<'_, T>) + Send + Sync + 'static>;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SubscriptionId(u64);
impl SubscriptionId {
    pub fn get(self) -> u64 {
        self.0
    }
}

/// Object-safe view of an observable collection. Generated code only relies on `subscribe`;
/// the rest is what callers use through abstract (`Box<dyn ..>`) collection fields.
pub trait ObservableCollection<T>: Send + Sync {
    fn subscribe(&self, handler: Handler<T>) -> SubscriptionId;
    /// Returns `false` when the id is unknown.
    fn unsubscribe(&self, id: SubscriptionId) -> bool;
    fn push(&self, item: T);
    fn extend_from(&self, items: Vec<T>);
    /// Out-of-range indices are ignored with a warning.
    fn insert(&self, index: usize, item: T);
    fn remove_at(&self, index: usize) -> Option<T>;
    fn replace(&self, index: usize, item: T) -> Option<T>;
    fn move_item(&self, from: usize, to: usize) -> bool;
    fn clear(&self);
    fn len(&self) -> usize;
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
    fn for_each(&self, f: &mut dyn FnMut(&T));
}

type SharedHandler<T> = Arc<dyn Fn(&CollectionChanged<'_, T>) + Send + Sync + 'static>;

pub struct ObservableVec<T> {
    items: RwLock<Vec<T>>,
    handlers: RwLock<SmallVec<[(SubscriptionId, SharedHandler<T>); 2]>>,
    next_id: AtomicU64,
    trace: bool,
}

impl<T> Default for ObservableVec<T> {
    fn default() -> Self {
        Self::with_config(&CollectionConfig::default())
    }
}

impl<T> fmt::Debug for ObservableVec<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ObservableVec")
            .field("len", &self.items.read_recursive().len())
            .field("subscribers", &self.handlers.read().len())
            .finish()
    }
}

impl<T> From<Vec<T>> for ObservableVec<T> {
    /// Seeds the collection without raising notifications.
    fn from(items: Vec<T>) -> Self {
        let this = Self::default();
        *this.items.write() = items;
        this
    }
}

impl<T> ObservableVec<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(cfg: &CollectionConfig) -> Self {
        Self {
            items: RwLock::new(Vec::with_capacity(cfg.initial_capacity)),
            handlers: RwLock::new(SmallVec::new()),
            next_id: AtomicU64::new(1),
            trace: cfg.trace_notifications,
        }
    }

    pub fn subscribe<F>(&self, handler: F) -> SubscriptionId
    where
        F: Fn(&CollectionChanged<'_, T>) + Send + Sync + 'static,
    {
        let id = SubscriptionId(self.next_id.fetch_add(1, Ordering::Relaxed));
        let handler: SharedHandler<T> = Arc::new(handler);
        self.handlers.write().push((id, handler));
        id
    }

    pub fn try_unsubscribe(&self, id: SubscriptionId) -> Result<()> {
        let mut handlers = self.handlers.write();
        match handlers.iter().position(|(h, _)| *h == id) {
            Some(pos) => {
                handlers.remove(pos);
                Ok(())
            }
            None => Err(PropertyBindError::UnknownSubscription(id.0)),
        }
    }

    pub fn subscriber_count(&self) -> usize {
        self.handlers.read().len()
    }

    pub fn push(&self, item: T) {
        let mut items = self.items.write();
        let index = items.len();
        items.push(item);
        let items = RwLockWriteGuard::downgrade(items);
        self.raise(&CollectionChanged::added(&items[index..], index));
    }

    /// Appends all items and raises a single `Add` carrying them in order.
    pub fn extend_from<I: IntoIterator<Item = T>>(&self, iter: I) {
        let mut items = self.items.write();
        let start = items.len();
        items.extend(iter);
        if items.len() == start {
            return;
        }
        let items = RwLockWriteGuard::downgrade(items);
        self.raise(&CollectionChanged::added(&items[start..], start));
    }

    pub fn try_insert(&self, index: usize, item: T) -> Result<()> {
        let mut items = self.items.write();
        let len = items.len();
        if index > len {
            return Err(PropertyBindError::IndexOutOfRange { index, len });
        }
        items.insert(index, item);
        let items = RwLockWriteGuard::downgrade(items);
        self.raise(&CollectionChanged::added(&items[index..=index], index));
        Ok(())
    }

    pub fn try_remove_at(&self, index: usize) -> Result<T> {
        let mut items = self.items.write();
        let len = items.len();
        if index >= len {
            return Err(PropertyBindError::IndexOutOfRange { index, len });
        }
        let removed = items.remove(index);
        let _items = RwLockWriteGuard::downgrade(items);
        self.raise(&CollectionChanged::removed(std::slice::from_ref(&removed), index));
        Ok(removed)
    }

    pub fn try_replace(&self, index: usize, item: T) -> Result<T> {
        let mut items = self.items.write();
        let len = items.len();
        if index >= len {
            return Err(PropertyBindError::IndexOutOfRange { index, len });
        }
        let old = std::mem::replace(&mut items[index], item);
        let items = RwLockWriteGuard::downgrade(items);
        self.raise(&CollectionChanged::replaced(
            &items[index..=index],
            std::slice::from_ref(&old),
            index,
        ));
        Ok(old)
    }

    pub fn try_move_item(&self, from: usize, to: usize) -> Result<()> {
        let mut items = self.items.write();
        let len = items.len();
        if from >= len || to >= len {
            return Err(PropertyBindError::IndexOutOfRange {
                index: from.max(to),
                len,
            });
        }
        let item = items.remove(from);
        items.insert(to, item);
        let items = RwLockWriteGuard::downgrade(items);
        self.raise(&CollectionChanged::moved(&items[to..=to], from, to));
        Ok(())
    }

    pub fn clear(&self) {
        let mut items = self.items.write();
        items.clear();
        let _items = RwLockWriteGuard::downgrade(items);
        self.raise(&CollectionChanged::reset());
    }

    pub fn len(&self) -> usize {
        self.items.read_recursive().len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.read_recursive().is_empty()
    }

    /// Read access to the backing storage. Holding the guard blocks mutation.
    pub fn read(&self) -> RwLockReadGuard<'_, Vec<T>> {
        self.items.read_recursive()
    }

    pub fn get(&self, index: usize) -> Option<T>
    where
        T: Clone,
    {
        self.items.read_recursive().get(index).cloned()
    }

    pub fn to_vec(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.items.read_recursive().clone()
    }

    // Handlers are snapshotted so a handler may subscribe or unsubscribe without deadlocking.
    fn raise(&self, change: &CollectionChanged<'_, T>) {
        let handlers: SmallVec<[SharedHandler<T>; 2]> =
            self.handlers.read().iter().map(|(_, h)| h.clone()).collect();
        if self.trace {
            tracing::trace!(action = ?change.action(), subscribers = handlers.len(), "collection changed");
        }
        for handler in &handlers {
            handler(change);
        }
    }
}

impl<T: Send + Sync + 'static> ObservableCollection<T> for ObservableVec<T> {
    fn subscribe(&self, handler: Handler<T>) -> SubscriptionId {
        ObservableVec::subscribe(self, handler)
    }
    fn unsubscribe(&self, id: SubscriptionId) -> bool {
        self.try_unsubscribe(id).is_ok()
    }
    fn push(&self, item: T) {
        ObservableVec::push(self, item)
    }
    fn extend_from(&self, items: Vec<T>) {
        ObservableVec::extend_from(self, items)
    }
    fn insert(&self, index: usize, item: T) {
        if let Err(e) = self.try_insert(index, item) {
            tracing::warn!(error = %e, "insert ignored");
        }
    }
    fn remove_at(&self, index: usize) -> Option<T> {
        self.try_remove_at(index).ok()
    }
    fn replace(&self, index: usize, item: T) -> Option<T> {
        match self.try_replace(index, item) {
            Ok(old) => Some(old),
            Err(e) => {
                tracing::warn!(error = %e, "replace ignored");
                None
            }
        }
    }
    fn move_item(&self, from: usize, to: usize) -> bool {
        self.try_move_item(from, to).is_ok()
    }
    fn clear(&self) {
        ObservableVec::clear(self)
    }
    fn len(&self) -> usize {
        ObservableVec::len(self)
    }
    fn for_each(&self, f: &mut dyn FnMut(&T)) {
        for item in self.items.read_recursive().iter() {
            f(item);
        }
    }
}

macro_rules! forward_observable {
    ($ptr:ident) => {
        impl<T, C> ObservableCollection<T> for $ptr<C>
        where
            C: ObservableCollection<T> + ?Sized,
        {
            fn subscribe(&self, handler: Handler<T>) -> SubscriptionId {
                (**self).subscribe(handler)
            }
            fn unsubscribe(&self, id: SubscriptionId) -> bool {
                (**self).unsubscribe(id)
            }
            fn push(&self, item: T) {
                (**self).push(item)
            }
            fn extend_from(&self, items: Vec<T>) {
                (**self).extend_from(items)
            }
            fn insert(&self, index: usize, item: T) {
                (**self).insert(index, item)
            }
            fn remove_at(&self, index: usize) -> Option<T> {
                (**self).remove_at(index)
            }
            fn replace(&self, index: usize, item: T) -> Option<T> {
                (**self).replace(index, item)
            }
            fn move_item(&self, from: usize, to: usize) -> bool {
                (**self).move_item(from, to)
            }
            fn clear(&self) {
                (**self).clear()
            }
            fn len(&self) -> usize {
                (**self).len()
            }
            fn for_each(&self, f: &mut dyn FnMut(&T)) {
                (**self).for_each(f)
            }
        }
    };
}

forward_observable!(Box);
forward_observable!(Arc);
