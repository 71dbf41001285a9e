//! In flight action tracking.
use std::cell::RefCell;
use std::collections::HashSet;
use std::hash::Hash;
use std::rc::Rc;

/// Keys of actions currently awaiting the backend.
///
/// Marking is synchronous, so a second click in the same tick is rejected
/// even before the view re-renders with its control disabled.
#[derive(Debug)]
pub struct PendingSet<K> {
    keys: Rc<RefCell<HashSet<K>>>,
}

impl<K> Clone for PendingSet<K> {
    fn clone(&self) -> Self {
        Self {
            keys: self.keys.clone(),
        }
    }
}

impl<K> Default for PendingSet<K> {
    fn default() -> Self {
        Self {
            keys: Rc::new(RefCell::new(HashSet::new())),
        }
    }
}

impl<K> PartialEq for PendingSet<K> {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.keys, &other.keys)
    }
}

impl<K> PendingSet<K>
where
    K: Eq + Hash + Clone,
{
    pub fn new() -> Self {
        Self::default()
    }

    /// Marks the key as pending.
    ///
    /// # Returns
    /// A guard clearing the key when dropped,
    /// or `None` if the key is already pending.
    pub fn begin(&self, key: K) -> Option<PendingGuard<K>> {
        if !self.keys.borrow_mut().insert(key.clone()) {
            return None;
        }

        Some(PendingGuard {
            keys: self.keys.clone(),
            key,
        })
    }

    pub fn is_pending(&self, key: &K) -> bool {
        self.keys.borrow().contains(key)
    }

    pub fn is_empty(&self) -> bool {
        self.keys.borrow().is_empty()
    }
}

/// Clears its key from the [`PendingSet`] on drop.
#[derive(Debug)]
pub struct PendingGuard<K>
where
    K: Eq + Hash,
{
    keys: Rc<RefCell<HashSet<K>>>,
    key: K,
}

impl<K> PendingGuard<K>
where
    K: Eq + Hash,
{
    pub fn key(&self) -> &K {
        &self.key
    }
}

impl<K> Drop for PendingGuard<K>
where
    K: Eq + Hash,
{
    fn drop(&mut self) {
        self.keys.borrow_mut().remove(&self.key);
    }
}

#[cfg(test)]
#[path = "./pending_test.rs"]
mod pending_test;
