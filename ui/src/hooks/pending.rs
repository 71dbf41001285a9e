//! Track actions awaiting the backend.
use alumni_core::pending::{PendingGuard, PendingSet};
use std::hash::Hash;
use yew::prelude::*;

/// Handle returned by [`use_pending`].
pub struct UsePendingHandle<K>
where
    K: Eq + Hash + Clone + 'static,
{
    pending: PendingSet<K>,
    rerender: UseForceUpdateHandle,
}

impl<K> UsePendingHandle<K>
where
    K: Eq + Hash + Clone + 'static,
{
    /// Marks the key as pending and re-renders.
    ///
    /// # Returns
    /// `None` if the key is already pending.
    /// The key is cleared when the returned guard drops.
    pub fn begin(&self, key: K) -> Option<PendingGuard<K>> {
        let guard = self.pending.begin(key)?;
        self.rerender.force_update();
        Some(guard)
    }

    /// Drops the guard and re-renders.
    pub fn finish(&self, guard: PendingGuard<K>) {
        drop(guard);
        self.rerender.force_update();
    }

    pub fn is_pending(&self, key: &K) -> bool {
        self.pending.is_pending(key)
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }
}

impl<K> Clone for UsePendingHandle<K>
where
    K: Eq + Hash + Clone + 'static,
{
    fn clone(&self) -> Self {
        Self {
            pending: self.pending.clone(),
            rerender: self.rerender.clone(),
        }
    }
}

impl<K> PartialEq for UsePendingHandle<K>
where
    K: Eq + Hash + Clone + 'static,
{
    fn eq(&self, other: &Self) -> bool {
        self.pending == other.pending
    }
}

/// Tracks keys of in flight actions for the component.
#[hook]
pub fn use_pending<K>() -> UsePendingHandle<K>
where
    K: Eq + Hash + Clone + 'static,
{
    let pending = use_memo((), |_| PendingSet::new());
    let rerender = use_force_update();

    UsePendingHandle {
        pending: (*pending).clone(),
        rerender,
    }
}
