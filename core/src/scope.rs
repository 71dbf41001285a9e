//! Stale update guard.
//!
//! A view takes a [`ScopeTicket`] before starting a fetch and only applies
//! the result while the ticket is current. Unmounting the view, or changing
//! what it depends on, invalidates the scope and every outstanding ticket.
use std::cell::Cell;
use std::rc::Rc;

/// Generation counter shared by a view and its tickets.
#[derive(Clone, Debug, Default)]
pub struct ViewScope {
    generation: Rc<Cell<u64>>,
}

impl ViewScope {
    pub fn new() -> Self {
        Self::default()
    }

    /// Ticket for work started now.
    pub fn ticket(&self) -> ScopeTicket {
        ScopeTicket {
            generation: self.generation.clone(),
            issued: self.generation.get(),
        }
    }

    /// Makes every outstanding ticket stale.
    pub fn invalidate(&self) {
        self.generation.set(self.generation.get().wrapping_add(1));
    }
}

/// Proof that the issuing view is still interested in a result.
#[derive(Clone, Debug)]
pub struct ScopeTicket {
    generation: Rc<Cell<u64>>,
    issued: u64,
}

impl ScopeTicket {
    pub fn is_current(&self) -> bool {
        self.generation.get() == self.issued
    }

    /// Runs `apply` only if the ticket is current.
    ///
    /// # Returns
    /// `true` if `apply` ran.
    pub fn apply(&self, apply: impl FnOnce()) -> bool {
        if !self.is_current() {
            tracing::trace!("discarding stale result");
            return false;
        }

        apply();
        true
    }
}

#[cfg(test)]
#[path = "./scope_test.rs"]
mod scope_test;
