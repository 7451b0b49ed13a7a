//! Scoped page-scroll locking.
//!
//! The document shell observes a shared flag instead of having its styles
//! mutated directly; the hero holds an RAII guard while it owns the viewport,
//! so every exit path (including unmount) releases the lock.

use std::cell::Cell;
use std::rc::Rc;

/// Shared scroll-lock flag. Clone handles are cheap and observe the same
/// underlying state; the UI thread is the only mutator.
#[derive(Debug, Clone, Default)]
pub struct ScrollLock {
    locked: Rc<Cell<bool>>,
}

impl ScrollLock {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_locked(&self) -> bool {
        self.locked.get()
    }

    /// Acquires the lock, returning a guard that releases it on drop.
    ///
    /// The hero controller owns at most one guard at a time; holding two
    /// guards over the same lock is a caller bug.
    pub fn acquire(&self) -> ScrollLockGuard {
        self.locked.set(true);
        ScrollLockGuard {
            locked: Rc::clone(&self.locked),
        }
    }
}

/// RAII handle for an acquired scroll lock.
#[derive(Debug)]
pub struct ScrollLockGuard {
    locked: Rc<Cell<bool>>,
}

impl Drop for ScrollLockGuard {
    fn drop(&mut self) {
        self.locked.set(false);
    }
}
