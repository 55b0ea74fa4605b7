//! The global `loading` flag.
//!
//! At most one mutating call is in flight at a time. The flag is taken with
//! `try_acquire` and released when the returned guard drops, on success,
//! failure and unwind alike.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Shared handle to the loading flag. Clones observe the same flag.
#[derive(Debug, Clone, Default)]
pub struct LoadingGate {
    flag: Arc<AtomicBool>,
}

impl LoadingGate {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_loading(&self) -> bool {
        self.flag.load(Ordering::Acquire)
    }

    /// Take the flag, or `None` if a call is already in flight.
    pub fn try_acquire(&self) -> Option<LoadingGuard> {
        self.flag
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .ok()
            .map(|_| LoadingGuard {
                flag: Arc::clone(&self.flag),
            })
    }
}

/// Holds the loading flag until dropped.
#[must_use = "the loading flag is released as soon as the guard is dropped"]
#[derive(Debug)]
pub struct LoadingGuard {
    flag: Arc<AtomicBool>,
}

impl Drop for LoadingGuard {
    fn drop(&mut self) {
        self.flag.store(false, Ordering::Release);
    }
}
