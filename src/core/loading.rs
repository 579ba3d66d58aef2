//! # Loading Gate
//!
//! Reference-counted busy flag behind the global loading overlay.
//!
//! ```text
//! show()  show()  hide()  hide()
//!   1       2       1       0
//! busy    busy    busy    idle
//! ```
//!
//! Overlapping operations each call `show()` and the overlay only goes away
//! once every one of them has called `hide()`. `hide()` never takes the count
//! below zero.
//!
//! Prefer the scoped forms (`scope`, `with_scope`, `with_scope_sync`): they
//! release on every exit path, including `?` and panics. A bare `show()`
//! without a matching `hide()` leaves the gate busy forever.
//!
//! The gate is a cheap clonable handle. Clones share one counter, so a task
//! spawned on the runtime can hold its own copy.

use std::future::Future;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

#[derive(Debug, Clone, Default)]
pub struct LoadingGate {
    count: Arc<AtomicUsize>,
}

impl LoadingGate {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn show(&self) {
        let depth = self.count.fetch_add(1, Ordering::SeqCst) + 1;
        log::debug!("Loading gate show (depth={depth})");
    }

    pub fn hide(&self) {
        let previous = self
            .count
            .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |n| Some(n.saturating_sub(1)))
            .unwrap_or(0);
        if previous == 0 {
            log::warn!("Loading gate hide() with no matching show()");
        } else {
            log::debug!("Loading gate hide (depth={})", previous - 1);
        }
    }

    pub fn is_busy(&self) -> bool {
        self.count() > 0
    }

    pub fn count(&self) -> usize {
        self.count.load(Ordering::SeqCst)
    }

    /// Show now, hide when the returned guard is dropped.
    pub fn scope(&self) -> LoadingGuard {
        self.show();
        LoadingGuard { gate: self.clone() }
    }

    /// Run `action` to completion with the gate held.
    ///
    /// The output (including any `Err`) is returned unchanged after the gate
    /// has been released.
    pub async fn with_scope<F, T>(&self, action: F) -> T
    where
        F: Future<Output = T>,
    {
        let _guard = self.scope();
        action.await
    }

    /// Synchronous counterpart of [`with_scope`](Self::with_scope).
    pub fn with_scope_sync<F, T>(&self, action: F) -> T
    where
        F: FnOnce() -> T,
    {
        let _guard = self.scope();
        action()
    }
}

/// Holds one `show()` on a [`LoadingGate`]; calls `hide()` exactly once on drop.
#[must_use = "the gate is released as soon as the guard is dropped"]
pub struct LoadingGuard {
    gate: LoadingGate,
}

impl Drop for LoadingGuard {
    fn drop(&mut self) {
        self.gate.hide();
    }
}
