//! Liveness guard tying background commands to a form session.
//!
//! Commands spawned by the form hold a clone of the guard. Once the session
//! is torn down the guard is revoked and any response that arrives later is
//! dropped instead of being delivered to a model that no longer exists.

use std::future::Future;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

/// Shared liveness flag for one form session.
#[derive(Debug, Clone)]
pub struct SessionGuard {
    live: Arc<AtomicBool>,
}

impl Default for SessionGuard {
    fn default() -> Self {
        Self::new()
    }
}

impl SessionGuard {
    /// Creates a live guard.
    #[must_use]
    pub fn new() -> Self {
        Self {
            live: Arc::new(AtomicBool::new(true)),
        }
    }

    /// Returns `true` until [`SessionGuard::revoke`] is called on any clone.
    #[must_use]
    pub fn is_live(&self) -> bool {
        self.live.load(Ordering::Acquire)
    }

    /// Marks the session as torn down.
    pub fn revoke(&self) {
        self.live.store(false, Ordering::Release);
    }

    /// Awaits `future` and yields its output only if the session is still
    /// live when it resolves.
    pub async fn run<F>(&self, future: F) -> Option<F::Output>
    where
        F: Future,
    {
        let output = future.await;
        self.is_live().then_some(output)
    }
}
