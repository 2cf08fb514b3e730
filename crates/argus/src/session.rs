#![forbid(unsafe_code)]

use std::sync::atomic::{AtomicBool, Ordering};

/// Shared running flag for one playback session.
///
/// Wrapped in `Arc` and shared between the player (main context), the
/// capture worker (blocking thread) and the render loop (timer task).
/// Cancellation is cooperative: the worker observes `halt()` at the top of
/// its next read iteration, the render loop at its next tick.
#[derive(Debug, Default)]
pub struct SessionState {
    running: AtomicBool,
}

impl SessionState {
    /// Create an inactive session state.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Mark the session active.
    pub fn begin(&self) {
        self.running.store(true, Ordering::SeqCst);
    }

    /// Mark the session inactive. Called on explicit stop and on
    /// unrecoverable worker failure.
    pub fn halt(&self) {
        self.running.store(false, Ordering::SeqCst);
    }

    /// True while a session is active.
    #[must_use]
    pub fn is_running(&self) -> bool {
        self.running.load(Ordering::SeqCst)
    }
}
