#![forbid(unsafe_code)]

use parking_lot::Mutex;

use crate::Frame;

/// Single-slot, latest-wins frame handoff.
///
/// The capture worker writes with [`put`](Self::put), the render loop reads
/// with [`latest`](Self::latest). At most one frame is stored; a new frame
/// always replaces the previous one, so a slow consumer never causes a
/// backlog. Reading does not clear the slot — the render loop may repaint the
/// same frame if the producer has not refreshed it yet.
///
/// Both operations are non-blocking beyond the mutex critical section, which
/// is a handle swap/clone only. No decoding, rescaling, or I/O happens while
/// the lock is held.
#[derive(Debug, Default)]
pub struct FrameSlot {
    inner: Mutex<Option<Frame>>,
}

impl FrameSlot {
    /// Create an empty slot.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Store `frame`, dropping any previously stored frame.
    pub fn put(&self, frame: Frame) {
        *self.inner.lock() = Some(frame);
    }

    /// Clone out the most recently stored frame, if any.
    ///
    /// The slot keeps the frame; repeat calls return the same frame until
    /// the producer overwrites it.
    #[must_use]
    pub fn latest(&self) -> Option<Frame> {
        self.inner.lock().clone()
    }

    /// Drop the stored frame, if any.
    pub fn clear(&self) {
        *self.inner.lock() = None;
    }

    /// True when no frame is stored.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.inner.lock().is_none()
    }
}
