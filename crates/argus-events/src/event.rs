#![forbid(unsafe_code)]

use crate::{SessionEvent, StatusEvent};

/// Unified event for the playback pipeline.
///
/// Hierarchical: each subsystem has its own variant with a sub-type, so
/// subscribers can match on the subsystem they care about.
#[derive(Clone, Debug)]
pub enum Event {
    /// Connection status from the capture worker.
    Status(StatusEvent),
    /// Session lifecycle from the player.
    Session(SessionEvent),
}

impl From<StatusEvent> for Event {
    fn from(e: StatusEvent) -> Self {
        Self::Status(e)
    }
}

impl From<SessionEvent> for Event {
    fn from(e: SessionEvent) -> Self {
        Self::Session(e)
    }
}
