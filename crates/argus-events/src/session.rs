#![forbid(unsafe_code)]

use url::Url;

/// Session lifecycle events published by the player.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SessionEvent {
    /// A playback session started for `url`.
    Started { url: Url },
    /// The active session was torn down (explicit stop or replacement).
    Stopped,
}
