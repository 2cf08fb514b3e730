#![forbid(unsafe_code)]

use thiserror::Error;

/// Errors surfaced by a [`VideoSource`](crate::VideoSource) or
/// [`Connector`](crate::Connector).
///
/// The capture worker maps these onto its retry policy:
/// - `Open` is never retried; the session terminates after one report.
/// - `FrameUnavailable` is retried forever with a fixed backoff.
/// - `Fatal` terminates the session.
#[derive(Debug, Error)]
pub enum SourceError {
    #[error("failed to open {url}: {reason}")]
    Open { url: String, reason: String },

    #[error("no frame available")]
    FrameUnavailable,

    #[error("source fault: {0}")]
    Fatal(String),
}

impl SourceError {
    /// True for failures the capture worker retries without ending the
    /// session.
    #[must_use]
    pub fn is_transient(&self) -> bool {
        matches!(self, Self::FrameUnavailable)
    }
}

/// Result type for `argus-source`.
pub type SourceResult<T> = Result<T, SourceError>;
