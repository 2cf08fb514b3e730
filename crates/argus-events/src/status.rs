#![forbid(unsafe_code)]

/// Severity/category of a connection status report.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum StatusKind {
    /// Session is attempting to open the source.
    Connecting,
    /// Source opened; frames should start flowing.
    Connected,
    /// Session ended unrecoverably (open failure or fatal read fault).
    Failed,
    /// Transient degradation (e.g. signal lost); the worker keeps retrying.
    Warning,
}

/// One connection status report from the capture worker.
///
/// Delivered asynchronously via the [`EventBus`](crate::EventBus); never
/// persisted.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StatusEvent {
    pub kind: StatusKind,
    pub message: String,
}

impl StatusEvent {
    /// Status for an open attempt in progress.
    #[must_use]
    pub fn connecting() -> Self {
        Self {
            kind: StatusKind::Connecting,
            message: "connecting".into(),
        }
    }

    /// Status for a successfully opened source.
    #[must_use]
    pub fn connected() -> Self {
        Self {
            kind: StatusKind::Connected,
            message: "connected".into(),
        }
    }

    /// Terminal failure status with a reason.
    pub fn failed(message: impl Into<String>) -> Self {
        Self {
            kind: StatusKind::Failed,
            message: message.into(),
        }
    }

    /// Non-terminal degradation status with a reason.
    pub fn warning(message: impl Into<String>) -> Self {
        Self {
            kind: StatusKind::Warning,
            message: message.into(),
        }
    }
}
