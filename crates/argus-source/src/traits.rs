#![forbid(unsafe_code)]

use argus_frame::Frame;
use url::Url;

use crate::error::SourceResult;

/// An open, decodable network video feed.
///
/// Owned exclusively by the capture worker for the duration of one playback
/// session and released by dropping it. `read_frame` is a blocking call and
/// is always invoked from a dedicated blocking context, never from the
/// render side.
///
/// Normative:
/// - `read_frame` blocks until one decoded frame is available, OR returns
///   [`SourceError::FrameUnavailable`](crate::SourceError::FrameUnavailable)
///   when the feed is degraded but the source remains open (the worker
///   retries), OR returns
///   [`SourceError::Fatal`](crate::SourceError::Fatal) when the source is
///   unusable (the worker terminates the session).
/// - Dropping the source releases the underlying handle. Implementations
///   must make drop safe to run on any thread.
pub trait VideoSource: Send + 'static {
    /// Pull the next decoded frame.
    fn read_frame(&mut self) -> SourceResult<Frame>;
}

/// Factory turning a URL into an open [`VideoSource`].
///
/// `connect` runs on the capture thread, so it may block (DNS, RTSP
/// handshake, codec probing). The URL is opaque to the core beyond being
/// handed to this call — scheme, embedded credentials, host, port and path
/// are the connector's business.
pub trait Connector: Send + Sync + 'static {
    type Source: VideoSource;

    /// Open `url`.
    ///
    /// Returns [`SourceError::Open`](crate::SourceError::Open) when the feed
    /// cannot be reached or decoded; the worker reports it once and does not
    /// retry.
    fn connect(&self, url: &Url) -> SourceResult<Self::Source>;
}

/// Shared connectors connect through the shared handle, so a caller can
/// keep one and hand a clone to the player.
impl<C: Connector> Connector for std::sync::Arc<C> {
    type Source = C::Source;

    fn connect(&self, url: &Url) -> SourceResult<Self::Source> {
        (**self).connect(url)
    }
}
