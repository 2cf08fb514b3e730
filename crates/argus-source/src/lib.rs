#![forbid(unsafe_code)]

//! Video source contract for the argus playback core.
//!
//! The core treats a network camera as two seams: a [`Connector`] that turns
//! a URL into an open [`VideoSource`], and the source itself, a blocking
//! frame pump. Production decoders (FFmpeg-, GStreamer- or OpenCV-backed
//! capture) implement these traits outside this workspace; the pipeline and
//! its tests only depend on the contract.

mod error;
mod traits;

#[cfg(any(test, feature = "test-utils"))]
pub mod testing;

pub use error::{SourceError, SourceResult};
pub use traits::{Connector, VideoSource};
