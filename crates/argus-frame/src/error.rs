#![forbid(unsafe_code)]

use thiserror::Error;

use crate::PixelFormat;

/// Errors produced by `argus-frame`.
#[derive(Debug, Error)]
pub enum FrameError {
    #[error(
        "pixel buffer is {actual} bytes, expected {expected} for {width}x{height} {format:?}"
    )]
    BufferSize {
        width: u32,
        height: u32,
        format: PixelFormat,
        expected: usize,
        actual: usize,
    },

    #[error("frame dimensions must be non-zero (got {width}x{height})")]
    EmptyFrame { width: u32, height: u32 },

    #[error("target dimensions must be non-zero (got {width}x{height})")]
    EmptyTarget { width: u32, height: u32 },
}

/// Result type for `argus-frame`.
pub type FrameResult<T> = Result<T, FrameError>;
