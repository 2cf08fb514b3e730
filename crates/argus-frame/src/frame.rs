#![forbid(unsafe_code)]

use bytes::Bytes;

use crate::error::{FrameError, FrameResult};

/// Pixel channel order of a decoded frame.
///
/// Network camera decoders commonly emit BGR; display surfaces commonly
/// expect RGB. Both are tightly packed, 3 bytes per pixel, no row padding.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PixelFormat {
    /// Red, green, blue channel order.
    Rgb24,
    /// Blue, green, red channel order.
    Bgr24,
}

impl PixelFormat {
    /// Bytes per pixel for this format.
    #[must_use]
    pub const fn bytes_per_pixel(self) -> usize {
        3
    }
}

/// One decoded video frame.
///
/// The pixel buffer is an immutable [`Bytes`], so cloning a frame shares the
/// underlying allocation. This keeps the frame-slot critical section to a
/// handle copy rather than a pixel copy.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Frame {
    data: Bytes,
    width: u32,
    height: u32,
    format: PixelFormat,
}

impl Frame {
    /// Create a frame from an existing pixel buffer.
    ///
    /// Fails with [`FrameError::EmptyFrame`] when either dimension is zero
    /// (every constructed frame has at least one pixel, so downstream pixel
    /// operations never index into an empty buffer), and with
    /// [`FrameError::BufferSize`] when the buffer length does not match
    /// `width * height * bytes_per_pixel`.
    pub fn new(
        data: impl Into<Bytes>,
        width: u32,
        height: u32,
        format: PixelFormat,
    ) -> FrameResult<Self> {
        if width == 0 || height == 0 {
            return Err(FrameError::EmptyFrame { width, height });
        }
        let data = data.into();
        let expected = width as usize * height as usize * format.bytes_per_pixel();
        if data.len() != expected {
            return Err(FrameError::BufferSize {
                width,
                height,
                format,
                expected,
                actual: data.len(),
            });
        }
        Ok(Self {
            data,
            width,
            height,
            format,
        })
    }

    /// Pixel buffer, row-major, tightly packed.
    #[must_use]
    pub fn data(&self) -> &Bytes {
        &self.data
    }

    /// Frame width in pixels.
    #[must_use]
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Frame height in pixels.
    #[must_use]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Channel order of the pixel buffer.
    #[must_use]
    pub fn format(&self) -> PixelFormat {
        self.format
    }

    /// Frame dimensions as `(width, height)`.
    #[must_use]
    pub fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }
}
