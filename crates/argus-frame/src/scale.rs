#![forbid(unsafe_code)]

//! Per-tick pixel operations: rescale to the display size and convert the
//! channel order. Both allocate a fresh buffer; neither is ever called with
//! a slot or surface lock held.

use crate::{
    error::{FrameError, FrameResult},
    Frame, PixelFormat,
};

/// Rescale `src` to exactly `dst_width` x `dst_height` using
/// nearest-neighbour sampling.
///
/// Returns a cheap clone when the frame already has the target size. Fails
/// with [`FrameError::EmptyTarget`] when either target dimension is zero;
/// the render loop checks the surface size before calling, so hitting this
/// means the surface shrank mid-tick.
pub fn resize_nearest(src: &Frame, dst_width: u32, dst_height: u32) -> FrameResult<Frame> {
    if dst_width == 0 || dst_height == 0 {
        return Err(FrameError::EmptyTarget {
            width: dst_width,
            height: dst_height,
        });
    }
    if src.dimensions() == (dst_width, dst_height) {
        return Ok(src.clone());
    }

    let bpp = src.format().bytes_per_pixel();
    let src_w = src.width() as usize;
    let data = src.data();
    let mut out = vec![0u8; dst_width as usize * dst_height as usize * bpp];

    for dy in 0..dst_height as usize {
        let sy = dy * src.height() as usize / dst_height as usize;
        let src_row = sy * src_w * bpp;
        let dst_row = dy * dst_width as usize * bpp;
        for dx in 0..dst_width as usize {
            let sx = dx * src_w / dst_width as usize;
            let s = src_row + sx * bpp;
            let d = dst_row + dx * bpp;
            out[d..d + bpp].copy_from_slice(&data[s..s + bpp]);
        }
    }

    Frame::new(out, dst_width, dst_height, src.format())
}

/// Convert `src` into `target` channel order.
///
/// Returns a cheap clone when the frame is already in `target`. The only
/// supported conversion is the BGR↔RGB byte swap.
pub fn convert(src: &Frame, target: PixelFormat) -> FrameResult<Frame> {
    if src.format() == target {
        return Ok(src.clone());
    }

    let mut out = src.data().to_vec();
    for px in out.chunks_exact_mut(3) {
        px.swap(0, 2);
    }
    Frame::new(out, src.width(), src.height(), target)
}
