#![forbid(unsafe_code)]

//! Frame types and pixel operations for the argus playback core.
//!
//! [`Frame`] is a cheaply-clonable decoded video frame ([`bytes::Bytes`]
//! buffer plus dimensions). [`FrameSlot`] is the single-slot latest-wins
//! handoff between the capture worker and the render loop. [`scale`] holds
//! the rescale/convert operations the render loop applies per tick.

mod error;
mod frame;
pub mod scale;
mod slot;

pub use error::FrameError;
pub use frame::{Frame, PixelFormat};
pub use slot::FrameSlot;
