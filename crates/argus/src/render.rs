#![forbid(unsafe_code)]

//! Timer-driven render loop: fetch the latest frame, fit it to the surface,
//! draw.

use std::{sync::Arc, time::Duration};

use argus_frame::{scale, Frame, FrameError, FrameSlot, PixelFormat};
use parking_lot::Mutex;
use thiserror::Error;
use tokio::time::MissedTickBehavior;
use tokio_util::sync::CancellationToken;
use tracing::{debug, trace};

use crate::session::SessionState;

/// A caller-owned display surface the render loop draws into.
///
/// Supplied by the UI layer; the loop queries the current size each tick so
/// the caller is free to resize at any time. Implementations must tolerate
/// `blit` and `clear` being called from a runtime thread.
pub trait Surface: Send + 'static {
    /// Current drawable size in pixels. A zero dimension means "nothing to
    /// draw onto yet" (e.g. the widget is not laid out); the loop skips the
    /// tick and keeps re-arming.
    fn dimensions(&self) -> (u32, u32);

    /// Channel order the surface expects.
    fn format(&self) -> PixelFormat;

    /// Draw `frame` at the top-left origin, replacing all previous
    /// contents. The frame is already rescaled to [`dimensions`](Self::dimensions)
    /// and converted to [`format`](Self::format).
    fn blit(&mut self, frame: &Frame) -> Result<(), RenderError>;

    /// Erase all contents. Called when a session stops.
    fn clear(&mut self);
}

/// Failure while fitting or drawing one frame.
///
/// Always local to a single tick: the loop logs it and tries again on the
/// next tick.
#[derive(Debug, Error)]
pub enum RenderError {
    #[error("blit failed: {0}")]
    Blit(String),

    #[error(transparent)]
    Frame(#[from] FrameError),
}

/// Render loop for one playback session.
///
/// Ticks every `tick_interval`. Each tick fetches the latest frame from the
/// slot (if any), rescales it to the surface's current size, converts to the
/// surface's channel order and blits. A tick failure never ends the loop;
/// only session halt or cancellation does.
pub struct RenderLoop<S: Surface> {
    surface: Arc<Mutex<S>>,
    slot: Arc<FrameSlot>,
    session: Arc<SessionState>,
    tick_interval: Duration,
    cancel: CancellationToken,
}

impl<S: Surface> RenderLoop<S> {
    pub fn new(
        surface: Arc<Mutex<S>>,
        slot: Arc<FrameSlot>,
        session: Arc<SessionState>,
        tick_interval: Duration,
        cancel: CancellationToken,
    ) -> Self {
        Self {
            surface,
            slot,
            session,
            tick_interval,
            cancel,
        }
    }

    /// Run until the session halts or the token is cancelled.
    pub async fn run(self) {
        trace!("render loop started");
        let mut ticker = tokio::time::interval(self.tick_interval);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);

        loop {
            tokio::select! {
                () = self.cancel.cancelled() => break,
                _ = ticker.tick() => {}
            }
            if !self.session.is_running() {
                break;
            }
            if let Err(e) = self.render_tick() {
                // Transient render glitch: swallow, retry next tick.
                debug!(error = %e, "render fault");
            }
        }
        trace!("render loop stopped");
    }

    /// Render at most one frame.
    ///
    /// Pixel work happens with no lock held; the surface lock is taken only
    /// to read the size/format and again to blit. If the surface resizes in
    /// between, the blit may be rejected and the next tick catches up.
    fn render_tick(&self) -> Result<(), RenderError> {
        let Some(frame) = self.slot.latest() else {
            return Ok(());
        };

        let (width, height, format) = {
            let surface = self.surface.lock();
            let (w, h) = surface.dimensions();
            (w, h, surface.format())
        };
        if width == 0 || height == 0 {
            return Ok(());
        }

        let fitted = scale::resize_nearest(&frame, width, height)?;
        let converted = scale::convert(&fitted, format)?;
        self.surface.lock().blit(&converted)
    }
}
