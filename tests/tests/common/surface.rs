use std::sync::{
    atomic::{AtomicUsize, Ordering},
    Arc,
};

use argus::{
    frame::{Frame, PixelFormat},
    RenderError, Surface,
};

/// Resizable in-memory surface that counts blits and clears.
pub struct TestSurface {
    pub width: u32,
    pub height: u32,
    pub fail_blit: bool,
    pub last_frame: Option<Frame>,
    blits: Arc<AtomicUsize>,
    clears: Arc<AtomicUsize>,
}

/// Counter handles that stay valid after the surface moves into a player.
#[derive(Clone)]
pub struct SurfaceCounters {
    blits: Arc<AtomicUsize>,
    clears: Arc<AtomicUsize>,
}

impl SurfaceCounters {
    pub fn blits(&self) -> usize {
        self.blits.load(Ordering::SeqCst)
    }

    pub fn clears(&self) -> usize {
        self.clears.load(Ordering::SeqCst)
    }
}

impl TestSurface {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            fail_blit: false,
            last_frame: None,
            blits: Arc::new(AtomicUsize::new(0)),
            clears: Arc::new(AtomicUsize::new(0)),
        }
    }

    pub fn counters(&self) -> SurfaceCounters {
        SurfaceCounters {
            blits: Arc::clone(&self.blits),
            clears: Arc::clone(&self.clears),
        }
    }
}

impl Surface for TestSurface {
    fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    fn format(&self) -> PixelFormat {
        PixelFormat::Rgb24
    }

    fn blit(&mut self, frame: &Frame) -> Result<(), RenderError> {
        if self.fail_blit {
            return Err(RenderError::Blit("scripted blit failure".into()));
        }
        self.blits.fetch_add(1, Ordering::SeqCst);
        self.last_frame = Some(frame.clone());
        Ok(())
    }

    fn clear(&mut self) {
        self.clears.fetch_add(1, Ordering::SeqCst);
        self.last_frame = None;
    }
}
