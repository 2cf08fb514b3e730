//! Play a scripted source end to end and log what the pipeline does.
//!
//! ```
//! cargo run -p argus --example scripted_play --features test-utils
//! ```

use std::{error::Error, time::Duration};

use argus::prelude::*;
use argus_source::testing::{solid_frame, ConnectStep, ReadStep, ScriptedConnector};
use tracing::{info, metadata::LevelFilter};
use tracing_subscriber::EnvFilter;

/// Surface that logs each blit instead of drawing.
struct LogSurface {
    width: u32,
    height: u32,
}

impl Surface for LogSurface {
    fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    fn format(&self) -> PixelFormat {
        PixelFormat::Rgb24
    }

    fn blit(&mut self, frame: &Frame) -> Result<(), RenderError> {
        info!(
            "blit {}x{} {:?}, first pixel {:?}",
            frame.width(),
            frame.height(),
            frame.format(),
            &frame.data()[0..3]
        );
        Ok(())
    }

    fn clear(&mut self) {
        info!("surface cleared");
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error + Send + Sync>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::default()
                .add_directive("argus=trace".parse()?)
                .add_directive(LevelFilter::INFO.into()),
        )
        .init();

    // Ten distinct frames, a dropout, then silence until stop.
    let mut steps: Vec<ReadStep> = (0..10)
        .map(|i| ReadStep::Frame(solid_frame(16, 16, i * 20, PixelFormat::Bgr24)))
        .collect();
    steps.insert(5, ReadStep::Transient);
    let connector = ScriptedConnector::new(vec![ConnectStep::Open(steps)]);

    let config = PlayerConfig::default().with_read_backoff(Duration::from_millis(100));
    let mut player = Player::with_config(connector, LogSurface { width: 32, height: 24 }, config);
    let mut events = player.events().subscribe();

    player.play(Url::parse("rtsp://demo.local/stream1")?).await;

    let watcher = tokio::spawn(async move {
        while let Ok(event) = events.recv().await {
            info!(?event, "event");
        }
    });

    tokio::time::sleep(Duration::from_millis(500)).await;
    player.stop().await;
    watcher.abort();

    info!("done");
    Ok(())
}
