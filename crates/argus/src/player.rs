#![forbid(unsafe_code)]

use std::sync::Arc;

use argus_events::{EventBus, SessionEvent};
use argus_frame::FrameSlot;
use argus_source::Connector;
use parking_lot::Mutex;
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;
use tracing::{debug, warn};
use url::Url;

use crate::{
    config::PlayerConfig,
    render::{RenderLoop, Surface},
    session::SessionState,
    worker::CaptureWorker,
};

/// Handles for the tasks of one active session.
struct ActiveSession {
    capture: JoinHandle<()>,
    render: JoinHandle<()>,
    cancel: CancellationToken,
}

/// Playback orchestrator: one stream at a time, capture thread plus render
/// loop, status over the event bus.
///
/// The UI layer owns a `Player`, hands it a [`Connector`] and a [`Surface`],
/// subscribes to [`events`](Self::events), and drives it with
/// [`play`](Self::play) / [`stop`](Self::stop). Sessions are strictly
/// serialized: `play` tears the previous session down and releases its
/// source before opening the new URL.
pub struct Player<C: Connector, S: Surface> {
    config: PlayerConfig,
    connector: Arc<C>,
    surface: Arc<Mutex<S>>,
    slot: Arc<FrameSlot>,
    session: Arc<SessionState>,
    events: EventBus,
    active: Option<ActiveSession>,
}

impl<C: Connector, S: Surface> Player<C, S> {
    /// Create a player with default configuration.
    pub fn new(connector: C, surface: S) -> Self {
        Self::with_config(connector, surface, PlayerConfig::default())
    }

    /// Create a player with explicit configuration.
    pub fn with_config(connector: C, surface: S, config: PlayerConfig) -> Self {
        let events = EventBus::new(config.event_capacity);
        Self {
            config,
            connector: Arc::new(connector),
            surface: Arc::new(Mutex::new(surface)),
            slot: Arc::new(FrameSlot::new()),
            session: Arc::new(SessionState::new()),
            events,
            active: None,
        }
    }

    /// Event bus carrying status and session events.
    #[must_use]
    pub fn events(&self) -> EventBus {
        self.events.clone()
    }

    /// Shared handle to the display surface. The UI resizes and repaints
    /// through this; the render loop reads the size each tick.
    #[must_use]
    pub fn surface(&self) -> Arc<Mutex<S>> {
        Arc::clone(&self.surface)
    }

    /// Shared handle to the frame slot (latest decoded frame, if any).
    #[must_use]
    pub fn frame_slot(&self) -> Arc<FrameSlot> {
        Arc::clone(&self.slot)
    }

    /// True while a session is active. Turns false on [`stop`](Self::stop)
    /// and on unrecoverable source failure.
    #[must_use]
    pub fn is_running(&self) -> bool {
        self.session.is_running()
    }

    /// Start playing `url`, replacing any active session.
    ///
    /// Returns once the previous session (if any) is torn down and the new
    /// capture worker and render loop are spawned. Open success or failure
    /// arrives asynchronously as [`StatusEvent`](argus_events::StatusEvent)s;
    /// `play` itself never fails.
    pub async fn play(&mut self, url: Url) {
        self.stop().await;

        debug!(url = %url, "starting session");
        self.session.begin();
        self.events
            .publish(SessionEvent::Started { url: url.clone() });

        let cancel = CancellationToken::new();
        let worker = CaptureWorker::new(
            Arc::clone(&self.connector),
            url,
            Arc::clone(&self.slot),
            Arc::clone(&self.session),
            self.events.clone(),
            self.config.read_backoff,
        );
        let capture = tokio::task::spawn_blocking(move || worker.run_blocking());

        let render = tokio::spawn(
            RenderLoop::new(
                Arc::clone(&self.surface),
                Arc::clone(&self.slot),
                Arc::clone(&self.session),
                self.config.tick_interval,
                cancel.clone(),
            )
            .run(),
        );

        self.active = Some(ActiveSession {
            capture,
            render,
            cancel,
        });
    }

    /// Stop the active session, if any.
    ///
    /// Halts the worker and render loop, waits up to `stop_timeout` for the
    /// capture worker (whose return releases the source), then clears the
    /// frame slot and the display surface. Idempotent; a no-op when nothing
    /// is playing.
    pub async fn stop(&mut self) {
        self.session.halt();
        let Some(active) = self.active.take() else {
            return;
        };
        active.cancel.cancel();

        match tokio::time::timeout(self.config.stop_timeout, active.capture).await {
            Ok(Ok(())) => {}
            Ok(Err(e)) => warn!(error = %e, "capture worker join failed"),
            Err(_) => {
                // Best-effort: the worker observes the halt at its next read
                // and releases the source then; the caller is not held up.
                warn!("capture worker did not stop in time, detaching");
            }
        }
        if tokio::time::timeout(self.config.stop_timeout, active.render)
            .await
            .is_err()
        {
            warn!("render loop did not stop in time, detaching");
        }

        self.slot.clear();
        self.surface.lock().clear();
        self.events.publish(SessionEvent::Stopped);
        debug!("session stopped");
    }
}

impl<C: Connector, S: Surface> Drop for Player<C, S> {
    fn drop(&mut self) {
        // No join possible here; halting is enough for both loops to wind
        // down on their own.
        self.session.halt();
        if let Some(active) = self.active.take() {
            active.cancel.cancel();
        }
    }
}
