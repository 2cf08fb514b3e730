#![forbid(unsafe_code)]

//! Blocking capture worker: owns one [`VideoSource`] for the lifetime of a
//! session and keeps the shared frame slot fresh.

use std::{sync::Arc, time::Duration};

use argus_events::{EventBus, StatusEvent};
use argus_frame::FrameSlot;
use argus_source::{Connector, VideoSource};
use tracing::{debug, trace, warn};
use url::Url;

use crate::session::SessionState;

/// Capture worker for one playback session.
///
/// Runs in a `spawn_blocking` task. Opens the URL via the connector, then
/// pulls frames until the session halts or the source faults:
///
/// - a successful read overwrites the frame slot (latest-wins);
/// - a transient failure publishes a warning, sleeps the backoff and
///   retries forever — a degraded feed only ends via explicit stop;
/// - an open failure or fatal fault publishes `Failed`, halts the session
///   and ends the worker.
///
/// The source is dropped (released) exactly once on every exit path, when
/// `run_blocking` returns.
pub struct CaptureWorker<C: Connector> {
    connector: Arc<C>,
    url: Url,
    slot: Arc<FrameSlot>,
    session: Arc<SessionState>,
    events: EventBus,
    backoff: Duration,
}

impl<C: Connector> CaptureWorker<C> {
    pub fn new(
        connector: Arc<C>,
        url: Url,
        slot: Arc<FrameSlot>,
        session: Arc<SessionState>,
        events: EventBus,
        backoff: Duration,
    ) -> Self {
        Self {
            connector,
            url,
            slot,
            session,
            events,
            backoff,
        }
    }

    /// Run the capture loop. Call from a dedicated thread or
    /// `spawn_blocking` task.
    pub fn run_blocking(self) {
        trace!(url = %self.url, "capture worker started");
        self.events.publish(StatusEvent::connecting());

        let mut source = match self.connector.connect(&self.url) {
            Ok(source) => {
                self.events.publish(StatusEvent::connected());
                source
            }
            Err(e) => {
                debug!(url = %self.url, error = %e, "open failed");
                self.events.publish(StatusEvent::failed(e.to_string()));
                self.session.halt();
                return;
            }
        };

        while self.session.is_running() {
            match source.read_frame() {
                Ok(frame) => self.slot.put(frame),
                Err(e) if e.is_transient() => {
                    trace!(url = %self.url, "no frame, backing off");
                    self.events
                        .publish(StatusEvent::warning("signal lost, retrying"));
                    std::thread::sleep(self.backoff);
                }
                Err(e) => {
                    warn!(url = %self.url, error = %e, "fatal read fault");
                    self.events.publish(StatusEvent::failed(e.to_string()));
                    self.session.halt();
                    break;
                }
            }
        }

        trace!(url = %self.url, "capture worker stopped");
        // `source` drops here, releasing the stream on every exit path.
        drop(source);
    }
}
