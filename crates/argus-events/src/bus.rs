#![forbid(unsafe_code)]

use tokio::sync::broadcast;

use crate::Event;

/// Per-subscriber backlog used by [`EventBus::default`].
///
/// Status traffic is sparse (one event per connection change, one warning
/// per backoff interval), so a small backlog is enough for any subscriber
/// that polls at UI pace.
pub const DEFAULT_CAPACITY: usize = 32;

/// Broadcast event bus bridging the capture worker and the UI layer.
///
/// Every pipeline component holds a cloned `EventBus` and publishes into it;
/// each subscriber gets an independent receiver. `publish()` is a plain sync
/// call so the blocking capture thread can report status without touching
/// the runtime. With no subscribers, events are dropped silently.
#[derive(Clone, Debug)]
pub struct EventBus {
    tx: broadcast::Sender<Event>,
}

impl Default for EventBus {
    fn default() -> Self {
        Self::new(DEFAULT_CAPACITY)
    }
}

impl EventBus {
    /// Create a bus with room for `capacity` undelivered events per
    /// subscriber. A slow subscriber past that lags (`RecvError::Lagged`)
    /// instead of stalling the producer.
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        // The underlying channel rejects a zero capacity.
        let (tx, _) = broadcast::channel(capacity.clamp(1, usize::MAX));
        Self { tx }
    }

    /// Publish an event to all current subscribers.
    ///
    /// Accepts anything convertible into [`Event`], so callers pass
    /// sub-types directly: `bus.publish(StatusEvent::connected())`.
    /// Fire-and-forget: a send error only means nobody is listening.
    pub fn publish<E: Into<Event>>(&self, event: E) {
        self.tx.send(event.into()).ok();
    }

    /// Subscribe to all events published after this call.
    #[must_use]
    pub fn subscribe(&self) -> broadcast::Receiver<Event> {
        self.tx.subscribe()
    }

    /// Number of live subscribers.
    #[must_use]
    pub fn subscriber_count(&self) -> usize {
        self.tx.receiver_count()
    }
}
