#![forbid(unsafe_code)]

use std::time::Duration;

/// Configuration for a [`Player`](crate::Player).
#[derive(Clone, Debug)]
pub struct PlayerConfig {
    /// Delay between retries after a transient read failure.
    /// Default: 1 s.
    pub read_backoff: Duration,
    /// Render loop period. Default: 30 ms (~33 Hz).
    pub tick_interval: Duration,
    /// How long `stop()` waits for the capture worker to finish before
    /// proceeding with best-effort cleanup. Default: 1 s.
    pub stop_timeout: Duration,
    /// Event bus capacity per subscriber.
    /// Default: [`argus_events::DEFAULT_CAPACITY`].
    pub event_capacity: usize,
}

impl Default for PlayerConfig {
    fn default() -> Self {
        Self {
            read_backoff: Duration::from_secs(1),
            tick_interval: Duration::from_millis(30),
            stop_timeout: Duration::from_secs(1),
            event_capacity: argus_events::DEFAULT_CAPACITY,
        }
    }
}

impl PlayerConfig {
    /// Set the delay between retries after a transient read failure.
    #[must_use]
    pub fn with_read_backoff(mut self, backoff: Duration) -> Self {
        self.read_backoff = backoff;
        self
    }

    /// Set the render loop period.
    #[must_use]
    pub fn with_tick_interval(mut self, interval: Duration) -> Self {
        self.tick_interval = interval;
        self
    }

    /// Set how long `stop()` waits for the capture worker.
    #[must_use]
    pub fn with_stop_timeout(mut self, timeout: Duration) -> Self {
        self.stop_timeout = timeout;
        self
    }

    /// Set the event bus capacity per subscriber.
    #[must_use]
    pub fn with_event_capacity(mut self, capacity: usize) -> Self {
        self.event_capacity = capacity;
        self
    }
}
