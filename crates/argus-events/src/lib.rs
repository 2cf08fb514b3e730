#![forbid(unsafe_code)]

//! Event bus for the argus playback pipeline.
//!
//! The bus is the "status sink" of the core: the capture worker publishes
//! connection status, the player publishes session lifecycle. The UI layer
//! subscribes and renders status however it likes; nothing here blocks on a
//! slow subscriber.

mod bus;
mod event;
mod session;
mod status;

pub use bus::{EventBus, DEFAULT_CAPACITY};
pub use event::Event;
pub use session::SessionEvent;
pub use status::{StatusEvent, StatusKind};
