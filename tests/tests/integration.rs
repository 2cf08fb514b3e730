//! All integration tests for the argus playback core.
#![expect(
    clippy::unwrap_used,
    reason = "integration test crate — unwraps are acceptable in test code"
)]

mod render_loop;
