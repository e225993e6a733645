//! Test-only helpers shared across unit and integration tests.
//!
//! Compiled for unit tests and, via the `test-util` feature, for the
//! integration tests under `tests/`.

mod collecting_sink;
mod shared_buffer;

pub use collecting_sink::{Collected, CollectingSink};
pub use shared_buffer::SharedBuf;
