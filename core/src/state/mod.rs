//! Save/restore of generator state
//!
//! A snapshot is the whole engine state (`seed`, `mz`, `mw`). Restoring it
//! reproduces the exact continuation of the stream from the point of capture.

mod snapshot;

pub use snapshot::GeneratorState;
