//! MWC Srand Core - Seedable Pseudo-Random Generator
//!
//! Deterministic multiply-with-carry generator with sampling helpers and
//! statistical distributions built on top of a single uniform draw.
//!
//! # Architecture
//!
//! - **rng**: MWC engine and entropy source for unseeded generators
//! - **state**: Snapshot/restore of generator state
//! - **selection**: Ranged draws, choice, sampling, shuffling
//! - **distributions**: Gaussian, exponential and Poisson samples
//! - **models**: Generator event log
//! - **config**: Construction configuration
//! - **global**: Optional process-wide default generator
//!
//! # Critical Invariants
//!
//! 1. Same seed → same sequence, bit for bit
//! 2. `mz` and `mw` are 32-bit words; all arithmetic wraps
//! 3. Every derived operation consumes draws in a fixed order
//!
//! NOT cryptographically secure. Never use for keys, tokens or anything
//! an attacker must not predict.

// Module declarations
pub mod config;
pub mod distributions;
pub mod error;
pub mod global;
pub mod models;
pub mod rng;
pub mod selection;
pub mod state;

// Re-exports for convenience
pub use config::SrandConfig;
pub use error::SrandError;
pub use models::event::{EventLog, GeneratorEvent, SeedSource};
pub use rng::Srand;
pub use state::GeneratorState;
