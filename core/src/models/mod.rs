//! Domain models for the generator

pub mod event;

// Re-exports
pub use event::{EventLog, GeneratorEvent, SeedSource};
