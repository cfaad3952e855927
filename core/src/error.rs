//! Error taxonomy for generator operations
//!
//! Every error is raised synchronously by the call whose precondition was
//! violated. There is no I/O, so nothing here is transient or retryable.

use thiserror::Error;

/// Errors that can occur during generator operations
#[derive(Debug, Error, Clone, PartialEq)]
pub enum SrandError {
    #[error("Cannot choose random element from empty sequence")]
    EmptySequence,

    #[error("Sample size {requested} exceeds population size {population}")]
    SampleSize { requested: usize, population: usize },

    #[error("Items and weights must have the same length: {items} items, {weights} weights")]
    LengthMismatch { items: usize, weights: usize },

    #[error("Weight at index {index} must be a non-negative finite number, got {weight}")]
    NegativeWeight { index: usize, weight: f64 },

    #[error("At least one weight must be greater than zero")]
    AllZeroWeights,

    #[error("Invalid parameter {name}: {value}")]
    InvalidParameter { name: &'static str, value: f64 },

    #[error("Invalid state: {0}")]
    InvalidState(String),

    #[error("Invalid config: {0}")]
    InvalidConfig(String),
}
