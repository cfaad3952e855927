//! Deterministic random number generation
//!
//! Uses Marsaglia's multiply-with-carry (MWC) algorithm over two 32-bit words.
//! CRITICAL: Every sampling and distribution helper derives from `Srand::random`.

mod entropy;
mod mwc;

pub use mwc::Srand;

pub(crate) use entropy::entropy_seed;
pub(crate) use mwc::{is_degenerate_mw, is_degenerate_mz};
