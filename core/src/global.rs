//! Process-wide default generator
//!
//! Convenience for callers that do not want to own a `Srand`. The default
//! instance is seeded from entropy on first use and guarded by a mutex, so
//! each closure passed to `with_default` runs with exclusive access.
//!
//! Code that needs reproducibility should own its own `Srand`; anything
//! else in the process may reseed or draw from the default instance.
//!
//! # Example
//!
//! ```
//! use mwc_srand_core_rs::global;
//!
//! global::set_seed(99).unwrap();
//! let (a, b) = global::with_default(|rng| (rng.random(), rng.int_in_range(1, 6)));
//! assert!((0.0..1.0).contains(&a));
//! assert!((1..=6).contains(&b));
//! ```

use crate::error::SrandError;
use crate::rng::Srand;
use std::sync::{LazyLock, Mutex, MutexGuard};

static DEFAULT: LazyLock<Mutex<Srand>> = LazyLock::new(|| Mutex::new(Srand::from_entropy()));

fn lock() -> MutexGuard<'static, Srand> {
    // State changes are plain field assignments; a poisoned guard is still consistent.
    DEFAULT.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

/// Run `f` with exclusive access to the default generator
pub fn with_default<R>(f: impl FnOnce(&mut Srand) -> R) -> R {
    let mut rng = lock();
    f(&mut *rng)
}

/// Draw from the default generator
pub fn random() -> f64 {
    lock().random()
}

/// Current seed of the default generator
pub fn seed() -> f64 {
    lock().seed()
}

/// Reseed the default generator
pub fn set_seed(seed: impl Into<f64>) -> Result<f64, SrandError> {
    lock().set_seed(seed)
}

/// Reseed the default generator from entropy
pub fn randomize() -> f64 {
    lock().randomize()
}
