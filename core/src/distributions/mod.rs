//! Statistical distributions built from uniform draws.
//!
//! - **Gaussian**: Box–Muller, two draws per sample
//! - **Exponential**: inversion, one draw per sample
//! - **Poisson**: Knuth's multiplication method, variable draw count
//!
//! # Example
//!
//! ```
//! use mwc_srand_core_rs::Srand;
//!
//! let mut rng = Srand::new(42).unwrap();
//! let height = rng.gaussian(170.0, 10.0);
//! let wait = rng.exponential(0.5).unwrap();
//! let arrivals = rng.poisson(3.0).unwrap();
//! assert!(height.is_finite() && wait >= 0.0);
//! assert!(arrivals < 100);
//! ```

use crate::error::SrandError;
use crate::rng::Srand;

impl Srand {
    /// Sample from a normal distribution with the given mean and standard
    /// deviation
    ///
    /// Draws `u1` then `u2` and returns the cosine branch of the Box–Muller
    /// transform. The sine branch is discarded rather than cached, so every
    /// call costs exactly two draws and stays independent of call history.
    pub fn gaussian(&mut self, mean: f64, stddev: f64) -> f64 {
        let u1 = self.random();
        let u2 = self.random();
        let z0 = (-2.0 * u1.ln()).sqrt() * (2.0 * std::f64::consts::PI * u2).cos();
        z0 * stddev + mean
    }

    /// Sample from the standard normal distribution (mean 0, stddev 1)
    pub fn standard_gaussian(&mut self) -> f64 {
        self.gaussian(0.0, 1.0)
    }

    /// Sample from an exponential distribution with rate `lambda`
    ///
    /// Mean is `1 / lambda`. One draw per call; never negative.
    ///
    /// # Errors
    /// `SrandError::InvalidParameter` unless `lambda` is positive and finite.
    pub fn exponential(&mut self, lambda: f64) -> Result<f64, SrandError> {
        check_rate(lambda)?;
        Ok(-(1.0 - self.random()).ln() / lambda)
    }

    /// Sample from a Poisson distribution with mean `lambda`
    ///
    /// Multiplies fresh draws into a running product until it falls to
    /// `exp(-lambda)` or below, then returns the number of draws minus one.
    /// Expected draw count is `lambda + 1`; there is no iteration cap. Above
    /// a `lambda` of roughly 745 the threshold underflows to zero and the loop
    /// only ends once the product itself underflows, so results there are
    /// capped near that value.
    ///
    /// # Errors
    /// `SrandError::InvalidParameter` unless `lambda` is positive and finite.
    pub fn poisson(&mut self, lambda: f64) -> Result<u64, SrandError> {
        check_rate(lambda)?;

        let threshold = (-lambda).exp();
        let mut k: u64 = 0;
        let mut p = 1.0;
        loop {
            k += 1;
            p *= self.random();
            if p <= threshold {
                break;
            }
        }

        Ok(k - 1)
    }
}

fn check_rate(lambda: f64) -> Result<(), SrandError> {
    if lambda <= 0.0 || !lambda.is_finite() {
        return Err(SrandError::InvalidParameter {
            name: "lambda",
            value: lambda,
        });
    }
    Ok(())
}
