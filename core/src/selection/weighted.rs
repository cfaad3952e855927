//! Weighted selection
//!
//! Weights need not be normalized: `[1, 2, 3]` behaves like
//! `[1/6, 2/6, 3/6]`.

use crate::error::SrandError;
use crate::rng::Srand;

impl Srand {
    /// Random element of `seq`, chosen with probability proportional to its
    /// weight
    ///
    /// Draws `r = random() * total_weight` and returns the first item whose
    /// cumulative weight exceeds `r`, falling back to the last item when
    /// rounding leaves `r` at the very top of the range.
    ///
    /// # Errors
    /// Checked in this order:
    /// - `EmptySequence` if `seq` is empty
    /// - `LengthMismatch` if `weights.len() != seq.len()`
    /// - `NegativeWeight` for a negative, NaN or infinite weight
    /// - `AllZeroWeights` if the weights sum to zero
    ///
    /// # Example
    /// ```
    /// use mwc_srand_core_rs::Srand;
    ///
    /// let mut rng = Srand::new(12345).unwrap();
    /// let pick = rng.weighted_choice(&["never", "always"], &[0.0, 3.0]).unwrap();
    /// assert_eq!(*pick, "always");
    /// ```
    pub fn weighted_choice<'a, T>(
        &mut self,
        seq: &'a [T],
        weights: &[f64],
    ) -> Result<&'a T, SrandError> {
        if seq.is_empty() {
            return Err(SrandError::EmptySequence);
        }

        if seq.len() != weights.len() {
            return Err(SrandError::LengthMismatch {
                items: seq.len(),
                weights: weights.len(),
            });
        }

        let mut total_weight = 0.0;
        for (index, &weight) in weights.iter().enumerate() {
            if weight < 0.0 || !weight.is_finite() {
                return Err(SrandError::NegativeWeight { index, weight });
            }
            total_weight += weight;
        }

        if total_weight == 0.0 {
            return Err(SrandError::AllZeroWeights);
        }

        let target = self.random() * total_weight;

        let mut cumulative = 0.0;
        for (item, weight) in seq.iter().zip(weights) {
            cumulative += weight;
            if target < cumulative {
                return Ok(item);
            }
        }

        // Floating-point rounding can leave target == total; seq is non-empty
        Ok(&seq[seq.len() - 1])
    }
}
