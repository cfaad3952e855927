//! Ranged draws and selection from sequences.
//!
//! Every operation here is a deterministic function of the draws it takes
//! from `Srand::random`, in the order documented on each method.
//!
//! # Example
//!
//! ```
//! use mwc_srand_core_rs::Srand;
//!
//! let mut rng = Srand::new(42).unwrap();
//! let banks = ["BANK_A", "BANK_B", "BANK_C"];
//!
//! let pick = rng.choice(&banks).unwrap();
//! assert!(banks.contains(pick));
//!
//! let pair = rng.sample(&banks, 2).unwrap();
//! assert_ne!(pair[0], pair[1]);
//! ```

mod weighted;

use crate::error::SrandError;
use crate::rng::Srand;
use std::collections::HashSet;

impl Srand {
    /// Random float in `[a, b)`
    ///
    /// Returns exactly `a` when `a == b`. Consumes one draw either way.
    ///
    /// When `b - a` overflows `f64` (bounds near `±f64::MAX`) the result is
    /// interpolated as `a * (1 - x) + b * x` instead, which stays finite and
    /// inside `[a, b]` but may land on `b` through rounding.
    pub fn in_range(&mut self, a: f64, b: f64) -> f64 {
        let x = self.random();
        if a == b {
            return a;
        }
        let width = b - a;
        if width.is_finite() {
            a + x * width
        } else {
            a * (1.0 - x) + b * x
        }
    }

    /// Random integer in `[min, max]`, both bounds inclusive
    ///
    /// Consumes one draw. The span is computed in 128-bit arithmetic so
    /// extreme bounds cannot overflow, and the result is clamped to the `i64`
    /// range so float rounding near `2^64` cannot wrap it.
    ///
    /// Reversed bounds (`min > max`) are not rejected: the same formula
    /// applies and yields a value in `[max + 1, min]`.
    ///
    /// # Example
    /// ```
    /// use mwc_srand_core_rs::Srand;
    ///
    /// let mut rng = Srand::new(12345).unwrap();
    /// let amount = rng.int_in_range(10_000, 100_000);
    /// assert!((10_000..=100_000).contains(&amount));
    /// ```
    pub fn int_in_range(&mut self, min: i64, max: i64) -> i64 {
        let span = (i128::from(max) - i128::from(min) + 1) as f64;
        let offset = (self.random() * span).floor() as i128;
        (i128::from(min) + offset).clamp(i128::from(i64::MIN), i128::from(i64::MAX)) as i64
    }

    /// Random element of `seq`
    ///
    /// # Errors
    /// `SrandError::EmptySequence` if `seq` is empty.
    pub fn choice<'a, T>(&mut self, seq: &'a [T]) -> Result<&'a T, SrandError> {
        if seq.is_empty() {
            return Err(SrandError::EmptySequence);
        }

        let idx = self.index_in(seq.len());
        Ok(&seq[idx])
    }

    /// `k` elements drawn independently from `seq` (with replacement)
    ///
    /// `k == 0` yields an empty vector even when `seq` is empty.
    ///
    /// # Errors
    /// `SrandError::EmptySequence` if `seq` is empty and `k > 0`.
    pub fn choices<T: Clone>(&mut self, seq: &[T], k: usize) -> Result<Vec<T>, SrandError> {
        let mut picked = Vec::with_capacity(k);
        for _ in 0..k {
            picked.push(self.choice(seq)?.clone());
        }
        Ok(picked)
    }

    /// `k` distinct positions of `seq` (without replacement), in draw order
    ///
    /// When `k == seq.len()` this is a shuffled copy of `seq`. Otherwise
    /// indices are drawn uniformly and repeats are rejected until `k`
    /// distinct ones are collected.
    ///
    /// # Errors
    /// `SrandError::SampleSize` if `k > seq.len()`.
    pub fn sample<T: Clone>(&mut self, seq: &[T], k: usize) -> Result<Vec<T>, SrandError> {
        if k > seq.len() {
            return Err(SrandError::SampleSize {
                requested: k,
                population: seq.len(),
            });
        }

        if k == seq.len() {
            let mut copy = seq.to_vec();
            self.shuffle(&mut copy);
            return Ok(copy);
        }

        let mut selected = HashSet::with_capacity(k);
        let mut picked = Vec::with_capacity(k);
        while picked.len() < k {
            let idx = self.index_in(seq.len());
            if selected.insert(idx) {
                picked.push(seq[idx].clone());
            }
        }

        Ok(picked)
    }

    /// Shuffle `seq` in place and return it
    ///
    /// Walks `i` from the last index down to 1, swapping position `i` with
    /// `int_in_range(0, i - 1)`. Consumes `len - 1` draws; empty and
    /// single-element slices are left untouched.
    ///
    /// # Example
    /// ```
    /// use mwc_srand_core_rs::Srand;
    ///
    /// let mut rng = Srand::new(7).unwrap();
    /// let mut deck: Vec<u32> = (0..52).collect();
    /// rng.shuffle(&mut deck);
    ///
    /// let mut sorted = deck.clone();
    /// sorted.sort();
    /// assert_eq!(sorted, (0..52).collect::<Vec<_>>());
    /// ```
    pub fn shuffle<'a, T>(&mut self, seq: &'a mut [T]) -> &'a mut [T] {
        for i in (1..seq.len()).rev() {
            let j = self.index_in(i);
            seq.swap(i, j);
        }
        seq
    }

    /// Index in `[0, len)` via `int_in_range(0, len - 1)`; `len` must be > 0.
    pub(crate) fn index_in(&mut self, len: usize) -> usize {
        self.int_in_range(0, len as i64 - 1) as usize
    }
}
