//! Multiply-with-carry random number generator
//!
//! Two 16×16→32-bit MWC recurrences (George Marsaglia) combined into one
//! 32-bit output word, mapped onto `[0.0, 1.0)`.
//!
//! # Algorithm
//!
//! ```text
//! mz = (mz & 0xFFFF) * 36969 + (mz >> 16)
//! mw = (mw & 0xFFFF) * 18000 + (mw >> 16)
//! u  = (mz << 16) + mw                      (all mod 2^32)
//! x  = ((u + 2^31) mod 2^32) / 2^32         == (0.5 + u / 2^32) mod 1.0
//! ```
//!
//! Seeding sets `mz = 123456789`, `mw = seed mod 2^32`, then advances both
//! words once and discards the output.
//!
//! # Determinism
//!
//! Same seed → same sequence of draws. All higher-level operations consume
//! draws from `random()` in a fixed order, so their outputs are reproducible
//! too.
//!
//! # Security
//!
//! This generator is NOT cryptographically secure. The full state is two
//! 32-bit words and can be recovered from a handful of outputs.

use crate::error::SrandError;
use crate::models::event::{EventLog, GeneratorEvent, SeedSource};
use crate::rng::entropy_seed;

/// Value `mz` is reset to whenever the seed is set.
pub(crate) const MZ_INITIAL: u32 = 123_456_789;

const MZ_MULTIPLIER: u32 = 36_969;
const MW_MULTIPLIER: u32 = 18_000;

/// Offset of one half, expressed in units of 2^-32.
const HALF_OFFSET: u32 = 1 << 31;
const TWO_POW_32: f64 = 4_294_967_296.0;

/// Seeded multiply-with-carry generator
///
/// # Example
/// ```
/// use mwc_srand_core_rs::Srand;
///
/// let mut rng = Srand::new(12345).unwrap();
/// let value = rng.random();
/// assert!((0.0..1.0).contains(&value));
/// let die = rng.int_in_range(1, 6);
/// assert!((1..=6).contains(&die));
/// ```
#[derive(Debug, Clone)]
pub struct Srand {
    /// Seed as supplied (or drawn by `randomize`), kept verbatim
    pub(crate) seed: f64,

    /// First MWC accumulator
    pub(crate) mz: u32,

    /// Second MWC accumulator
    pub(crate) mw: u32,

    /// Opt-in record of reseeds and restores
    pub(crate) events: Option<EventLog>,
}

impl Srand {
    /// Create a new generator with the given seed
    ///
    /// # Errors
    /// `SrandError::InvalidParameter` if the seed is NaN or infinite.
    ///
    /// # Example
    /// ```
    /// use mwc_srand_core_rs::Srand;
    ///
    /// let rng = Srand::new(42).unwrap();
    /// assert_eq!(rng.seed(), 42.0);
    /// ```
    pub fn new(seed: impl Into<f64>) -> Result<Self, SrandError> {
        let mut rng = Self::blank();
        rng.set_seed(seed)?;
        Ok(rng)
    }

    /// Create a generator seeded from a non-deterministic source
    ///
    /// # Example
    /// ```
    /// use mwc_srand_core_rs::Srand;
    ///
    /// let rng = Srand::from_entropy();
    /// assert!(rng.seed() >= 1.0);
    /// ```
    pub fn from_entropy() -> Self {
        let mut rng = Self::blank();
        rng.randomize();
        rng
    }

    /// Unseeded shell; callers must seed before the value escapes.
    pub(crate) fn blank() -> Self {
        Self {
            seed: 0.0,
            mz: MZ_INITIAL,
            mw: 1,
            events: None,
        }
    }

    /// Get the current seed without touching the state
    pub fn seed(&self) -> f64 {
        self.seed
    }

    /// Set the seed and reset both accumulators
    ///
    /// `mw` becomes the seed reduced to a 32-bit word (truncated toward zero,
    /// modulo 2^32) and `mz` is reset to a fixed constant, after which both
    /// accumulators take one settling step whose output is discarded. Integer
    /// seeds in `[1, 2^32)` are portable; fractional seeds are accepted but
    /// only their integer part reaches the state.
    ///
    /// Because of the settling step, `get_state()` straight after seeding
    /// reports the advanced words, not `mz = 123456789` and the raw seed
    /// word. Without it the first draw would be a linear function of the
    /// seed, so consecutive seeds would give correlated first values.
    ///
    /// # Errors
    /// `SrandError::InvalidParameter` if the seed is NaN or infinite.
    ///
    /// # Example
    /// ```
    /// use mwc_srand_core_rs::Srand;
    ///
    /// let mut rng = Srand::new(1).unwrap();
    /// let first = rng.random();
    /// rng.set_seed(1).unwrap();
    /// assert_eq!(rng.random(), first);
    /// ```
    pub fn set_seed(&mut self, seed: impl Into<f64>) -> Result<f64, SrandError> {
        let seed = seed.into();
        if !seed.is_finite() {
            return Err(SrandError::InvalidParameter { name: "seed", value: seed });
        }
        self.apply_seed(seed, SeedSource::Explicit);
        Ok(seed)
    }

    /// Pick a fresh seed in `[1, 2^32)` from the entropy source, apply it
    /// and return it
    pub fn randomize(&mut self) -> f64 {
        let seed = f64::from(entropy_seed());
        self.apply_seed(seed, SeedSource::Entropy);
        seed
    }

    fn apply_seed(&mut self, seed: f64, source: SeedSource) {
        let word = seed_to_word(seed);
        self.seed = seed;
        self.mz = MZ_INITIAL;
        // A degenerate mw would pin its half of the stream to a constant
        self.mw = if is_degenerate_mw(word) { 1 } else { word };
        // Settle once: the first raw output is linear in the seed word
        self.next_u32();

        if let Some(log) = self.events.as_mut() {
            log.log(GeneratorEvent::Seeded { seed, source });
        }
    }

    /// Advance both accumulators and return the combined 32-bit word
    ///
    /// This is the raw output behind `random()`; both advance the state
    /// identically.
    pub fn next_u32(&mut self) -> u32 {
        self.mz = mwc_step(self.mz, MZ_MULTIPLIER);
        self.mw = mwc_step(self.mw, MW_MULTIPLIER);
        (self.mz << 16).wrapping_add(self.mw)
    }

    /// Generate random f64 in range [0.0, 1.0)
    ///
    /// The combined word is offset by one half and wrapped, so the result
    /// equals `(0.5 + u / 2^32) mod 1.0` and never reaches 1.0.
    ///
    /// # Example
    /// ```
    /// use mwc_srand_core_rs::Srand;
    ///
    /// let mut rng = Srand::new(12345).unwrap();
    /// let probability = rng.random();
    /// assert!(probability >= 0.0 && probability < 1.0);
    /// ```
    pub fn random(&mut self) -> f64 {
        let word = self.next_u32();
        f64::from(word.wrapping_add(HALF_OFFSET)) / TWO_POW_32
    }

    /// Events recorded so far, if recording is enabled
    pub fn events(&self) -> Option<&EventLog> {
        self.events.as_ref()
    }

    /// Start recording reseeds and restores (keeps an existing log)
    pub fn enable_events(&mut self) {
        if self.events.is_none() {
            self.events = Some(EventLog::new());
        }
    }

    /// Stop recording and hand back whatever was recorded
    pub fn take_events(&mut self) -> Option<EventLog> {
        self.events.take()
    }
}

impl Default for Srand {
    fn default() -> Self {
        Self::from_entropy()
    }
}

/// One step of a 16-bit multiply-with-carry recurrence
fn mwc_step(word: u32, multiplier: u32) -> u32 {
    (word & 0xFFFF)
        .wrapping_mul(multiplier)
        .wrapping_add(word >> 16)
}

/// A word is degenerate when its next step lands on a fixed point
/// (0 or `multiplier * 2^16 - 1`), after which the recurrence never moves.
fn is_degenerate(word: u32, multiplier: u32) -> bool {
    let next = mwc_step(word, multiplier);
    next == 0 || next == (multiplier << 16).wrapping_sub(1)
}

pub(crate) fn is_degenerate_mz(word: u32) -> bool {
    is_degenerate(word, MZ_MULTIPLIER)
}

pub(crate) fn is_degenerate_mw(word: u32) -> bool {
    is_degenerate(word, MW_MULTIPLIER)
}

/// Reduce a finite seed to a 32-bit word: truncate, then wrap modulo 2^32.
fn seed_to_word(seed: f64) -> u32 {
    if !seed.is_finite() {
        return 0;
    }
    seed.trunc().rem_euclid(TWO_POW_32) as u32
}
