//! Snapshot - Save/Load Generator State
//!
//! # Critical Invariants
//!
//! - **Determinism**: Restored generator continues the captured sequence
//! - **Atomicity**: All three fields are replaced together or not at all
//! - **Liveness**: Neither accumulator may sit on an MWC fixed point
//!
//! # Format
//!
//! A JSON object with exactly three numeric fields. There is no version
//! field; changing the shape is a breaking change.
//!
//! ```json
//! { "seed": 12345, "mz": 123456789, "mw": 12345 }
//! ```

use crate::error::SrandError;
use crate::models::event::GeneratorEvent;
use crate::rng::{is_degenerate_mw, is_degenerate_mz, Srand};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

const FIELDS: [&str; 3] = ["seed", "mz", "mw"];

/// Complete generator state snapshot
///
/// Deserialization accepts only a mapping and runs `validate`, so every
/// serde consumer gets the same checks as `from_json`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Map<String, Value>")]
pub struct GeneratorState {
    /// Seed as originally supplied, for introspection only
    pub seed: f64,

    /// First MWC accumulator
    pub mz: u32,

    /// Second MWC accumulator
    pub mw: u32,
}

impl GeneratorState {
    /// Validate snapshot integrity
    ///
    /// Checks:
    /// - seed is a finite number
    /// - `mz` and `mw` do not lead into a fixed point of their recurrence
    pub fn validate(&self) -> Result<(), SrandError> {
        if !self.seed.is_finite() {
            return Err(SrandError::InvalidState(format!(
                "seed must be finite, got {}",
                self.seed
            )));
        }

        if is_degenerate_mz(self.mz) {
            return Err(SrandError::InvalidState(format!(
                "mz {:#010x} is a degenerate MWC word",
                self.mz
            )));
        }

        if is_degenerate_mw(self.mw) {
            return Err(SrandError::InvalidState(format!(
                "mw {:#010x} is a degenerate MWC word",
                self.mw
            )));
        }

        Ok(())
    }

    /// Parse and validate a snapshot from JSON
    ///
    /// # Errors
    /// `SrandError::InvalidState` if the input is not an object with exactly
    /// the numeric fields `seed`, `mz` and `mw`, or if it fails `validate`.
    ///
    /// # Example
    /// ```
    /// use mwc_srand_core_rs::GeneratorState;
    ///
    /// let state = GeneratorState::from_json(r#"{"seed": 1, "mz": 123456789, "mw": 1}"#).unwrap();
    /// assert_eq!(state.mw, 1);
    ///
    /// assert!(GeneratorState::from_json(r#"{"seed": 42}"#).is_err());
    /// assert!(GeneratorState::from_json(r#"{"seed": 1, "mw": "2", "mz": 3}"#).is_err());
    /// ```
    pub fn from_json(json: &str) -> Result<Self, SrandError> {
        let value: Value = serde_json::from_str(json)
            .map_err(|e| SrandError::InvalidState(format!("State parsing failed: {}", e)))?;
        Self::try_from(value)
    }

    /// Serialize snapshot to JSON
    pub fn to_json(&self) -> Result<String, SrandError> {
        serde_json::to_string(self)
            .map_err(|e| SrandError::InvalidState(format!("State serialization failed: {}", e)))
    }
}

impl TryFrom<Value> for GeneratorState {
    type Error = SrandError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        match value {
            Value::Object(map) => Self::try_from(map),
            other => Err(SrandError::InvalidState(format!(
                "expected an object, got {}",
                other
            ))),
        }
    }
}

impl TryFrom<Map<String, Value>> for GeneratorState {
    type Error = SrandError;

    fn try_from(map: Map<String, Value>) -> Result<Self, Self::Error> {
        if let Some(unknown) = map.keys().find(|key| !FIELDS.contains(&key.as_str())) {
            return Err(SrandError::InvalidState(format!(
                "unknown field `{}`",
                unknown
            )));
        }

        let seed = field(&map, "seed")?
            .as_f64()
            .ok_or_else(|| SrandError::InvalidState("seed must be a number".to_string()))?;

        let state = GeneratorState {
            seed,
            mz: word(&map, "mz")?,
            mw: word(&map, "mw")?,
        };
        state.validate()?;
        Ok(state)
    }
}

fn field<'a>(map: &'a Map<String, Value>, name: &str) -> Result<&'a Value, SrandError> {
    map.get(name)
        .ok_or_else(|| SrandError::InvalidState(format!("missing field `{}`", name)))
}

fn word(map: &Map<String, Value>, name: &str) -> Result<u32, SrandError> {
    field(map, name)?
        .as_u64()
        .and_then(|w| u32::try_from(w).ok())
        .ok_or_else(|| {
            SrandError::InvalidState(format!("{} must be an unsigned 32-bit integer", name))
        })
}

impl From<&Srand> for GeneratorState {
    fn from(rng: &Srand) -> Self {
        rng.get_state()
    }
}

impl Srand {
    /// Get current state (for checkpointing/replay)
    ///
    /// # Example
    /// ```
    /// use mwc_srand_core_rs::Srand;
    ///
    /// let mut rng = Srand::new(12345).unwrap();
    /// let state = rng.get_state();
    /// let first = rng.random();
    ///
    /// rng.set_state(state).unwrap();
    /// assert_eq!(rng.random(), first);
    /// ```
    pub fn get_state(&self) -> GeneratorState {
        GeneratorState {
            seed: self.seed,
            mz: self.mz,
            mw: self.mw,
        }
    }

    /// Restore a previously captured state
    ///
    /// The state is validated first; on error the generator is untouched.
    pub fn set_state(&mut self, state: GeneratorState) -> Result<(), SrandError> {
        state.validate()?;

        self.seed = state.seed;
        self.mz = state.mz;
        self.mw = state.mw;

        if let Some(log) = self.events.as_mut() {
            log.log(GeneratorEvent::StateRestored {
                seed: state.seed,
                mz: state.mz,
                mw: state.mw,
            });
        }

        Ok(())
    }

    /// Create a generator resuming from a snapshot
    pub fn from_state(state: GeneratorState) -> Result<Self, SrandError> {
        let mut rng = Srand::blank();
        rng.set_state(state)?;
        Ok(rng)
    }
}
