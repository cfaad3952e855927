//! Generator construction configuration
//!
//! A missing seed means "seed from entropy", matching `Srand::from_entropy`.
//!
//! # Example
//!
//! ```
//! use mwc_srand_core_rs::{Srand, SrandConfig};
//!
//! let config = SrandConfig::from_json(r#"{ "seed": 2024 }"#).unwrap();
//! let rng = Srand::from_config(config).unwrap();
//! assert_eq!(rng.seed(), 2024.0);
//! assert!(rng.events().is_none());
//! ```

use crate::error::SrandError;
use crate::rng::Srand;
use serde::{Deserialize, Serialize};

/// Configuration for a single generator.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SrandConfig {
    /// Explicit seed; `None` draws one from the entropy source
    pub seed: Option<f64>,

    /// Keep an `EventLog` of reseeds and restores
    pub record_events: bool,
}

impl SrandConfig {
    /// Config with an explicit seed and no event recording
    pub fn with_seed(seed: impl Into<f64>) -> Self {
        Self {
            seed: Some(seed.into()),
            record_events: false,
        }
    }

    /// Parse a config from JSON
    pub fn from_json(json: &str) -> Result<Self, SrandError> {
        serde_json::from_str(json)
            .map_err(|e| SrandError::InvalidConfig(format!("Config parsing failed: {}", e)))
    }
}

impl Srand {
    /// Create a generator from configuration
    ///
    /// Event recording is switched on before seeding, so the initial seed is
    /// the first logged event.
    ///
    /// # Errors
    /// `SrandError::InvalidParameter` if the configured seed is not finite.
    pub fn from_config(config: SrandConfig) -> Result<Self, SrandError> {
        let mut rng = Srand::blank();
        if config.record_events {
            rng.enable_events();
        }

        match config.seed {
            Some(seed) => {
                rng.set_seed(seed)?;
            }
            None => {
                rng.randomize();
            }
        }

        Ok(rng)
    }
}
