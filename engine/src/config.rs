//! Seed configuration
//!
//! Describes how a generator should be seeded, so that callers can keep the
//! choice in their own JSON configuration files.
//!
//! # Example
//!
//! ```
//! use sfc_rand::{Rand, SeedConfig};
//!
//! let config = SeedConfig::from_json(r#"{"type": "Fixed", "seed": 42}"#).unwrap();
//! assert_eq!(Rand::from_config(&config), Rand::new(42));
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// How to seed a generator
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum SeedConfig {
    /// Single seed word: reproducible stream
    Fixed { seed: u64 },

    /// Three independent seed words: reproducible stream
    Triple { a: u64, b: u64, c: u64 },

    /// Fresh seed from system entropy: not reproducible
    #[default]
    Entropy,
}

/// Errors that can occur while loading a seed configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid seed config: {0}")]
    Parse(#[from] serde_json::Error),
}

impl SeedConfig {
    /// Parse a configuration from JSON
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Whether generators built from this config replay the same stream
    pub fn is_reproducible(&self) -> bool {
        !matches!(self, SeedConfig::Entropy)
    }
}
