//! Seity configuration types.
//!
//! Every subsystem has its own section with `Default` values matching the
//! canonical simulation and a `validate()` method. [`SeityConfig`] aggregates
//! them and is what the engine and the CLI are built from.

mod berry;
mod engine;
mod genesis;
mod seeding;

#[cfg(test)]
mod tests;

pub use self::berry::BerryConfig;
pub use self::engine::{
    BirthPolicy, EngineConfig, SpreadMetric, DEFAULT_BIRTH_THRESHOLD, DEFAULT_COUPLING_STRENGTH,
    WEAK_COUPLING_STRENGTH,
};
pub use self::genesis::{GenesisConfig, GenesisVariant, DEFAULT_SAMPLE_COUNT};
pub use self::seeding::SeedingConfig;

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{SeityError, SeityResult};

/// Main configuration containing all subsystem settings.
///
/// # Example
///
/// ```
/// use seity_core::config::SeityConfig;
///
/// let config = SeityConfig::default();
/// assert!(config.validate().is_ok());
/// assert!((config.engine.coupling_strength - 0.18).abs() < 1e-12);
/// assert!(!config.berry.enabled);
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct SeityConfig {
    /// Coupling, threshold and birth policy.
    pub engine: EngineConfig,

    /// Pattern generation constants.
    pub genesis: GenesisConfig,

    /// Berry-phase extension.
    pub berry: BerryConfig,

    /// Canonical population seeding.
    pub seeding: SeedingConfig,
}

impl SeityConfig {
    /// Create a configuration with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Weak-coupling baseline (K = 0.02). Rarely reaches the birth threshold.
    pub fn weak_coupling_preset() -> Self {
        Self {
            engine: EngineConfig::weak_coupling(),
            ..Default::default()
        }
    }

    /// Berry extension plus the rich genesis term set.
    pub fn morphogenesis_preset() -> Self {
        Self {
            genesis: GenesisConfig {
                variant: GenesisVariant::Rich,
                ..Default::default()
            },
            berry: BerryConfig::enabled(),
            ..Default::default()
        }
    }

    /// Validate the configuration, returning an error if invalid.
    pub fn validate(&self) -> Result<(), String> {
        self.engine.validate()?;
        self.genesis.validate()?;
        self.berry.validate()?;
        self.seeding.validate()?;
        Ok(())
    }

    /// Parse and validate a configuration from JSON.
    ///
    /// Missing sections and fields fall back to their defaults.
    pub fn from_json_str(json: &str) -> SeityResult<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate().map_err(SeityError::ConfigError)?;
        Ok(config)
    }

    /// Read, parse and validate a JSON configuration file.
    pub fn from_json_file(path: impl AsRef<Path>) -> SeityResult<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)
            .map_err(|e| SeityError::IoError(format!("{}: {}", path.display(), e)))?;
        Self::from_json_str(&json)
    }

    /// Serialize as pretty-printed JSON.
    pub fn to_json_pretty(&self) -> SeityResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
