//! Canonical population seeding policy.
//!
//! Bias is drawn from a normal distribution centred slightly above zero so
//! that a small majority of oscillators lean toward harmony; entropy is drawn
//! uniformly from a bounded range.

use serde::{Deserialize, Serialize};

/// Population seeding settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SeedingConfig {
    /// Number of oscillators to create.
    pub count: usize,

    /// Mean of the bias distribution.
    pub bias_mean: f64,

    /// Standard deviation of the bias distribution. Must be `>= 0`.
    pub bias_std: f64,

    /// Lower bound (inclusive) of the entropy distribution.
    pub entropy_min: f64,

    /// Upper bound (exclusive) of the entropy distribution.
    pub entropy_max: f64,

    /// RNG seed for phase initialization and per-step noise.
    pub seed: u64,
}

impl Default for SeedingConfig {
    fn default() -> Self {
        Self {
            count: 100,
            bias_mean: 0.00006,
            bias_std: 0.00003,
            entropy_min: 0.12,
            entropy_max: 0.58,
            seed: 42,
        }
    }
}

impl SeedingConfig {
    /// Validate the seeding configuration.
    pub fn validate(&self) -> Result<(), String> {
        if !self.bias_mean.is_finite() {
            return Err(format!("bias_mean must be finite, got {}", self.bias_mean));
        }
        if !self.bias_std.is_finite() || self.bias_std < 0.0 {
            return Err(format!(
                "bias_std must be finite and >= 0, got {}",
                self.bias_std
            ));
        }
        if !self.entropy_min.is_finite() || self.entropy_min < 0.0 {
            return Err(format!(
                "entropy_min must be finite and >= 0, got {}",
                self.entropy_min
            ));
        }
        if !self.entropy_max.is_finite() || self.entropy_max <= self.entropy_min {
            return Err(format!(
                "entropy_max ({}) must be finite and > entropy_min ({})",
                self.entropy_max, self.entropy_min
            ));
        }
        Ok(())
    }
}
