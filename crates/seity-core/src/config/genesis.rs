//! Pattern generation ("genesis") settings.

use serde::{Deserialize, Serialize};

/// Number of samples in a generated geometry.
pub const DEFAULT_SAMPLE_COUNT: usize = 500;

/// Which basis terms make up a generated waveform.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum GenesisVariant {
    /// Primary sinusoid plus per-oscillator phase contributions.
    #[default]
    Minimal,
    /// Adds the reaction-diffusion pair, golden-ratio signature terms, the
    /// quasicrystal term, geometric-phase modulation and the symmetry break.
    Rich,
}

/// Pattern generation settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GenesisConfig {
    /// Number of evenly spaced samples over `[0, 2π)`.
    pub sample_count: usize,

    /// Baseline parameter `a` before the first generation event.
    pub initial_baseline: f64,

    /// `k1`: baseline increment per event is `k1 * coherence`.
    pub baseline_gain: f64,

    /// Primary frequency is `1 + baseline * frequency_gain`.
    pub frequency_gain: f64,

    /// Per-oscillator amplification is `1 + bias * bias_gain`.
    pub bias_gain: f64,

    /// `k2`: the waveform is divided by `1 + population_size * k2`.
    pub normalization: f64,

    /// Term set.
    pub variant: GenesisVariant,
}

impl Default for GenesisConfig {
    fn default() -> Self {
        Self {
            sample_count: DEFAULT_SAMPLE_COUNT,
            initial_baseline: 0.1,
            baseline_gain: 0.05,
            frequency_gain: 1.5,
            bias_gain: 10.0,
            normalization: 0.06,
            variant: GenesisVariant::Minimal,
        }
    }
}

impl GenesisConfig {
    /// Validate the genesis configuration.
    pub fn validate(&self) -> Result<(), String> {
        if self.sample_count == 0 {
            return Err("sample_count must be > 0".to_string());
        }
        let gains = [
            ("initial_baseline", self.initial_baseline),
            ("baseline_gain", self.baseline_gain),
            ("frequency_gain", self.frequency_gain),
            ("bias_gain", self.bias_gain),
            ("normalization", self.normalization),
        ];
        for (name, value) in gains {
            if !value.is_finite() || value < 0.0 {
                return Err(format!("{} must be finite and >= 0, got {}", name, value));
            }
        }
        Ok(())
    }
}
