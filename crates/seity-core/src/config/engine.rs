//! Synchronization engine settings.
//!
//! Controls the Kuramoto-style coupling, the coherence metric, and when the
//! engine fires a generation event on its own.

use serde::{Deserialize, Serialize};

/// Tuned coupling strength; reliably reaches the birth threshold in bounded steps.
pub const DEFAULT_COUPLING_STRENGTH: f64 = 0.18;

/// Weak-coupling baseline.
pub const WEAK_COUPLING_STRENGTH: f64 = 0.02;

/// Coherence at or above which a generation event may fire.
pub const DEFAULT_BIRTH_THRESHOLD: f64 = 0.98;

/// When the engine fires generation events from inside `step()`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum BirthPolicy {
    /// Fire on the first threshold crossing only. The symmetry-broken flag
    /// permanently gates further automatic births.
    #[default]
    Once,
    /// Fire every time coherence crosses the threshold from below.
    Rearm,
    /// Never fire automatically; the caller invokes `trigger()`.
    Manual,
}

/// How the phase spread behind the coherence metric is measured.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum SpreadMetric {
    /// Population standard deviation of each phase's deviation from the
    /// circular mean, wrapped into `[-π, π)`. Identical to `RawPhase` unless
    /// the cluster straddles the 0/2π seam.
    #[default]
    MeanCentered,
    /// Population standard deviation of the raw phase values.
    RawPhase,
}

/// Synchronization engine settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Coupling strength K applied to `sin(mean - phase)`.
    /// Must be finite and `>= 0`.
    pub coupling_strength: f64,

    /// Birth threshold on coherence.
    /// Range: `(0.0, 1.0]`
    pub birth_threshold: f64,

    /// Automatic firing policy.
    pub birth_policy: BirthPolicy,

    /// Spread measure used for coherence.
    pub spread_metric: SpreadMetric,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            coupling_strength: DEFAULT_COUPLING_STRENGTH,
            birth_threshold: DEFAULT_BIRTH_THRESHOLD,
            birth_policy: BirthPolicy::Once,
            spread_metric: SpreadMetric::MeanCentered,
        }
    }
}

impl EngineConfig {
    /// Weak-coupling baseline (K = 0.02).
    pub fn weak_coupling() -> Self {
        Self {
            coupling_strength: WEAK_COUPLING_STRENGTH,
            ..Default::default()
        }
    }

    /// Validate the engine configuration.
    pub fn validate(&self) -> Result<(), String> {
        if !self.coupling_strength.is_finite() || self.coupling_strength < 0.0 {
            return Err(format!(
                "coupling_strength must be finite and >= 0, got {}",
                self.coupling_strength
            ));
        }
        if !(self.birth_threshold > 0.0 && self.birth_threshold <= 1.0) {
            return Err(format!(
                "birth_threshold must be in (0, 1], got {}",
                self.birth_threshold
            ));
        }
        Ok(())
    }
}
