//! Berry-phase / morphogenesis extension.
//!
//! Layered on the minimal engine. When enabled:
//!
//! ```text
//! θᵢ ← θᵢ + ε_c · sin(σᵢ - θᵢ)        (pull toward own signature)
//! σᵢ ← σᵢ + ε_d · sin(ψ - σᵢ)         (signature drifts toward mean phase ψ)
//! Φ  ← Φ  + δ · r                     (geometric phase accumulates with coherence r)
//! ```
//!
//! When disabled every method is a no-op, so the engine can call them
//! unconditionally.

use crate::circular::wrap_phase;
use crate::config::BerryConfig;
use crate::population::Oscillator;

/// Applies the extension terms according to a [`BerryConfig`].
#[derive(Debug, Clone, Default)]
pub struct BerryField {
    config: BerryConfig,
}

impl BerryField {
    /// Create from configuration.
    pub fn new(config: &BerryConfig) -> Self {
        Self {
            config: config.clone(),
        }
    }

    /// Whether the extension is active.
    #[inline]
    pub fn is_enabled(&self) -> bool {
        self.config.enabled
    }

    /// Configuration in use.
    pub fn config(&self) -> &BerryConfig {
        &self.config
    }

    /// Phase increment pulling an oscillator toward its own signature.
    ///
    /// Evaluated against the oscillator's phase before the step update.
    #[inline]
    pub fn signature_pull(&self, oscillator: &Oscillator) -> f64 {
        if !self.config.enabled {
            return 0.0;
        }
        self.config.signature_coupling * (oscillator.geometric_signature - oscillator.phase).sin()
    }

    /// Move the oscillator's signature toward the mean phase, wrapped into
    /// `[0, 2π)`.
    #[inline]
    pub fn drift_signature(&self, oscillator: &mut Oscillator, mean_phase: f64) {
        if !self.config.enabled {
            return;
        }
        let pull = self.config.signature_drift * (mean_phase - oscillator.geometric_signature).sin();
        oscillator.geometric_signature = wrap_phase(oscillator.geometric_signature + pull);
    }

    /// Geometric phase after one step at the given coherence.
    #[inline]
    pub fn accumulate(&self, geometric_phase: f64, coherence: f64) -> f64 {
        if !self.config.enabled {
            return geometric_phase;
        }
        geometric_phase + self.config.phase_step * coherence
    }
}
