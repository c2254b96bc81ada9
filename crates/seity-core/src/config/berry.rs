//! Berry-phase / morphogenesis extension settings.
//!
//! When enabled, each oscillator is weakly pulled toward its own geometric
//! signature, signatures drift toward the population mean, and the engine
//! accumulates a geometric phase proportional to coherence.

use serde::{Deserialize, Serialize};

/// Berry-phase extension settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct BerryConfig {
    /// Enable the extension. Disabled by default (minimal engine).
    pub enabled: bool,

    /// Pull of a phase toward its own signature.
    pub signature_coupling: f64,

    /// Pull of a signature toward the mean phase.
    pub signature_drift: f64,

    /// Geometric phase increment per step is `phase_step * coherence`.
    pub phase_step: f64,
}

impl Default for BerryConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            signature_coupling: 0.005,
            signature_drift: 0.001,
            phase_step: 0.01,
        }
    }
}

impl BerryConfig {
    /// Default coefficients with the extension switched on.
    pub fn enabled() -> Self {
        Self {
            enabled: true,
            ..Default::default()
        }
    }

    /// Validate the extension configuration.
    pub fn validate(&self) -> Result<(), String> {
        let coefficients = [
            ("signature_coupling", self.signature_coupling),
            ("signature_drift", self.signature_drift),
            ("phase_step", self.phase_step),
        ];
        for (name, value) in coefficients {
            if !value.is_finite() || value < 0.0 {
                return Err(format!("{} must be finite and >= 0, got {}", name, value));
            }
        }
        Ok(())
    }
}
