//! A single phase oscillator ("soul").

use serde::{Deserialize, Serialize};

/// Noise level used when the caller does not choose one.
pub const DEFAULT_ENTROPY: f64 = 0.3;

/// A unit of the population: phase angle, drift bias and noise level.
///
/// `phase` and `geometric_signature` live in `[0, 2π)` after every engine
/// step. `bias` and `entropy` are fixed for the lifetime of the oscillator.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Oscillator {
    /// Current phase angle in radians.
    pub phase: f64,

    /// Constant per-step drift. Positive values harmonize, negative disrupt.
    pub bias: f64,

    /// Standard deviation of the Gaussian noise added every step.
    pub entropy: f64,

    /// Secondary degree of freedom used by the Berry extension and the rich
    /// genesis variant.
    pub geometric_signature: f64,
}

impl Oscillator {
    /// Create an oscillator with a zero geometric signature.
    pub fn new(phase: f64, bias: f64, entropy: f64) -> Self {
        Self {
            phase,
            bias,
            entropy,
            geometric_signature: 0.0,
        }
    }

    /// Replace the geometric signature.
    pub fn with_signature(mut self, geometric_signature: f64) -> Self {
        self.geometric_signature = geometric_signature;
        self
    }

    /// Whether this oscillator leans toward harmony (`bias >= 0`).
    #[inline]
    pub fn is_harmonizing(&self) -> bool {
        self.bias >= 0.0
    }
}

impl Default for Oscillator {
    fn default() -> Self {
        Self::new(0.0, 0.0, DEFAULT_ENTROPY)
    }
}
