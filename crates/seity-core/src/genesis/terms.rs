//! Basis terms of the generated waveform.
//!
//! Each function evaluates one term at domain coordinate `x`.

use std::f64::consts::PI;

use crate::population::Oscillator;

/// Golden ratio `(1 + √5) / 2`.
pub const GOLDEN_RATIO: f64 = 1.618_033_988_749_895;

/// Primary sinusoid whose frequency grows with the baseline parameter.
#[inline]
pub fn primary_wave(x: f64, baseline: f64, frequency_gain: f64) -> f64 {
    (x * (1.0 + baseline * frequency_gain)).sin()
}

/// Activator/inhibitor pair standing in for a reaction-diffusion pattern.
#[inline]
pub fn reaction_diffusion(x: f64) -> f64 {
    let activator = (3.0 * x).sin() * (-0.1 * x).exp();
    let inhibitor = (1.5 * x).cos() * (-0.05 * x).exp();
    0.2 * (activator - 0.3 * inhibitor)
}

/// Contribution of one oscillator.
///
/// A sinusoid shifted by the oscillator's phase with amplitude growing in its
/// entropy; the rich variant adds a golden-ratio term shifted by its
/// signature. The sum is amplified by `1 + bias * bias_gain`.
#[inline]
pub fn oscillator_contribution(x: f64, oscillator: &Oscillator, bias_gain: f64, rich: bool) -> f64 {
    let mut contribution = (x + oscillator.phase).sin() * (0.08 + oscillator.entropy * 0.3);
    if rich {
        contribution += (x * GOLDEN_RATIO + oscillator.geometric_signature).cos() * 0.05;
    }
    contribution * (1.0 + oscillator.bias * bias_gain)
}

/// Non-repeating structure from three incommensurate frequencies
/// (φ, φ², 1/φ), scaled by coherence.
#[inline]
pub fn quasicrystal(x: f64, coherence: f64) -> f64 {
    let phi = GOLDEN_RATIO;
    let sum = (x * phi).sin() + (x * phi * phi).sin() + (x / phi).sin();
    0.3 * coherence * sum / 3.0
}

/// Modulation by the accumulated geometric phase.
#[inline]
pub fn berry_modulation(x: f64, geometric_phase: f64) -> f64 {
    0.15 * (x + geometric_phase).sin()
}

/// Smooth asymmetric step centred at the domain midpoint, scaled by coherence.
#[inline]
pub fn symmetry_break(x: f64, coherence: f64) -> f64 {
    0.2 * ((x - PI) * 0.5).tanh() * coherence
}
