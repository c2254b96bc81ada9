//! Waveform synthesis from engine state.

use crate::config::{GenesisConfig, GenesisVariant};
use crate::population::Oscillator;

use super::geometry::{sample_domain, Geometry};
use super::terms;

/// Engine state consumed by one generation event.
#[derive(Debug, Clone, Copy)]
pub struct GenesisInput<'a> {
    /// Coherence at the time of the event.
    pub coherence: f64,
    /// Baseline parameter after this event's increment.
    pub baseline: f64,
    /// Accumulated geometric phase.
    pub geometric_phase: f64,
    /// Current oscillators.
    pub oscillators: &'a [Oscillator],
}

/// Deterministic pattern generator.
///
/// # Example
///
/// ```
/// use seity_core::config::GenesisConfig;
/// use seity_core::genesis::{GenesisInput, PatternGenerator};
/// use seity_core::population::Oscillator;
///
/// let generator = PatternGenerator::new(&GenesisConfig::default());
/// let oscillators = [Oscillator::new(0.0, 0.0, 0.3)];
/// let input = GenesisInput {
///     coherence: 0.99,
///     baseline: 0.15,
///     geometric_phase: 0.0,
///     oscillators: &oscillators,
/// };
///
/// let geometry = generator.generate(1, &input);
/// assert_eq!(geometry.len(), 500);
/// assert_eq!(geometry, generator.generate(1, &input));
/// ```
#[derive(Debug, Clone, Default)]
pub struct PatternGenerator {
    config: GenesisConfig,
}

impl PatternGenerator {
    /// Create from configuration.
    pub fn new(config: &GenesisConfig) -> Self {
        Self {
            config: config.clone(),
        }
    }

    /// Configuration in use.
    pub fn config(&self) -> &GenesisConfig {
        &self.config
    }

    /// Amplitude divisor `1 + population_size * k2`.
    #[inline]
    pub fn normalization_factor(&self, population_size: usize) -> f64 {
        1.0 + population_size as f64 * self.config.normalization
    }

    /// Evaluate the waveform at every sample of the domain.
    pub fn generate(&self, generation: u64, input: &GenesisInput<'_>) -> Geometry {
        let rich = self.config.variant == GenesisVariant::Rich;
        let norm = self.normalization_factor(input.oscillators.len());

        let samples = sample_domain(self.config.sample_count)
            .into_iter()
            .map(|x| self.evaluate(x, input, rich) / norm)
            .collect();

        Geometry::new(generation, samples)
    }

    fn evaluate(&self, x: f64, input: &GenesisInput<'_>, rich: bool) -> f64 {
        let mut value = terms::primary_wave(x, input.baseline, self.config.frequency_gain);

        if rich {
            value += terms::reaction_diffusion(x);
        }

        for oscillator in input.oscillators {
            value += terms::oscillator_contribution(x, oscillator, self.config.bias_gain, rich);
        }

        if rich {
            value += terms::quasicrystal(x, input.coherence);
            value += terms::berry_modulation(x, input.geometric_phase);
            value += terms::symmetry_break(x, input.coherence);
        }

        value
    }
}
