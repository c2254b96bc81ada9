//! Population container and insertion.

use std::f64::consts::TAU;

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use super::oscillator::Oscillator;
use crate::circular::wrap_phase;
use crate::error::{SeityError, SeityResult};

/// Ordered collection of oscillators plus the owned random source.
///
/// # Example
///
/// ```
/// use seity_core::population::Population;
///
/// let mut population = Population::seeded(42);
/// population.add_oscillator(None, 0.0, 0.3).unwrap();
/// population.add_oscillator(Some(1.0), 0.001, 0.3).unwrap();
///
/// assert_eq!(population.len(), 2);
/// assert_eq!(population.oscillators()[1].phase, 1.0);
/// ```
#[derive(Debug, Clone)]
pub struct Population<R = ChaCha8Rng> {
    oscillators: Vec<Oscillator>,
    rng: R,
}

impl Population<ChaCha8Rng> {
    /// Create an empty population with a ChaCha8 RNG seeded from `seed`.
    pub fn seeded(seed: u64) -> Self {
        Self::with_rng(ChaCha8Rng::seed_from_u64(seed))
    }
}

impl<R: Rng> Population<R> {
    /// Create an empty population around an injected random source.
    pub fn with_rng(rng: R) -> Self {
        Self {
            oscillators: Vec::new(),
            rng,
        }
    }

    /// Append one oscillator.
    ///
    /// A missing `phase` is drawn uniformly from `[0, 2π)`; a given phase is
    /// wrapped into that range. The geometric signature is always drawn
    /// uniformly from `[0, 2π)`.
    ///
    /// # Errors
    ///
    /// Returns `SeityError::InvalidParameter` if `entropy` is negative or NaN.
    /// The population is unchanged in that case.
    pub fn add_oscillator(
        &mut self,
        phase: Option<f64>,
        bias: f64,
        entropy: f64,
    ) -> SeityResult<&Oscillator> {
        if entropy.is_nan() || entropy < 0.0 {
            return Err(SeityError::invalid_param(
                "entropy",
                entropy,
                "Noise standard deviation must be >= 0",
            ));
        }

        let phase = match phase {
            Some(p) => wrap_phase(p),
            None => self.rng.gen_range(0.0..TAU),
        };
        let signature = self.rng.gen_range(0.0..TAU);

        self.oscillators
            .push(Oscillator::new(phase, bias, entropy).with_signature(signature));
        Ok(&self.oscillators[self.oscillators.len() - 1])
    }

    /// Append an oscillator with a random phase, zero bias and default entropy.
    pub fn add_default(&mut self) -> SeityResult<&Oscillator> {
        self.add_oscillator(None, 0.0, super::DEFAULT_ENTROPY)
    }

    /// Split into the oscillators and the random source for a step update.
    pub(crate) fn split_mut(&mut self) -> (&mut [Oscillator], &mut R) {
        (&mut self.oscillators, &mut self.rng)
    }

    pub(crate) fn rng_mut(&mut self) -> &mut R {
        &mut self.rng
    }
}

impl<R> Population<R> {
    /// Number of oscillators.
    #[inline]
    pub fn len(&self) -> usize {
        self.oscillators.len()
    }

    /// True if there are no oscillators.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.oscillators.is_empty()
    }

    /// All oscillators in insertion order.
    #[inline]
    pub fn oscillators(&self) -> &[Oscillator] {
        &self.oscillators
    }

    /// Iterate over the oscillators.
    pub fn iter(&self) -> std::slice::Iter<'_, Oscillator> {
        self.oscillators.iter()
    }

    /// Current phases in insertion order.
    pub fn phases(&self) -> Vec<f64> {
        self.oscillators.iter().map(|o| o.phase).collect()
    }

    /// Fraction of oscillators with non-negative bias.
    ///
    /// Returns `0.0` for an empty population.
    pub fn harmonizing_fraction(&self) -> f64 {
        if self.oscillators.is_empty() {
            return 0.0;
        }
        let count = self.oscillators.iter().filter(|o| o.is_harmonizing()).count();
        count as f64 / self.oscillators.len() as f64
    }
}

impl<'a, R> IntoIterator for &'a Population<R> {
    type Item = &'a Oscillator;
    type IntoIter = std::slice::Iter<'a, Oscillator>;

    fn into_iter(self) -> Self::IntoIter {
        self.oscillators.iter()
    }
}
