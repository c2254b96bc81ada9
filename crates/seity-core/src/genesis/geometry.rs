//! The generated artifact.

use std::f64::consts::TAU;

use serde::{Deserialize, Serialize};

/// `n` evenly spaced points over the half-open domain `[0, 2π)`.
pub fn sample_domain(n: usize) -> Vec<f64> {
    (0..n).map(|i| TAU * i as f64 / n as f64).collect()
}

/// Samples of a generated waveform over `[0, 2π)`.
///
/// Sample `i` of `N` sits at `x = 2π·i/N`. The length is fixed by
/// configuration and does not depend on the population size.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Geometry {
    generation: u64,
    samples: Vec<f64>,
}

impl Geometry {
    pub(crate) fn new(generation: u64, samples: Vec<f64>) -> Self {
        Self {
            generation,
            samples,
        }
    }

    /// Generation id this geometry was produced for.
    #[inline]
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Waveform samples.
    #[inline]
    pub fn samples(&self) -> &[f64] {
        &self.samples
    }

    /// Number of samples.
    #[inline]
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    /// True if there are no samples.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Domain coordinate of each sample.
    pub fn domain(&self) -> Vec<f64> {
        sample_domain(self.samples.len())
    }

    /// `(x, value)` pairs.
    pub fn points(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        let n = self.samples.len() as f64;
        self.samples
            .iter()
            .enumerate()
            .map(move |(i, &v)| (TAU * i as f64 / n, v))
    }

    /// Largest absolute sample value.
    pub fn peak_amplitude(&self) -> f64 {
        self.samples.iter().fold(0.0, |peak, v| peak.max(v.abs()))
    }

    /// Root mean square of the samples. `0.0` when empty.
    pub fn rms(&self) -> f64 {
        if self.samples.is_empty() {
            return 0.0;
        }
        let sum_sq: f64 = self.samples.iter().map(|v| v * v).sum();
        (sum_sq / self.samples.len() as f64).sqrt()
    }

    /// Consume into the raw samples.
    pub fn into_samples(self) -> Vec<f64> {
        self.samples
    }
}
