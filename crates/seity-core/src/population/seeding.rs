//! Canonical seeding of a population from [`SeedingConfig`].

use rand::Rng;
use rand_chacha::ChaCha8Rng;
use rand_distr::{Distribution, Normal, Uniform};
use tracing::debug;

use super::types::Population;
use crate::config::SeedingConfig;
use crate::error::{SeityError, SeityResult};

impl<R: Rng> Population<R> {
    /// Append `seeding.count` oscillators with random phases, normally
    /// distributed bias and uniformly distributed entropy.
    ///
    /// # Errors
    ///
    /// Returns `SeityError::ConfigError` if the seeding configuration is invalid.
    pub fn seed_from(&mut self, seeding: &SeedingConfig) -> SeityResult<()> {
        seeding.validate().map_err(SeityError::ConfigError)?;

        let bias_dist = Normal::new(seeding.bias_mean, seeding.bias_std)
            .map_err(|e| SeityError::invalid_param("bias_std", seeding.bias_std, e.to_string()))?;
        let entropy_dist = Uniform::new(seeding.entropy_min, seeding.entropy_max);

        for _ in 0..seeding.count {
            let bias = bias_dist.sample(self.rng_mut());
            let entropy = entropy_dist.sample(self.rng_mut());
            self.add_oscillator(None, bias, entropy)?;
        }

        debug!(
            count = seeding.count,
            harmonizing = self.harmonizing_fraction(),
            "Seeded population"
        );
        Ok(())
    }
}

impl Population<ChaCha8Rng> {
    /// Build a population seeded from `seeding.seed` and filled per `seeding`.
    pub fn from_seeding(seeding: &SeedingConfig) -> SeityResult<Self> {
        let mut population = Self::seeded(seeding.seed);
        population.seed_from(seeding)?;
        Ok(population)
    }
}
