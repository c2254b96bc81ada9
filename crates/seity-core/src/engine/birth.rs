//! Generation events ("births").

use tracing::{debug, info, warn};

use super::types::SyncEngine;
use crate::config::BirthPolicy;
use crate::genesis::{GenesisInput, Geometry};

impl<R> SyncEngine<R> {
    /// Fire a generation event.
    ///
    /// Increments the generation id, raises the baseline by
    /// `baseline_gain * coherence`, and stores a freshly generated geometry,
    /// overwriting any previous one. Uses no randomness.
    ///
    /// Calling this below the birth threshold is allowed; the result is a
    /// low-fidelity pattern.
    pub fn trigger(&mut self) -> &Geometry {
        if !self.is_above_threshold() {
            warn!(
                coherence = self.coherence,
                threshold = self.config.birth_threshold,
                "Generation requested below birth threshold"
            );
        }

        self.symmetry_broken = true;
        self.generation_id += 1;
        self.baseline += self.generator.config().baseline_gain * self.coherence;

        let input = GenesisInput {
            coherence: self.coherence,
            baseline: self.baseline,
            geometric_phase: self.geometric_phase,
            oscillators: self.population.oscillators(),
        };
        let geometry = self.generator.generate(self.generation_id, &input);

        info!(
            generation = self.generation_id,
            coherence = self.coherence,
            baseline = self.baseline,
            geometric_phase = self.geometric_phase,
            population = self.population.len(),
            samples = geometry.len(),
            "Generation born"
        );

        self.geometry.insert(geometry)
    }

    /// Apply the birth policy after a step.
    pub(crate) fn check_birth(&mut self) -> Option<u64> {
        let above = self.is_above_threshold();
        let was_above = std::mem::replace(&mut self.above_threshold, above);
        if !above {
            return None;
        }

        let fire = match self.config.birth_policy {
            BirthPolicy::Once => !self.symmetry_broken,
            BirthPolicy::Rearm => !was_above,
            BirthPolicy::Manual => false,
        };

        if !fire {
            debug!(
                coherence = self.coherence,
                policy = ?self.config.birth_policy,
                "Threshold reached, birth suppressed by policy"
            );
            return None;
        }

        self.trigger();
        Some(self.generation_id)
    }
}
