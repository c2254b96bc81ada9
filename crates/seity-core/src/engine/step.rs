//! The discrete time step.

use rand::Rng;
use rand_distr::{Distribution, StandardNormal};
use tracing::trace;

use super::types::SyncEngine;
use crate::circular::{circular_mean, coherence_from_spread, phase_spread, wrap_phase};

/// What one non-empty step produced.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StepReport {
    /// 1-based index of this step.
    pub step: u64,
    /// Coherence after the step.
    pub coherence: f64,
    /// Circular mean phase after the step.
    pub mean_phase: f64,
    /// Phase spread behind the coherence value.
    pub spread: f64,
    /// Generation id if this step fired a generation event.
    pub birth: Option<u64>,
}

/// Result of a bounded run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunOutcome {
    /// Steps executed (at most the requested bound).
    pub steps: u64,
    /// Generation id of the birth that ended the run, if any.
    pub birth: Option<u64>,
}

impl<R: Rng> SyncEngine<R> {
    /// Advance the population by one step.
    ///
    /// Every oscillator is updated against the circular mean computed before
    /// the step, so update order does not matter. Afterwards coherence is
    /// recomputed and, if the birth policy allows, a generation event fires.
    ///
    /// # Returns
    ///
    /// `None` for an empty population, in which case no state changes.
    pub fn step(&mut self) -> Option<StepReport> {
        let mean = circular_mean(self.population.iter().map(|o| o.phase))?;

        let k = self.config.coupling_strength;
        let berry = &self.berry;
        let (oscillators, rng) = self.population.split_mut();

        for oscillator in oscillators.iter_mut() {
            let delta = mean - oscillator.phase;
            let noise: f64 = StandardNormal.sample(rng);

            let increment = k * delta.sin()
                + berry.signature_pull(oscillator)
                + oscillator.bias
                + oscillator.entropy * noise;

            oscillator.phase = wrap_phase(oscillator.phase + increment);
            berry.drift_signature(oscillator, mean);
        }

        let phases = self.population.phases();
        // Population is non-empty here
        self.mean_phase = circular_mean(phases.iter().copied()).unwrap_or(mean);
        let spread = phase_spread(&phases, self.mean_phase, self.config.spread_metric);
        self.coherence = coherence_from_spread(spread);
        self.geometric_phase = self.berry.accumulate(self.geometric_phase, self.coherence);
        self.steps += 1;

        trace!(
            step = self.steps,
            coherence = self.coherence,
            mean_phase = self.mean_phase,
            spread,
            "Step complete"
        );

        let birth = self.check_birth();

        Some(StepReport {
            step: self.steps,
            coherence: self.coherence,
            mean_phase: self.mean_phase,
            spread,
            birth,
        })
    }

    /// Step until a generation event fires or `max_steps` steps have run.
    ///
    /// An empty population executes zero steps.
    pub fn run_until_birth(&mut self, max_steps: u64) -> RunOutcome {
        let mut executed = 0;
        while executed < max_steps {
            let Some(report) = self.step() else {
                break;
            };
            executed += 1;
            if report.birth.is_some() {
                return RunOutcome {
                    steps: executed,
                    birth: report.birth,
                };
            }
        }
        RunOutcome {
            steps: executed,
            birth: None,
        }
    }
}
