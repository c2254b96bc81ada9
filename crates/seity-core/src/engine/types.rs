//! Engine state and construction.

use rand::Rng;
use rand_chacha::ChaCha8Rng;

use crate::berry::BerryField;
use crate::config::{EngineConfig, SeityConfig};
use crate::error::{SeityError, SeityResult};
use crate::genesis::{Geometry, PatternGenerator};
use crate::population::{Oscillator, Population};

/// Population plus the aggregate field state it drives.
///
/// # Example
///
/// ```
/// use seity_core::config::SeityConfig;
/// use seity_core::engine::SyncEngine;
///
/// let mut engine = SyncEngine::new(&SeityConfig::default()).unwrap();
/// for _ in 0..50 {
///     engine.add_oscillator(Some(0.0), 0.0, 0.01).unwrap();
/// }
///
/// for _ in 0..20 {
///     engine.step();
/// }
/// assert!(engine.coherence() > 0.9);
/// ```
#[derive(Debug, Clone)]
pub struct SyncEngine<R = ChaCha8Rng> {
    pub(crate) population: Population<R>,
    pub(crate) config: EngineConfig,
    pub(crate) berry: BerryField,
    pub(crate) generator: PatternGenerator,

    /// Coherence in `[0, 1]`; `0.0` before the first step.
    pub(crate) coherence: f64,
    /// Circular mean phase after the last step.
    pub(crate) mean_phase: f64,
    /// Incremented once per generation event.
    pub(crate) generation_id: u64,
    /// Baseline parameter `a`; only grows, only at generation events.
    pub(crate) baseline: f64,
    /// Most recent generated geometry.
    pub(crate) geometry: Option<Geometry>,
    /// Accumulated geometric phase (Berry extension).
    pub(crate) geometric_phase: f64,
    /// Set by the first generation event, never cleared.
    pub(crate) symmetry_broken: bool,
    /// Whether coherence was at or above threshold after the previous step.
    pub(crate) above_threshold: bool,
    /// Completed non-empty steps.
    pub(crate) steps: u64,
}

impl SyncEngine<ChaCha8Rng> {
    /// Create an engine with an empty population seeded from
    /// `config.seeding.seed`.
    ///
    /// # Errors
    ///
    /// Returns `SeityError::ConfigError` if the configuration is invalid.
    pub fn new(config: &SeityConfig) -> SeityResult<Self> {
        Self::with_population(config, Population::seeded(config.seeding.seed))
    }

    /// Create an engine and fill its population with the canonical seeding
    /// policy in `config.seeding`.
    pub fn from_config(config: &SeityConfig) -> SeityResult<Self> {
        config.validate().map_err(SeityError::ConfigError)?;
        let population = Population::from_seeding(&config.seeding)?;
        Ok(Self::assemble(config, population))
    }

    /// Empty engine with the default configuration and seed.
    pub fn with_defaults() -> Self {
        let config = SeityConfig::default();
        Self::assemble(&config, Population::seeded(config.seeding.seed))
    }
}

impl<R: Rng> SyncEngine<R> {
    /// Create an engine around an existing population and its random source.
    ///
    /// # Errors
    ///
    /// Returns `SeityError::ConfigError` if the configuration is invalid.
    pub fn with_population(config: &SeityConfig, population: Population<R>) -> SeityResult<Self> {
        config.validate().map_err(SeityError::ConfigError)?;
        Ok(Self::assemble(config, population))
    }

    /// Append one oscillator. See [`Population::add_oscillator`].
    pub fn add_oscillator(
        &mut self,
        phase: Option<f64>,
        bias: f64,
        entropy: f64,
    ) -> SeityResult<&Oscillator> {
        self.population.add_oscillator(phase, bias, entropy)
    }
}

impl<R> SyncEngine<R> {
    fn assemble(config: &SeityConfig, population: Population<R>) -> Self {
        Self {
            population,
            config: config.engine.clone(),
            berry: BerryField::new(&config.berry),
            generator: PatternGenerator::new(&config.genesis),
            coherence: 0.0,
            mean_phase: 0.0,
            generation_id: 0,
            baseline: config.genesis.initial_baseline,
            geometry: None,
            geometric_phase: 0.0,
            symmetry_broken: false,
            above_threshold: false,
            steps: 0,
        }
    }

    /// Current coherence in `[0, 1]`.
    #[inline]
    pub fn coherence(&self) -> f64 {
        self.coherence
    }

    /// Circular mean phase after the last step.
    #[inline]
    pub fn mean_phase(&self) -> f64 {
        self.mean_phase
    }

    /// Number of generation events so far.
    #[inline]
    pub fn generation_id(&self) -> u64 {
        self.generation_id
    }

    /// Baseline parameter `a`.
    #[inline]
    pub fn baseline(&self) -> f64 {
        self.baseline
    }

    /// Most recent geometry, if any generation event has fired.
    #[inline]
    pub fn geometry(&self) -> Option<&Geometry> {
        self.geometry.as_ref()
    }

    /// Accumulated geometric phase. Stays `0.0` unless the Berry extension
    /// is enabled.
    #[inline]
    pub fn geometric_phase(&self) -> f64 {
        self.geometric_phase
    }

    /// Whether a generation event has ever fired.
    #[inline]
    pub fn symmetry_broken(&self) -> bool {
        self.symmetry_broken
    }

    /// Completed non-empty steps.
    #[inline]
    pub fn steps(&self) -> u64 {
        self.steps
    }

    /// The population.
    #[inline]
    pub fn population(&self) -> &Population<R> {
        &self.population
    }

    /// Engine configuration.
    #[inline]
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Set the coupling strength K.
    ///
    /// # Errors
    ///
    /// Returns `SeityError::InvalidParameter` if `k` is negative or not finite.
    pub fn set_coupling_strength(&mut self, k: f64) -> SeityResult<()> {
        if !k.is_finite() || k < 0.0 {
            return Err(SeityError::invalid_param(
                "coupling_strength",
                k,
                "Coupling strength must be finite and >= 0",
            ));
        }
        self.config.coupling_strength = k;
        Ok(())
    }

    /// Whether the current coherence is at or above the birth threshold.
    #[inline]
    pub fn is_above_threshold(&self) -> bool {
        self.coherence >= self.config.birth_threshold
    }
}
