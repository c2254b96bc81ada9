//! Seity: stochastic phase-synchronization with coherence-triggered pattern
//! generation.
//!
//! A population of noisy, biased phase oscillators is pulled toward its
//! circular mean every step. Once the population's coherence reaches a
//! threshold, the engine derives a deterministic waveform ("geometry") from
//! the oscillators and the run's history.
//!
//! # Modules
//!
//! - [`config`]: Configuration types, presets and JSON loading
//! - [`error`]: Error types and result aliases
//! - [`circular`]: Circular mean, phase spread and coherence
//! - [`population`]: Oscillators and the seedable population container
//! - [`engine`]: The step loop, birth policy and snapshots
//! - [`genesis`]: Deterministic waveform synthesis
//! - [`berry`]: Optional Berry-phase / morphogenesis extension
//!
//! # Example
//!
//! ```
//! use seity_core::{SeityConfig, SyncEngine};
//!
//! let mut engine = SyncEngine::new(&SeityConfig::default()).unwrap();
//! engine.add_oscillator(Some(0.0), 0.0, 0.0).unwrap();
//! engine.add_oscillator(Some(std::f64::consts::PI), 0.0, 0.0).unwrap();
//!
//! let report = engine.step().unwrap();
//! assert!(report.coherence > 0.5);
//!
//! // Generation can always be requested explicitly.
//! let geometry = engine.trigger();
//! assert_eq!(geometry.len(), 500);
//! assert_eq!(engine.generation_id(), 1);
//! ```

pub mod berry;
pub mod circular;
pub mod config;
pub mod engine;
pub mod error;
pub mod genesis;
pub mod population;

pub use config::{BirthPolicy, GenesisVariant, SeityConfig, SpreadMetric};
pub use engine::{RunOutcome, Snapshot, StepReport, SyncEngine};
pub use error::{SeityError, SeityResult};
pub use genesis::Geometry;
pub use population::{Oscillator, Population};
