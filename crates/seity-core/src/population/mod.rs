//! Oscillator population.
//!
//! A [`Population`] owns its [`Oscillator`]s together with the random source
//! used for phase initialization and per-step noise. The random source is
//! injected at construction, so a run is reproducible from its seed alone.

mod oscillator;
mod seeding;
mod types;


pub use oscillator::{Oscillator, DEFAULT_ENTROPY};
pub use types::Population;
