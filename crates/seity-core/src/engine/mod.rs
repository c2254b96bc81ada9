//! Synchronization engine.
//!
//! Advances a population one discrete step at a time with a Kuramoto-style
//! mean-field update:
//!
//! ```text
//! ψ   = atan2(⟨sin θ⟩, ⟨cos θ⟩)                      (circular mean)
//! θᵢ ← (θᵢ + K·sin(ψ - θᵢ) + bᵢ + Hᵢ·ξᵢ) mod 2π      ξᵢ ~ N(0, 1)
//! r   = clamp(1 - spread(θ)/π, 0, 1)                 (coherence)
//! ```
//!
//! When `r` reaches the birth threshold the engine fires a generation event
//! according to its [`BirthPolicy`](crate::config::BirthPolicy). Callers can
//! always fire one explicitly with [`SyncEngine::trigger`].

mod birth;
mod snapshot;
mod step;
mod types;


pub use snapshot::Snapshot;
pub use step::{RunOutcome, StepReport};
pub use types::SyncEngine;
