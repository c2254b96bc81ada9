//! Pattern generation ("genesis").
//!
//! Derives a fixed-length waveform from the engine state when a generation
//! event fires. Generation is fully deterministic: the same state always
//! yields the same [`Geometry`].
//!
//! # Waveform
//!
//! ```text
//! w(x) = [ sin(x·(1 + a·g_f))
//!        + Σᵢ (sin(x + θᵢ)·(0.08 + 0.3·Hᵢ) [+ 0.05·cos(φx + σᵢ)]) · (1 + bᵢ·g_b)
//!        + rich terms ] / (1 + N·k₂)
//! ```
//!
//! Where `a` is the baseline, `θᵢ`, `Hᵢ`, `bᵢ`, `σᵢ` are phase, entropy,
//! bias and signature of oscillator `i`, `φ` is the golden ratio and `N` the
//! population size. The rich terms are listed in [`terms`].

mod generator;
mod geometry;
pub mod terms;


pub use generator::{GenesisInput, PatternGenerator};
pub use geometry::{sample_domain, Geometry};
