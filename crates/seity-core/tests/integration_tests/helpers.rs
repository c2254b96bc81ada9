//! Helper functions: deterministic engine construction.

use seity_core::{BirthPolicy, SeityConfig, SyncEngine};

/// Engine with an empty population and the given birth policy.
pub fn empty_engine(policy: BirthPolicy) -> SyncEngine {
    let mut config = SeityConfig::default();
    config.engine.birth_policy = policy;
    SyncEngine::new(&config).unwrap()
}

/// Engine with `count` random-phase oscillators sharing one bias and entropy.
pub fn uniform_engine(count: usize, bias: f64, entropy: f64) -> SyncEngine {
    let mut engine = empty_engine(BirthPolicy::Once);
    for _ in 0..count {
        engine.add_oscillator(None, bias, entropy).unwrap();
    }
    engine
}

/// Engine whose `count` oscillators all start at `phase` with zero noise.
pub fn aligned_engine(count: usize, phase: f64, policy: BirthPolicy) -> SyncEngine {
    let mut engine = empty_engine(policy);
    for _ in 0..count {
        engine.add_oscillator(Some(phase), 0.0, 0.0).unwrap();
    }
    engine
}
