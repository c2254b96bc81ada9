//! Full-run simulation tests.

use std::f64::consts::TAU;

use seity_core::{BirthPolicy, SeityConfig, SyncEngine};

use super::helpers::{aligned_engine, empty_engine, uniform_engine};

// =============================================================================
// SMALL RUNS
// =============================================================================

#[test]
fn test_small_simulation() {
    let mut engine = uniform_engine(10, 0.0001, 0.2);

    for _ in 0..100 {
        engine.step();
        if engine.geometry().is_some() {
            break;
        }
    }

    assert_eq!(engine.population().len(), 10);
    assert!((0.0..=1.0).contains(&engine.coherence()));
    assert!(engine.geometric_phase() >= 0.0);
}

#[test]
fn test_coherence_bounds_over_run() {
    let mut engine = uniform_engine(20, 0.0, 0.3);
    for _ in 0..50 {
        let report = engine.step().unwrap();
        assert!(
            (0.0..=1.0).contains(&report.coherence),
            "Coherence {} out of bounds",
            report.coherence
        );
    }
}

#[test]
fn test_low_entropy_cluster_is_coherent() {
    let mut engine = empty_engine(BirthPolicy::Manual);
    for _ in 0..10 {
        engine.add_oscillator(Some(1.0), 0.0, 0.01).unwrap();
    }
    engine.step();
    assert!(engine.coherence() > 0.5);
}

#[test]
fn test_step_indices_are_sequential() {
    let mut engine = uniform_engine(4, 0.0, 0.3);
    for expected in 1..=25 {
        assert_eq!(engine.step().unwrap().step, expected);
    }
    assert_eq!(engine.steps(), 25);
}

// =============================================================================
// CANONICAL SEEDING
// =============================================================================

#[test]
fn test_canonical_population_shape() {
    let engine = SyncEngine::from_config(&SeityConfig::default()).unwrap();
    assert_eq!(engine.population().len(), 100);

    for osc in engine.population().iter() {
        assert!((0.0..TAU).contains(&osc.phase));
        assert!((0.12..0.58).contains(&osc.entropy));
        assert!(osc.bias.abs() < 0.001);
    }
}

#[test]
fn test_canonical_run_is_reproducible() {
    let config = SeityConfig::default();
    let mut a = SyncEngine::from_config(&config).unwrap();
    let mut b = SyncEngine::from_config(&config).unwrap();

    let out_a = a.run_until_birth(500);
    let out_b = b.run_until_birth(500);

    assert_eq!(out_a, out_b);
    assert_eq!(a.snapshot(), b.snapshot());
}

#[test]
fn test_weak_coupling_stays_incoherent() {
    let config = SeityConfig::weak_coupling_preset();
    let mut engine = SyncEngine::from_config(&config).unwrap();

    let outcome = engine.run_until_birth(200);
    assert!(outcome.birth.is_none());
    assert_eq!(outcome.steps, 200);
    assert!(engine.coherence() < 0.98);
}

// =============================================================================
// BIRTH POLICIES
// =============================================================================

#[test]
fn test_noiseless_cluster_births_on_first_step() {
    let mut engine = aligned_engine(30, 4.0, BirthPolicy::Once);
    let report = engine.step().unwrap();

    assert_eq!(report.coherence, 1.0);
    assert_eq!(report.birth, Some(1));
    assert!(engine.symmetry_broken());
    assert!((engine.baseline() - 0.15).abs() < 1e-12);
}

#[test]
fn test_birth_stops_run_early() {
    let mut engine = aligned_engine(8, 0.2, BirthPolicy::Once);
    let outcome = engine.run_until_birth(100);
    assert_eq!(outcome.steps, 1);
    assert_eq!(outcome.birth, Some(1));

    // A second bounded run under Once never births again
    let again = engine.run_until_birth(100);
    assert_eq!(again.steps, 100);
    assert!(again.birth.is_none());
}

#[test]
fn test_manual_policy_waits_for_trigger() {
    let mut engine = aligned_engine(8, 0.2, BirthPolicy::Manual);
    let outcome = engine.run_until_birth(50);
    assert!(outcome.birth.is_none());
    assert!(engine.is_above_threshold());

    let samples = engine.trigger().len();
    assert_eq!(samples, 500);
    assert_eq!(engine.generation_id(), 1);
}

// =============================================================================
// MORPHOGENESIS
// =============================================================================

#[test]
fn test_morphogenesis_run_accumulates_phase() {
    let config = SeityConfig::morphogenesis_preset();
    let mut engine = SyncEngine::from_config(&config).unwrap();

    let mut previous = 0.0;
    for _ in 0..100 {
        engine.step();
        assert!(engine.geometric_phase() >= previous);
        previous = engine.geometric_phase();
    }
    assert!(engine.geometric_phase() > 0.0);
    // Bounded by phase_step per step at coherence <= 1
    assert!(engine.geometric_phase() <= 100.0 * 0.01 + 1e-12);
}
