//! Tests for configuration types.

use crate::config::*;
use crate::error::SeityError;

#[test]
fn test_seity_config_default() {
    let config = SeityConfig::default();
    assert!(config.validate().is_ok());
    assert_eq!(config.engine.birth_policy, BirthPolicy::Once);
    assert_eq!(config.engine.spread_metric, SpreadMetric::MeanCentered);
    assert_eq!(config.genesis.sample_count, DEFAULT_SAMPLE_COUNT);
    assert_eq!(config.genesis.variant, GenesisVariant::Minimal);
    assert!((config.genesis.initial_baseline - 0.1).abs() < 1e-12);
}

#[test]
fn test_presets_validate() {
    let weak = SeityConfig::weak_coupling_preset();
    assert!(weak.validate().is_ok());
    assert!((weak.engine.coupling_strength - WEAK_COUPLING_STRENGTH).abs() < 1e-12);

    let morpho = SeityConfig::morphogenesis_preset();
    assert!(morpho.validate().is_ok());
    assert!(morpho.berry.enabled);
    assert_eq!(morpho.genesis.variant, GenesisVariant::Rich);
}

#[test]
fn test_engine_config_validation() {
    let negative = EngineConfig {
        coupling_strength: -0.1,
        ..Default::default()
    };
    assert!(negative.validate().is_err());

    let nan = EngineConfig {
        coupling_strength: f64::NAN,
        ..Default::default()
    };
    assert!(nan.validate().is_err());

    let zero_threshold = EngineConfig {
        birth_threshold: 0.0,
        ..Default::default()
    };
    assert!(zero_threshold.validate().is_err());

    let above_one = EngineConfig {
        birth_threshold: 1.01,
        ..Default::default()
    };
    assert!(above_one.validate().is_err());

    let exactly_one = EngineConfig {
        birth_threshold: 1.0,
        ..Default::default()
    };
    assert!(exactly_one.validate().is_ok());
}

#[test]
fn test_genesis_config_validation() {
    let empty = GenesisConfig {
        sample_count: 0,
        ..Default::default()
    };
    assert!(empty.validate().is_err());

    let negative_gain = GenesisConfig {
        normalization: -0.06,
        ..Default::default()
    };
    let err = negative_gain.validate().unwrap_err();
    assert!(err.contains("normalization"));
}

#[test]
fn test_berry_config_validation() {
    assert!(BerryConfig::default().validate().is_ok());
    let bad = BerryConfig {
        phase_step: f64::INFINITY,
        ..BerryConfig::enabled()
    };
    assert!(bad.validate().is_err());
}

#[test]
fn test_seeding_config_validation() {
    assert!(SeedingConfig::default().validate().is_ok());

    let inverted = SeedingConfig {
        entropy_min: 0.6,
        entropy_max: 0.2,
        ..Default::default()
    };
    assert!(inverted.validate().is_err());

    let negative_std = SeedingConfig {
        bias_std: -1.0,
        ..Default::default()
    };
    assert!(negative_std.validate().is_err());
}

#[test]
fn test_json_round_trip_preserves_values() {
    let mut config = SeityConfig::morphogenesis_preset();
    config.engine.birth_policy = BirthPolicy::Rearm;
    config.seeding.seed = 7;

    let json = config.to_json_pretty().unwrap();
    assert!(json.contains("\"rearm\""));
    assert!(json.contains("\"rich\""));

    let parsed = SeityConfig::from_json_str(&json).unwrap();
    assert_eq!(parsed.engine.birth_policy, BirthPolicy::Rearm);
    assert_eq!(parsed.genesis.variant, GenesisVariant::Rich);
    assert_eq!(parsed.seeding.seed, 7);
    assert!(parsed.berry.enabled);
}

#[test]
fn test_partial_json_uses_defaults() {
    let parsed = SeityConfig::from_json_str(r#"{"engine": {"coupling_strength": 0.3}}"#).unwrap();
    assert!((parsed.engine.coupling_strength - 0.3).abs() < 1e-12);
    assert!((parsed.engine.birth_threshold - DEFAULT_BIRTH_THRESHOLD).abs() < 1e-12);
    assert_eq!(parsed.seeding.count, 100);
}

#[test]
fn test_invalid_json_config_rejected() {
    let err = SeityConfig::from_json_str(r#"{"engine": {"birth_threshold": 2.0}}"#).unwrap_err();
    assert!(matches!(err, SeityError::ConfigError(_)));

    let err = SeityConfig::from_json_str("not json").unwrap_err();
    assert!(matches!(err, SeityError::SerializationError(_)));
}

#[test]
fn test_missing_file_is_io_error() {
    let err = SeityConfig::from_json_file("/nonexistent/seity/config.json").unwrap_err();
    assert!(matches!(err, SeityError::IoError(_)));
}
