//! Configuration feeding engine construction.

use std::io::Write;

use seity_core::{BirthPolicy, SeityConfig, SeityError, SyncEngine};

#[test]
fn test_config_json_builds_engine() {
    let json = r#"{
        "engine": { "coupling_strength": 0.25, "birth_policy": "rearm" },
        "seeding": { "count": 12, "seed": 7 }
    }"#;

    let config = SeityConfig::from_json_str(json).unwrap();
    assert_eq!(config.engine.birth_policy, BirthPolicy::Rearm);

    let engine = SyncEngine::from_config(&config).unwrap();
    assert_eq!(engine.population().len(), 12);
    assert!((engine.config().coupling_strength - 0.25).abs() < 1e-12);
    assert!((engine.config().birth_threshold - 0.98).abs() < 1e-12);
}

#[test]
fn test_invalid_threshold_rejected() {
    let json = r#"{ "engine": { "birth_threshold": 1.5 } }"#;
    let err = SeityConfig::from_json_str(json).unwrap_err();
    assert!(matches!(err, SeityError::ConfigError(_)));
    assert!(err.is_invalid_input());
}

#[test]
fn test_negative_entropy_rejected_at_insertion() {
    let mut engine = SyncEngine::with_defaults();
    let err = engine.add_oscillator(Some(0.0), 0.0, -0.1).unwrap_err();
    assert!(matches!(err, SeityError::InvalidParameter { .. }));
    assert!(engine.population().is_empty());
}

#[test]
fn test_config_file_round_trip() {
    let path = std::env::temp_dir().join(format!("seity-config-{}.json", std::process::id()));
    let config = SeityConfig::morphogenesis_preset();
    {
        let mut file = std::fs::File::create(&path).unwrap();
        file.write_all(config.to_json_pretty().unwrap().as_bytes())
            .unwrap();
    }

    let loaded = SeityConfig::from_json_file(&path).unwrap();
    std::fs::remove_file(&path).ok();

    assert!(loaded.berry.enabled);
    assert_eq!(loaded.genesis.variant, config.genesis.variant);
    assert_eq!(loaded.seeding.seed, config.seeding.seed);
}
