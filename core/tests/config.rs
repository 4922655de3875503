//! Config defaults, file overrides, validation.

use dreamstory_core::{
    catalog::RoomId,
    config::{default_epoch, SimConfig},
    engine::SimEngine,
    error::SimError,
};
use std::path::PathBuf;

fn write_temp(name: &str, content: &str) -> PathBuf {
    let path = std::env::temp_dir().join(format!(
        "dreamstory-{name}-{}.json",
        std::process::id()
    ));
    std::fs::write(&path, content).expect("write temp config");
    path
}

#[test]
fn defaults_match_canonical_values() {
    let c = SimConfig::default();
    assert_eq!(c.decay.energy, 0.1);
    assert_eq!(c.decay.happiness, 0.05);
    assert_eq!(c.decay.health, 0.02);
    assert_eq!(c.decay.sleep_quality, 0.03);
    assert_eq!(c.cooldown_ms, 30_000);
    assert_eq!(c.base_tick_ms, 1_000.0);
    assert_eq!(c.notification_window, 5);
    assert_eq!(c.initial_room, RoomId::Bedroom);
    assert_eq!(c.epoch, default_epoch());
    assert!(c.validate().is_ok());
}

#[test]
fn partial_file_keeps_other_defaults() {
    let path = write_temp(
        "partial",
        r#"{ "cooldown_ms": 5000, "decay": { "energy": 0.5 }, "initial_room": "gym" }"#,
    );
    let c = SimConfig::load(path.to_str().unwrap()).unwrap();
    let _ = std::fs::remove_file(&path);

    assert_eq!(c.cooldown_ms, 5_000);
    assert_eq!(c.decay.energy, 0.5);
    assert_eq!(c.decay.happiness, 0.05);
    assert_eq!(c.initial_room, RoomId::Gym);
    assert_eq!(c.notification_capacity, SimConfig::default().notification_capacity);
}

#[test]
fn epoch_must_be_a_monday() {
    let path = write_temp("tuesday", r#"{ "epoch": "2024-01-02T07:30:00" }"#);
    let err = SimConfig::load(path.to_str().unwrap()).unwrap_err();
    let _ = std::fs::remove_file(&path);
    assert!(matches!(err, SimError::InvalidConfig { .. }), "{err}");
}

#[test]
fn invalid_values_are_rejected() {
    let bad = [
        SimConfig { base_tick_ms: 0.0, ..SimConfig::default() },
        SimConfig { notification_capacity: 0, ..SimConfig::default() },
        SimConfig {
            decay: dreamstory_core::config::DecayRates { health: -1.0, ..Default::default() },
            ..SimConfig::default()
        },
    ];
    for config in bad {
        assert!(matches!(config.validate(), Err(SimError::InvalidConfig { .. })));
        assert!(SimEngine::build(config).is_err());
    }
}

#[test]
fn missing_file_is_an_error() {
    let err = SimConfig::load("/nonexistent/dreamstory.json").unwrap_err();
    assert!(matches!(err, SimError::Other(_)), "{err}");
}
