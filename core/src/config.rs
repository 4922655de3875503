//! Simulation tunables.
//!
//! `SimConfig::default()` carries the canonical values. A JSON file can
//! override any subset of them; missing fields keep their defaults.

use crate::{
    catalog::RoomId,
    error::{SimError, SimResult},
    types::RealMillis,
};
use anyhow::Context;
use chrono::{Datelike, NaiveDate, NaiveDateTime, Weekday};
use serde::{Deserialize, Serialize};

/// Per-tick passive decay, subtracted from each stat and floored at 0.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct DecayRates {
    pub energy:        f64,
    pub happiness:     f64,
    pub health:        f64,
    pub sleep_quality: f64,
}

impl Default for DecayRates {
    fn default() -> Self {
        Self {
            energy:        0.1,
            happiness:     0.05,
            health:        0.02,
            sleep_quality: 0.03,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct InitialStats {
    pub energy:        f64,
    pub happiness:     f64,
    pub health:        f64,
    pub sleep_quality: f64,
}

impl Default for InitialStats {
    fn default() -> Self {
        Self {
            energy:        80.0,
            happiness:     70.0,
            health:        75.0,
            sleep_quality: 60.0,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct SimConfig {
    pub decay:                 DecayRates,
    pub initial_stats:         InitialStats,
    pub initial_room:          RoomId,
    /// Real-time cooldown after an activity is performed. Independent of game speed.
    pub cooldown_ms:           RealMillis,
    /// Tick period at speed 1.0.
    pub base_tick_ms:          f64,
    /// Oldest notifications are dropped beyond this many.
    pub notification_capacity: usize,
    /// How many notifications a snapshot exposes.
    pub notification_window:   usize,
    /// Session start. Must fall on a Monday.
    pub epoch:                 NaiveDateTime,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            decay:                 DecayRates::default(),
            initial_stats:         InitialStats::default(),
            initial_room:          RoomId::Bedroom,
            cooldown_ms:           30_000,
            base_tick_ms:          1_000.0,
            notification_capacity: 50,
            notification_window:   5,
            epoch:                 default_epoch(),
        }
    }
}

/// Monday 2024-01-01, 07:30.
pub fn default_epoch() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2024, 1, 1)
        .and_then(|d| d.and_hms_opt(7, 30, 0))
        .unwrap_or_default()
}

impl SimConfig {
    /// Load overrides from a JSON file and validate the result.
    pub fn load(path: &str) -> SimResult<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Cannot read {path}"))?;
        let config: SimConfig = serde_json::from_str(&content)?;
        config.validate()?;
        log::info!("Loaded config from {path}");
        Ok(config)
    }

    pub fn validate(&self) -> SimResult<()> {
        let invalid = |reason: &str| Err(SimError::InvalidConfig { reason: reason.into() });

        if !(self.base_tick_ms.is_finite() && self.base_tick_ms > 0.0) {
            return invalid("base_tick_ms must be finite and > 0");
        }
        let d = &self.decay;
        if [d.energy, d.happiness, d.health, d.sleep_quality]
            .iter()
            .any(|r| !r.is_finite() || *r < 0.0)
        {
            return invalid("decay rates must be finite and >= 0");
        }
        let s = &self.initial_stats;
        if [s.energy, s.happiness, s.health, s.sleep_quality]
            .iter()
            .any(|v| !(0.0..=100.0).contains(v))
        {
            return invalid("initial stats must lie within [0, 100]");
        }
        if self.notification_capacity == 0 {
            return invalid("notification_capacity must be >= 1");
        }
        if self.epoch.weekday() != Weekday::Mon {
            return invalid("epoch must fall on a Monday");
        }
        Ok(())
    }
}
