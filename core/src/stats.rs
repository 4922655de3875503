//! Stat ledger: the four bounded resources.
//!
//! Every value stays within [STAT_MIN, STAT_MAX] after every update.

use crate::{
    catalog::Activity,
    config::{DecayRates, InitialStats},
    types::{STAT_MAX, STAT_MIN},
};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct StatLedger {
    pub energy:        f64,
    pub happiness:     f64,
    pub health:        f64,
    pub sleep_quality: f64,
}

impl StatLedger {
    pub fn new(initial: &InitialStats) -> Self {
        Self {
            energy:        clamp_stat(initial.energy),
            happiness:     clamp_stat(initial.happiness),
            health:        clamp_stat(initial.health),
            sleep_quality: clamp_stat(initial.sleep_quality),
        }
    }

    /// One tick of passive decay. Floors at 0; never raises a stat.
    pub fn apply_decay(&mut self, rates: &DecayRates) {
        self.energy        = (self.energy - rates.energy).max(STAT_MIN);
        self.happiness     = (self.happiness - rates.happiness).max(STAT_MIN);
        self.health        = (self.health - rates.health).max(STAT_MIN);
        self.sleep_quality = (self.sleep_quality - rates.sleep_quality).max(STAT_MIN);
    }

    /// Apply an activity's deltas as one transition.
    pub fn apply_activity(&mut self, activity: &Activity) {
        *self = Self {
            energy:        clamp_stat(self.energy - activity.energy_cost + activity.energy_gain),
            happiness:     clamp_stat(self.happiness + activity.happiness_gain),
            health:        clamp_stat(self.health + activity.health_gain),
            sleep_quality: clamp_stat(self.sleep_quality + activity.sleep_quality_gain),
        };
    }

    pub fn can_afford(&self, activity: &Activity) -> bool {
        self.energy >= activity.energy_cost
    }

    pub fn in_bounds(&self) -> bool {
        [self.energy, self.happiness, self.health, self.sleep_quality]
            .iter()
            .all(|v| (STAT_MIN..=STAT_MAX).contains(v))
    }
}

pub fn clamp_stat(value: f64) -> f64 {
    if value.is_nan() {
        return STAT_MIN;
    }
    value.clamp(STAT_MIN, STAT_MAX)
}

/// Presentation tier for a stat value. Carries no simulation meaning.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum StatTier {
    Excellent, // >= 80
    Good,      // >= 60
    Fair,      // >= 40
    Poor,
}

impl StatTier {
    pub fn of(value: f64) -> Self {
        if value >= 80.0 {
            StatTier::Excellent
        } else if value >= 60.0 {
            StatTier::Good
        } else if value >= 40.0 {
            StatTier::Fair
        } else {
            StatTier::Poor
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{ActivityCatalog, ActivityId};

    fn ledger(e: f64, h: f64, he: f64, s: f64) -> StatLedger {
        StatLedger { energy: e, happiness: h, health: he, sleep_quality: s }
    }

    #[test]
    fn decay_floors_at_zero() {
        let mut l = ledger(0.05, 0.0, 0.01, 0.1);
        l.apply_decay(&DecayRates::default());
        assert_eq!(l.energy, 0.0);
        assert_eq!(l.happiness, 0.0);
        assert_eq!(l.health, 0.0);
        assert!((l.sleep_quality - 0.07).abs() < 1e-9);
    }

    #[test]
    fn activity_clamps_both_ends() {
        let catalog = ActivityCatalog::standard();
        let videogame = catalog.get(ActivityId::Videogame).unwrap();

        // health -10 and sleep -15 from near-zero values
        let mut l = ledger(20.0, 95.0, 3.0, 5.0);
        l.apply_activity(videogame);
        assert_eq!(l.energy, 5.0);
        assert_eq!(l.happiness, 100.0);
        assert_eq!(l.health, 0.0);
        assert_eq!(l.sleep_quality, 0.0);
        assert!(l.in_bounds());
    }

    #[test]
    fn tiers_follow_thresholds() {
        assert_eq!(StatTier::of(100.0), StatTier::Excellent);
        assert_eq!(StatTier::of(80.0), StatTier::Excellent);
        assert_eq!(StatTier::of(79.9), StatTier::Good);
        assert_eq!(StatTier::of(60.0), StatTier::Good);
        assert_eq!(StatTier::of(40.0), StatTier::Fair);
        assert_eq!(StatTier::of(39.99), StatTier::Poor);
        assert_eq!(StatTier::of(0.0), StatTier::Poor);
    }
}
