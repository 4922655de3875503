//! The single mutable simulation aggregate.
//!
//! Owned exclusively by `SimEngine`. Hosts read it through snapshots
//! and change it only by dispatching commands.

use crate::{
    catalog::{ActivityId, RoomId},
    clock::GameClock,
    config::SimConfig,
    cooldown::CooldownTable,
    notification::NotificationLog,
    stats::StatLedger,
    types::RealMillis,
};
use serde::{Deserialize, Serialize};

pub const WELCOME_MESSAGE: &str =
    "Welcome to Dream Story! Start your journey to better sleep.";

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SimulationState {
    pub stats:                StatLedger,
    pub current_room:         RoomId,
    pub clock:                GameClock,
    pub is_playing:           bool,
    /// Meaningful only while `is_playing`.
    pub is_paused:            bool,
    pub game_speed:           f64,
    pub cooldowns:            CooldownTable,
    /// Append-only; duplicates kept.
    pub completed_activities: Vec<ActivityId>,
    pub notifications:        NotificationLog,
    /// Cosmetic; no simulation effect.
    pub sound_enabled:        bool,
}

impl SimulationState {
    /// The deterministic starting snapshot. Also used verbatim on reset.
    pub fn initial(config: &SimConfig) -> Self {
        let mut notifications = NotificationLog::new(config.notification_capacity);
        notifications.push(WELCOME_MESSAGE);
        Self {
            stats:                StatLedger::new(&config.initial_stats),
            current_room:         config.initial_room,
            clock:                GameClock::new(config.epoch),
            is_playing:           false,
            is_paused:            false,
            game_speed:           1.0,
            cooldowns:            CooldownTable::new(),
            completed_activities: Vec::new(),
            notifications,
            sound_enabled:        true,
        }
    }

    /// Ticks fire iff this holds.
    pub fn is_running(&self) -> bool {
        self.is_playing && !self.is_paused
    }

    pub fn is_on_cooldown(&self, id: ActivityId, now: RealMillis) -> bool {
        self.cooldowns.is_active(id, now)
    }

    pub fn has_completed(&self, id: ActivityId) -> bool {
        self.completed_activities.contains(&id)
    }
}
