//! Outbound change feed.
//!
//! Every `dispatch` and `pump` on the engine returns the events it caused,
//! in the order they happened. Hosts may render from these or simply
//! re-read the snapshot.

use crate::{
    catalog::{ActivityId, RoomId},
    types::{GameMinutes, RealMillis},
};
use chrono::{NaiveDateTime, Weekday};
use serde::{Deserialize, Serialize};

/// Variants are appended, never removed or reordered.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum SimEvent {
    // ── Lifecycle ──────────────────────────────────
    Started {
        at: RealMillis,
    },
    Paused {
        at: RealMillis,
    },
    Resumed {
        at: RealMillis,
    },
    Reset {
        at: RealMillis,
    },
    SpeedChanged {
        at:    RealMillis,
        speed: f64,
    },
    SoundToggled {
        enabled: bool,
    },
    RoomChanged {
        from: RoomId,
        to:   RoomId,
    },

    // ── Game loop ──────────────────────────────────
    Ticked {
        at:        RealMillis,
        minutes:   GameMinutes,
        game_time: NaiveDateTime,
    },
    DayChanged {
        game_time:   NaiveDateTime,
        day_of_week: Weekday,
    },

    // ── Activities ─────────────────────────────────
    ActivityPerformed {
        at:             RealMillis,
        activity:       ActivityId,
        game_time:      NaiveDateTime,
        cooldown_until: RealMillis,
    },
    ActivityRejected {
        at:       RealMillis,
        activity: ActivityId,
        reason:   RejectReason,
    },
    CooldownExpired {
        at:       RealMillis,
        activity: ActivityId,
    },
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum RejectReason {
    OnCooldown { until: RealMillis },
    InsufficientEnergy { required: f64, available: f64 },
}

impl SimEvent {
    /// Stable name for logs and tooling.
    pub fn type_name(&self) -> &'static str {
        match self {
            SimEvent::Started { .. }           => "started",
            SimEvent::Paused { .. }            => "paused",
            SimEvent::Resumed { .. }           => "resumed",
            SimEvent::Reset { .. }             => "reset",
            SimEvent::SpeedChanged { .. }      => "speed_changed",
            SimEvent::SoundToggled { .. }      => "sound_toggled",
            SimEvent::RoomChanged { .. }       => "room_changed",
            SimEvent::Ticked { .. }            => "ticked",
            SimEvent::DayChanged { .. }        => "day_changed",
            SimEvent::ActivityPerformed { .. } => "activity_performed",
            SimEvent::ActivityRejected { .. }  => "activity_rejected",
            SimEvent::CooldownExpired { .. }   => "cooldown_expired",
        }
    }
}
