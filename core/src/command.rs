use crate::catalog::{ActivityId, RoomId};
use serde::{Deserialize, Serialize};

/// All player-issued intents.
/// Variants are appended, never removed or reordered.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "cmd", rename_all = "snake_case")]
pub enum PlayerCommand {
    // ── Loop control ──────────────────────────────
    Start,
    TogglePause,
    Reset,
    SetSpeed { speed: f64 },

    // ── Player ────────────────────────────────────
    ChangeRoom { room: RoomId },
    Perform { activity: ActivityId },

    // ── Cosmetic ──────────────────────────────────
    SetSound { enabled: bool },
}

impl PlayerCommand {
    pub fn name(&self) -> &'static str {
        match self {
            PlayerCommand::Start           => "start",
            PlayerCommand::TogglePause     => "toggle_pause",
            PlayerCommand::Reset           => "reset",
            PlayerCommand::SetSpeed { .. } => "set_speed",
            PlayerCommand::ChangeRoom { .. } => "change_room",
            PlayerCommand::Perform { .. }  => "perform",
            PlayerCommand::SetSound { .. } => "set_sound",
        }
    }
}
