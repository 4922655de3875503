//! Game clock: owns in-game date/time and the derived day of week.
//!
//! Game time only moves forward. Day of week is never set directly: it is
//! recomputed from whole calendar days elapsed since the epoch date each
//! time a day boundary is crossed.

use crate::types::GameMinutes;
use chrono::{Duration, NaiveDateTime, Timelike, Weekday};
use serde::{Deserialize, Serialize};

/// Monday-first, indexed by elapsed days mod 7.
pub const WEEK: [Weekday; 7] = [
    Weekday::Mon,
    Weekday::Tue,
    Weekday::Wed,
    Weekday::Thu,
    Weekday::Fri,
    Weekday::Sat,
    Weekday::Sun,
];

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GameClock {
    epoch:           NaiveDateTime,
    pub game_time:   NaiveDateTime,
    pub day_of_week: Weekday,
}

impl GameClock {
    /// A clock sitting at `epoch`, which must be a Monday.
    pub fn new(epoch: NaiveDateTime) -> Self {
        Self {
            epoch,
            game_time:   epoch,
            day_of_week: Weekday::Mon,
        }
    }

    /// Advance game time by `minutes`. Returns true if a day boundary was crossed.
    /// Negative spans are ignored.
    pub fn advance(&mut self, minutes: GameMinutes) -> bool {
        if !(minutes.is_finite() && minutes > 0.0) {
            return false;
        }
        let prev = self.game_time;
        let delta = Duration::milliseconds((minutes * 60_000.0).round() as i64);
        let Some(next) = prev.checked_add_signed(delta) else {
            log::warn!("game time overflow advancing {minutes} minutes from {prev}");
            return false;
        };
        self.game_time = next;

        // The hour check catches a 23:xx -> 00:xx wrap even if dates compare equal.
        let day_changed =
            next.date() != prev.date() || (next.hour() == 0 && prev.hour() == 23);
        if day_changed {
            self.day_of_week = self.derived_day_of_week();
            log::debug!("day changed: {} -> {:?}", next.date(), self.day_of_week);
        }
        day_changed
    }

    /// Whole calendar days since the epoch date. Counted from the epoch's
    /// midnight, not its time of day, so the weekday flips exactly at 00:00.
    pub fn elapsed_days(&self) -> i64 {
        (self.game_time.date() - self.epoch.date()).num_days()
    }

    pub fn derived_day_of_week(&self) -> Weekday {
        WEEK[self.elapsed_days().rem_euclid(7) as usize]
    }

    pub fn epoch(&self) -> NaiveDateTime {
        self.epoch
    }

    /// "HH:MM", 24-hour.
    pub fn formatted_time(&self) -> String {
        self.game_time.format("%H:%M").to_string()
    }

    pub fn time_of_day(&self) -> TimeOfDay {
        TimeOfDay::at_hour(self.game_time.hour())
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum TimeOfDay {
    Morning,   // 06:00–11:59
    Afternoon, // 12:00–17:59
    Evening,   // 18:00–21:59
    Night,     // 22:00–05:59
    Any,
}

impl TimeOfDay {
    pub fn at_hour(hour: u32) -> Self {
        match hour {
            6..=11  => TimeOfDay::Morning,
            12..=17 => TimeOfDay::Afternoon,
            18..=21 => TimeOfDay::Evening,
            _       => TimeOfDay::Night,
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            TimeOfDay::Morning   => "🌅",
            TimeOfDay::Afternoon => "☀️",
            TimeOfDay::Evening   => "🌆",
            TimeOfDay::Night | TimeOfDay::Any => "🌙",
        }
    }
}

pub fn day_name(day: Weekday) -> &'static str {
    match day {
        Weekday::Mon => "Monday",
        Weekday::Tue => "Tuesday",
        Weekday::Wed => "Wednesday",
        Weekday::Thu => "Thursday",
        Weekday::Fri => "Friday",
        Weekday::Sat => "Saturday",
        Weekday::Sun => "Sunday",
    }
}
