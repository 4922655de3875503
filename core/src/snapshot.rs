//! Read-only view of the simulation for hosts.
//!
//! A snapshot carries the full state plus the derived display helpers a
//! renderer needs (formatted time, time-of-day icon, stat tiers, the
//! current room's activity list). Nothing in here feeds back into the
//! simulation.

use crate::{
    catalog::{ActivityId, RoomId},
    clock::{day_name, TimeOfDay},
    engine::SimEngine,
    scheduler::LoopState,
    stats::StatTier,
    types::{GameMinutes, RealMillis},
};
use chrono::{NaiveDateTime, Weekday};
use serde::Serialize;

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct StatView {
    pub value:   f64,
    /// Whole-number value for display.
    pub rounded: i64,
    pub tier:    StatTier,
}

impl StatView {
    fn of(value: f64) -> Self {
        Self { value, rounded: value.round() as i64, tier: StatTier::of(value) }
    }
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct StatsView {
    pub energy:        StatView,
    pub happiness:     StatView,
    pub health:        StatView,
    pub sleep_quality: StatView,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ActivityView {
    pub id:                 ActivityId,
    pub name:               &'static str,
    pub icon:               &'static str,
    pub description:        &'static str,
    pub energy_cost:        f64,
    pub energy_gain:        f64,
    pub happiness_gain:     f64,
    pub health_gain:        f64,
    pub sleep_quality_gain: f64,
    pub duration:           GameMinutes,
    pub time_of_day:        Option<TimeOfDay>,
    pub on_cooldown:        bool,
    pub affordable:         bool,
    /// Performed at least once this session.
    pub completed:          bool,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct CooldownView {
    pub activity:     ActivityId,
    pub remaining_ms: RealMillis,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct SimSnapshot {
    pub at:                   RealMillis,
    pub loop_state:           LoopState,
    pub is_playing:           bool,
    pub is_paused:            bool,
    pub game_speed:           f64,
    pub sound_enabled:        bool,

    pub game_time:            NaiveDateTime,
    pub formatted_time:       String,
    pub time_of_day:          TimeOfDay,
    pub time_of_day_icon:     &'static str,
    pub day_of_week:          Weekday,
    pub day_name:             &'static str,

    pub stats:                StatsView,

    pub current_room:         RoomId,
    pub room_name:            &'static str,
    pub room_icon:            &'static str,
    pub room_activities:      Vec<ActivityView>,

    pub active_cooldowns:     Vec<CooldownView>,
    pub completed_activities: Vec<ActivityId>,
    /// Most recent first, limited to the configured display window.
    pub notifications:        Vec<String>,
}

impl SimSnapshot {
    pub fn capture(engine: &SimEngine, now: RealMillis) -> Self {
        let state = engine.state();
        let catalog = engine.catalog();
        let stats = &state.stats;
        let time_of_day = state.clock.time_of_day();
        let room = catalog.room(state.current_room);

        let room_activities = catalog
            .in_room(state.current_room)
            .map(|a| ActivityView {
                id:                 a.id,
                name:               a.name,
                icon:               a.icon,
                description:        a.description,
                energy_cost:        a.energy_cost,
                energy_gain:        a.energy_gain,
                happiness_gain:     a.happiness_gain,
                health_gain:        a.health_gain,
                sleep_quality_gain: a.sleep_quality_gain,
                duration:           a.duration,
                time_of_day:        a.time_of_day,
                on_cooldown:        state.is_on_cooldown(a.id, now),
                affordable:         stats.can_afford(a),
                completed:          state.has_completed(a.id),
            })
            .collect();

        let active_cooldowns = state
            .cooldowns
            .active_ids()
            .filter_map(|id| {
                let until = state.cooldowns.expires_at(id)?;
                (until > now).then(|| CooldownView {
                    activity:     id,
                    remaining_ms: until - now,
                })
            })
            .collect();

        Self {
            at:                   now,
            loop_state:           engine.loop_state(),
            is_playing:           state.is_playing,
            is_paused:            state.is_paused,
            game_speed:           state.game_speed,
            sound_enabled:        state.sound_enabled,

            game_time:            state.clock.game_time,
            formatted_time:       state.clock.formatted_time(),
            time_of_day,
            time_of_day_icon:     time_of_day.icon(),
            day_of_week:          state.clock.day_of_week,
            day_name:             day_name(state.clock.day_of_week),

            stats: StatsView {
                energy:        StatView::of(stats.energy),
                happiness:     StatView::of(stats.happiness),
                health:        StatView::of(stats.health),
                sleep_quality: StatView::of(stats.sleep_quality),
            },

            current_room:         state.current_room,
            room_name:            room.map_or("", |r| r.name),
            room_icon:            room.map_or("", |r| r.icon),
            room_activities,

            active_cooldowns,
            completed_activities: state.completed_activities.clone(),
            notifications:        state.notifications.recent(engine.config().notification_window),
        }
    }
}
