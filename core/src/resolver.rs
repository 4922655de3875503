//! Activity resolver: turns a perform intent into a state transition.
//!
//! Order of checks:
//!   1. cooldown      → silent no-op (no notification)
//!   2. affordability → one notification, nothing else changes
//!   3. apply stats, arm cooldown, record completion, notify, advance clock
//!
//! Affordability compares current energy against `energy_cost` alone,
//! so an activity with a net energy gain can still be unaffordable.

use crate::{
    catalog::Activity,
    config::SimConfig,
    event::{RejectReason, SimEvent},
    state::SimulationState,
    types::RealMillis,
};

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ActivityOutcome {
    Performed { day_changed: bool, cooldown_until: RealMillis },
    OnCooldown { until: RealMillis },
    InsufficientEnergy { required: f64, available: f64 },
}

impl ActivityOutcome {
    pub fn is_performed(&self) -> bool {
        matches!(self, ActivityOutcome::Performed { .. })
    }
}

pub fn insufficient_energy_message(activity: &Activity) -> String {
    format!("Not enough energy for {}!", activity.name)
}

pub fn performed_message(activity: &Activity) -> String {
    format!("{} (+{} happiness)", activity.description, activity.happiness_gain)
}

/// Resolve one perform intent against `state` at real time `now`.
pub fn perform(
    state:    &mut SimulationState,
    activity: &Activity,
    config:   &SimConfig,
    now:      RealMillis,
    events:   &mut Vec<SimEvent>,
) -> ActivityOutcome {
    let id = activity.id;

    if state.cooldowns.is_active(id, now) {
        let until = state.cooldowns.expires_at(id).unwrap_or(now);
        log::debug!("at={now}ms resolver: {id} on cooldown until {until}ms");
        events.push(SimEvent::ActivityRejected {
            at: now,
            activity: id,
            reason: RejectReason::OnCooldown { until },
        });
        return ActivityOutcome::OnCooldown { until };
    }

    if !state.stats.can_afford(activity) {
        let available = state.stats.energy;
        log::debug!(
            "at={now}ms resolver: {id} needs {} energy, have {available:.2}",
            activity.energy_cost
        );
        state.notifications.push(insufficient_energy_message(activity));
        events.push(SimEvent::ActivityRejected {
            at: now,
            activity: id,
            reason: RejectReason::InsufficientEnergy {
                required: activity.energy_cost,
                available,
            },
        });
        return ActivityOutcome::InsufficientEnergy {
            required: activity.energy_cost,
            available,
        };
    }

    // Stats first, then the clock.
    state.stats.apply_activity(activity);
    state.cooldowns.arm(id, now, config.cooldown_ms);
    state.completed_activities.push(id);
    state.notifications.push(performed_message(activity));
    let day_changed = state.clock.advance(activity.duration);

    let cooldown_until = now.saturating_add(config.cooldown_ms);
    log::debug!(
        "at={now}ms resolver: performed {id} (+{} min) -> {} energy={:.2}",
        activity.duration,
        state.clock.formatted_time(),
        state.stats.energy
    );

    events.push(SimEvent::ActivityPerformed {
        at: now,
        activity: id,
        game_time: state.clock.game_time,
        cooldown_until,
    });
    if day_changed {
        events.push(SimEvent::DayChanged {
            game_time:   state.clock.game_time,
            day_of_week: state.clock.day_of_week,
        });
    }

    ActivityOutcome::Performed { day_changed, cooldown_until }
}
