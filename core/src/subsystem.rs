//! Per-tick systems.
//!
//! RULE: Every system that runs on the game loop implements SimSubsystem.
//! The engine calls update() on each registered system in registration
//! order, once per tick. Order is fixed and documented in engine.rs.

use crate::{
    config::DecayRates,
    event::SimEvent,
    state::SimulationState,
    types::{GameMinutes, RealMillis},
};

/// What a single tick carries into every system.
#[derive(Debug, Clone, Copy)]
pub struct TickContext {
    /// Real time the tick was scheduled for.
    pub at:      RealMillis,
    /// Game minutes this tick covers (equal to the game speed).
    pub minutes: GameMinutes,
}

pub trait SimSubsystem: Send {
    /// Unique stable name for this system.
    fn name(&self) -> &'static str;

    /// Called once per tick by the engine.
    ///
    /// - `events_in`: events emitted by earlier systems this tick
    ///
    /// Returns new events to append to the tick's output.
    fn update(
        &mut self,
        ctx: &TickContext,
        state: &mut SimulationState,
        events_in: &[SimEvent],
    ) -> Vec<SimEvent>;
}

/// Advances game time by the tick's span.
pub struct ClockSubsystem;

impl SimSubsystem for ClockSubsystem {
    fn name(&self) -> &'static str { "clock" }

    fn update(
        &mut self,
        ctx: &TickContext,
        state: &mut SimulationState,
        _events_in: &[SimEvent],
    ) -> Vec<SimEvent> {
        let day_changed = state.clock.advance(ctx.minutes);

        let mut events = vec![SimEvent::Ticked {
            at:        ctx.at,
            minutes:   ctx.minutes,
            game_time: state.clock.game_time,
        }];
        if day_changed {
            events.push(SimEvent::DayChanged {
                game_time:   state.clock.game_time,
                day_of_week: state.clock.day_of_week,
            });
        }
        events
    }
}

/// Passive stat decay, one step per tick regardless of speed.
pub struct DecaySubsystem {
    rates: DecayRates,
}

impl DecaySubsystem {
    pub fn new(rates: DecayRates) -> Self {
        Self { rates }
    }
}

impl SimSubsystem for DecaySubsystem {
    fn name(&self) -> &'static str { "decay" }

    fn update(
        &mut self,
        ctx: &TickContext,
        state: &mut SimulationState,
        _events_in: &[SimEvent],
    ) -> Vec<SimEvent> {
        state.stats.apply_decay(&self.rates);
        log::trace!(
            "at={}ms decay: energy={:.2} happiness={:.2} health={:.2} sleep={:.2}",
            ctx.at,
            state.stats.energy,
            state.stats.happiness,
            state.stats.health,
            state.stats.sleep_quality
        );
        vec![]
    }
}
