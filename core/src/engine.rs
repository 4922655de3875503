//! The simulation engine: the only place simulation state is mutated.
//!
//! Two sources of change exist: player commands (`dispatch`) and timers
//! (`pump`). Both run through `&mut self`, so every transition is atomic
//! with respect to every other.
//!
//! TICK ORDER (fixed, never reordered):
//!   1. Clock subsystem: advance game time by `game_speed` minutes
//!   2. Decay subsystem: passive stat decay
//!
//! TIMER ORDER: due work fires in deadline order. On equal deadlines
//! cooldown expiries fire before the loop tick.

use crate::{
    catalog::{ActivityCatalog, ActivityId, RoomId},
    command::PlayerCommand,
    config::SimConfig,
    error::{SimError, SimResult},
    event::SimEvent,
    resolver::{self, ActivityOutcome},
    scheduler::{LoopState, Scheduler},
    snapshot::SimSnapshot,
    state::SimulationState,
    subsystem::{ClockSubsystem, DecaySubsystem, SimSubsystem, TickContext},
    types::RealMillis,
};

pub struct SimEngine {
    config:     SimConfig,
    catalog:    ActivityCatalog,
    state:      SimulationState,
    scheduler:  Scheduler,
    subsystems: Vec<Box<dyn SimSubsystem>>,
    /// Latest real time seen; later calls may not go below it.
    last_now:   RealMillis,
}

impl SimEngine {
    pub fn new(config: SimConfig) -> SimResult<Self> {
        config.validate()?;
        let state = SimulationState::initial(&config);
        let scheduler = Scheduler::new(config.base_tick_ms, state.game_speed);
        Ok(Self {
            catalog: ActivityCatalog::standard(),
            state,
            scheduler,
            subsystems: Vec::new(),
            last_now: 0,
            config,
        })
    }

    /// Build a fully wired engine with all tick subsystems registered.
    pub fn build(config: SimConfig) -> SimResult<Self> {
        let decay = config.decay.clone();
        let mut engine = SimEngine::new(config)?;
        engine.register(Box::new(ClockSubsystem));
        engine.register(Box::new(DecaySubsystem::new(decay)));
        Ok(engine)
    }

    /// Engine with default config. Used by tests and the runner.
    pub fn build_default() -> SimResult<Self> {
        Self::build(SimConfig::default())
    }

    /// Register a tick subsystem. Call in the documented order.
    pub fn register(&mut self, subsystem: Box<dyn SimSubsystem>) {
        self.subsystems.push(subsystem);
    }

    // ── Read side ──────────────────────────────────────────────

    pub fn state(&self) -> &SimulationState {
        &self.state
    }

    pub fn catalog(&self) -> &ActivityCatalog {
        &self.catalog
    }

    pub fn config(&self) -> &SimConfig {
        &self.config
    }

    pub fn loop_state(&self) -> LoopState {
        self.scheduler.state()
    }

    pub fn tick_period_ms(&self) -> RealMillis {
        self.scheduler.period_ms()
    }

    /// Earliest pending timer (tick or cooldown expiry), if any.
    pub fn next_deadline(&self) -> Option<RealMillis> {
        match (self.scheduler.next_tick_at(), self.state.cooldowns.next_expiry()) {
            (Some(a), Some(b)) => Some(a.min(b)),
            (a, b) => a.or(b),
        }
    }

    pub fn snapshot(&self, now: RealMillis) -> SimSnapshot {
        SimSnapshot::capture(self, now.max(self.last_now))
    }

    // ── Write side ─────────────────────────────────────────────

    /// Apply one player command at real time `now`.
    /// Timers already due at `now` fire first. A command that fails
    /// validation is rejected before anything fires, so an `Err` always
    /// means no state changed.
    pub fn dispatch(&mut self, command: PlayerCommand, now: RealMillis) -> SimResult<Vec<SimEvent>> {
        if let PlayerCommand::SetSpeed { speed } = command {
            validate_speed(speed)?;
        }
        let mut events = self.pump(now);
        let now = self.last_now;
        log::debug!("at={now}ms command: {}", command.name());

        match command {
            PlayerCommand::Start               => self.start(now, &mut events),
            PlayerCommand::TogglePause         => self.toggle_pause(now, &mut events),
            PlayerCommand::Reset               => self.reset(now, &mut events),
            PlayerCommand::SetSpeed { speed }  => self.set_speed(speed, now, &mut events),
            PlayerCommand::ChangeRoom { room } => self.change_room(room, &mut events),
            PlayerCommand::Perform { activity } => {
                self.perform(activity, now, &mut events);
            }
            PlayerCommand::SetSound { enabled } => {
                self.state.sound_enabled = enabled;
                events.push(SimEvent::SoundToggled { enabled });
            }
        }
        Ok(events)
    }

    /// Perform an activity and report how it resolved.
    pub fn perform_activity(
        &mut self,
        activity: ActivityId,
        now: RealMillis,
    ) -> (ActivityOutcome, Vec<SimEvent>) {
        let mut events = self.pump(now);
        let outcome = self.perform(activity, self.last_now, &mut events);
        (outcome, events)
    }

    /// Fire every timer due at or before `now`, in deadline order.
    pub fn pump(&mut self, now: RealMillis) -> Vec<SimEvent> {
        let now = self.observe(now);
        let mut events = Vec::new();

        loop {
            let expiry = self.state.cooldowns.next_expiry().filter(|&at| at <= now);
            let tick = self.scheduler.next_tick_at().filter(|&at| at <= now);

            match (expiry, tick) {
                (None, None) => break,
                (Some(e), Some(t)) if t < e => self.fire_tick(now, &mut events),
                (Some(e), _) => {
                    for (activity, at) in self.state.cooldowns.expire_due(e) {
                        let event = SimEvent::CooldownExpired { at, activity };
                        log::debug!("at={at}ms cooldown: {} {activity}", event.type_name());
                        events.push(event);
                    }
                }
                (None, Some(_)) => self.fire_tick(now, &mut events),
            }
        }
        events
    }

    /// Fast-forward `n` loop ticks on a synthetic clock, firing cooldown
    /// expiries along the way. No effect unless the loop is running.
    pub fn run_ticks(&mut self, n: u64) -> Vec<SimEvent> {
        let mut events = Vec::new();
        for _ in 0..n {
            let Some(due) = self.scheduler.next_tick_at() else {
                break;
            };
            events.extend(self.pump(due));
        }
        events
    }

    // ── Transitions ────────────────────────────────────────────

    fn start(&mut self, now: RealMillis, events: &mut Vec<SimEvent>) {
        if self.scheduler.start(now) {
            self.state.is_playing = true;
            self.state.is_paused = false;
            log::info!("at={now}ms loop started (period {}ms)", self.scheduler.period_ms());
            events.push(SimEvent::Started { at: now });
        }
    }

    fn toggle_pause(&mut self, now: RealMillis, events: &mut Vec<SimEvent>) {
        match self.scheduler.toggle_pause(now) {
            LoopState::Paused => {
                self.state.is_paused = true;
                log::info!("at={now}ms loop paused");
                events.push(SimEvent::Paused { at: now });
            }
            LoopState::Running => {
                self.state.is_paused = false;
                log::info!("at={now}ms loop resumed");
                events.push(SimEvent::Resumed { at: now });
            }
            LoopState::Stopped => {
                log::debug!("at={now}ms pause ignored: loop not started");
            }
        }
    }

    fn reset(&mut self, now: RealMillis, events: &mut Vec<SimEvent>) {
        self.scheduler.stop();
        self.state = SimulationState::initial(&self.config);
        self.scheduler.set_speed(self.state.game_speed, now);
        log::info!("at={now}ms simulation reset");
        events.push(SimEvent::Reset { at: now });
    }

    /// `speed` must already have passed `validate_speed`.
    fn set_speed(&mut self, speed: f64, now: RealMillis, events: &mut Vec<SimEvent>) {
        self.state.game_speed = speed;
        self.scheduler.set_speed(speed, now);
        log::info!(
            "at={now}ms speed set to {speed}x (period {}ms)",
            self.scheduler.period_ms()
        );
        events.push(SimEvent::SpeedChanged { at: now, speed });
    }

    fn change_room(&mut self, room: RoomId, events: &mut Vec<SimEvent>) {
        let from = self.state.current_room;
        if from == room {
            return;
        }
        self.state.current_room = room;
        log::debug!("room: {from} -> {room}");
        events.push(SimEvent::RoomChanged { from, to: room });
    }

    fn perform(
        &mut self,
        id: ActivityId,
        now: RealMillis,
        events: &mut Vec<SimEvent>,
    ) -> ActivityOutcome {
        let activity = self.catalog.activity(id);
        resolver::perform(&mut self.state, activity, &self.config, now, events)
    }

    fn fire_tick(&mut self, now: RealMillis, events: &mut Vec<SimEvent>) {
        if let Some(at) = self.scheduler.take_due(now) {
            events.extend(self.run_tick(at));
        }
    }

    fn run_tick(&mut self, at: RealMillis) -> Vec<SimEvent> {
        let ctx = TickContext { at, minutes: self.state.game_speed };
        let mut tick_events: Vec<SimEvent> = Vec::new();
        for subsystem in &mut self.subsystems {
            let new_events = subsystem.update(&ctx, &mut self.state, &tick_events);
            for event in &new_events {
                log::trace!("at={at}ms {}: {}", subsystem.name(), event.type_name());
            }
            tick_events.extend(new_events);
        }
        tick_events
    }

    /// Clamp `now` so real time never runs backwards inside the engine.
    fn observe(&mut self, now: RealMillis) -> RealMillis {
        if now < self.last_now {
            log::warn!("real time went backwards ({now}ms < {}ms); holding", self.last_now);
        } else {
            self.last_now = now;
        }
        self.last_now
    }
}

fn validate_speed(speed: f64) -> SimResult<()> {
    if speed.is_finite() && speed > 0.0 {
        Ok(())
    } else {
        Err(SimError::InvalidSpeed { speed })
    }
}
