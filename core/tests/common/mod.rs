#![allow(dead_code)]

use dreamstory_core::{
    command::PlayerCommand,
    config::SimConfig,
    engine::SimEngine,
    event::SimEvent,
    types::RealMillis,
};

pub const EPS: f64 = 1e-9;

pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

pub fn engine() -> SimEngine {
    init_logging();
    SimEngine::build_default().expect("default engine")
}

pub fn engine_with(config: SimConfig) -> SimEngine {
    init_logging();
    SimEngine::build(config).expect("engine with config")
}

pub fn send(engine: &mut SimEngine, command: PlayerCommand, now: RealMillis) -> Vec<SimEvent> {
    engine.dispatch(command, now).expect("dispatch")
}

pub fn tick_count(events: &[SimEvent]) -> usize {
    events.iter().filter(|e| matches!(e, SimEvent::Ticked { .. })).count()
}

pub fn day_changes(events: &[SimEvent]) -> usize {
    events.iter().filter(|e| matches!(e, SimEvent::DayChanged { .. })).count()
}

pub fn approx(a: f64, b: f64) -> bool {
    (a - b).abs() < EPS
}
