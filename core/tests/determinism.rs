//! Same initial state + same timed intents = same state sequence.

mod common;

use common::engine;
use dreamstory_core::{
    catalog::{ActivityId, RoomId},
    command::PlayerCommand,
    engine::SimEngine,
    event::SimEvent,
    types::RealMillis,
};

fn script() -> Vec<(RealMillis, PlayerCommand)> {
    use PlayerCommand::*;
    vec![
        (0,       Start),
        (2_500,   Perform { activity: ActivityId::Computer }),
        (4_000,   ChangeRoom { room: RoomId::Gym }),
        (4_100,   Perform { activity: ActivityId::Treadmill }),
        (6_000,   SetSpeed { speed: 8.0 }),
        (9_000,   TogglePause),
        (12_000,  TogglePause),
        (15_000,  Perform { activity: ActivityId::Treadmill }),
        (40_000,  Perform { activity: ActivityId::Treadmill }),
        (41_000,  ChangeRoom { room: RoomId::Kitchen }),
        (41_500,  Perform { activity: ActivityId::Table }),
        (60_000,  SetSpeed { speed: 0.5 }),
        (90_000,  Perform { activity: ActivityId::Exercise }),
    ]
}

fn run(engine: &mut SimEngine) -> (Vec<SimEvent>, Vec<String>) {
    let mut events = Vec::new();
    let mut snapshots = Vec::new();
    for (now, command) in script() {
        events.extend(engine.dispatch(command, now).expect("dispatch"));
        snapshots.push(serde_json::to_string(&engine.snapshot(now)).expect("serialize"));
    }
    events.extend(engine.pump(120_000));
    snapshots.push(serde_json::to_string(&engine.snapshot(120_000)).expect("serialize"));
    (events, snapshots)
}

#[test]
fn identical_scripts_produce_identical_runs() {
    let mut engine_a = engine();
    let mut engine_b = engine();

    let (events_a, snaps_a) = run(&mut engine_a);
    let (events_b, snaps_b) = run(&mut engine_b);

    assert_eq!(events_a.len(), events_b.len());
    for (i, (a, b)) in events_a.iter().zip(&events_b).enumerate() {
        assert_eq!(a, b, "event stream diverged at {i}");
    }
    for (i, (a, b)) in snaps_a.iter().zip(&snaps_b).enumerate() {
        assert_eq!(a, b, "snapshot diverged after step {i}");
    }
    assert_eq!(engine_a.state(), engine_b.state());
}

#[test]
fn stats_stay_in_bounds_throughout() {
    let mut engine = engine();
    for (now, command) in script() {
        engine.dispatch(command, now).expect("dispatch");
        assert!(engine.state().stats.in_bounds(), "out of range at {now}ms");
    }
    for now in (120_000..600_000).step_by(10_000) {
        engine.pump(now);
        assert!(engine.state().stats.in_bounds(), "out of range at {now}ms");
    }
}
