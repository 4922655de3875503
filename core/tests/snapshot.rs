//! Snapshots expose state plus display helpers.

mod common;

use chrono::Weekday;
use common::engine;
use dreamstory_core::{
    catalog::{ActivityId, RoomId},
    clock::TimeOfDay,
    command::PlayerCommand,
    scheduler::LoopState,
    state::WELCOME_MESSAGE,
    stats::StatTier,
};

#[test]
fn initial_snapshot() {
    let engine = engine();
    let snap = engine.snapshot(0);

    assert_eq!(snap.loop_state, LoopState::Stopped);
    assert_eq!(snap.formatted_time, "07:30");
    assert_eq!(snap.time_of_day, TimeOfDay::Morning);
    assert_eq!(snap.time_of_day_icon, "🌅");
    assert_eq!(snap.day_of_week, Weekday::Mon);
    assert_eq!(snap.day_name, "Monday");

    assert_eq!(snap.stats.energy.tier, StatTier::Excellent);
    assert_eq!(snap.stats.happiness.tier, StatTier::Good);
    assert_eq!(snap.stats.health.tier, StatTier::Good);
    assert_eq!(snap.stats.sleep_quality.tier, StatTier::Good);
    assert_eq!(snap.stats.health.rounded, 75);

    assert_eq!(snap.current_room, RoomId::Bedroom);
    assert_eq!(snap.room_name, "Bedroom");
    let ids: Vec<ActivityId> = snap.room_activities.iter().map(|a| a.id).collect();
    assert_eq!(
        ids,
        vec![
            ActivityId::Sleep,
            ActivityId::Computer,
            ActivityId::Wardrobe,
            ActivityId::BedroomMirror,
        ]
    );
    assert_eq!(snap.notifications, vec![WELCOME_MESSAGE.to_string()]);
    assert!(snap.active_cooldowns.is_empty());
}

#[test]
fn snapshot_marks_cooldowns_and_completions() {
    let mut engine = engine();
    engine.dispatch(PlayerCommand::Perform { activity: ActivityId::Sleep }, 1_000).unwrap();

    let snap = engine.snapshot(11_000);
    let sleep = snap
        .room_activities
        .iter()
        .find(|a| a.id == ActivityId::Sleep)
        .expect("sleep listed in bedroom");
    assert!(sleep.on_cooldown);
    assert!(sleep.completed);
    assert_eq!(sleep.time_of_day, Some(TimeOfDay::Night));

    let computer = snap.room_activities.iter().find(|a| a.id == ActivityId::Computer).unwrap();
    assert!(!computer.on_cooldown);
    assert!(!computer.completed);

    assert_eq!(snap.active_cooldowns.len(), 1);
    assert_eq!(snap.active_cooldowns[0].activity, ActivityId::Sleep);
    assert_eq!(snap.active_cooldowns[0].remaining_ms, 20_000);
    assert_eq!(snap.time_of_day, TimeOfDay::Afternoon);
    assert_eq!(snap.notifications[0], "A good night of restorative sleep (+10 happiness)");
}

#[test]
fn snapshot_serializes_with_wire_ids() {
    let mut engine = engine();
    engine.dispatch(PlayerCommand::ChangeRoom { room: RoomId::Gym }, 0).unwrap();

    let json = serde_json::to_string(&engine.snapshot(0)).unwrap();
    assert!(json.contains(r#""current_room":"gym""#), "{json}");
    assert!(json.contains(r#""id":"yoga-mat""#), "{json}");
    assert!(json.contains(r#""loop_state":"stopped""#), "{json}");
}
