//! Game clock: day boundaries, day-of-week derivation, display helpers.

use chrono::{Duration, Timelike, Weekday};
use dreamstory_core::clock::{day_name, GameClock, TimeOfDay, WEEK};
use dreamstory_core::config::default_epoch;

fn clock() -> GameClock {
    GameClock::new(default_epoch())
}

#[test]
fn epoch_is_monday_morning() {
    let c = clock();
    assert_eq!(c.day_of_week, Weekday::Mon);
    assert_eq!(c.formatted_time(), "07:30");
    assert_eq!(c.elapsed_days(), 0);
    assert_eq!(day_name(c.day_of_week), "Monday");
}

#[test]
fn late_evening_to_just_after_midnight() {
    let mut c = clock();
    assert!(!c.advance(975.0), "07:30 -> 23:45 stays on Monday");
    assert_eq!(c.formatted_time(), "23:45");

    assert!(c.advance(30.0));
    assert_eq!(c.formatted_time(), "00:15");
    assert_eq!(c.day_of_week, Weekday::Tue);
}

#[test]
fn multi_day_jump_lands_on_right_weekday() {
    let mut c = clock();
    assert!(c.advance(3.0 * 24.0 * 60.0));
    assert_eq!(c.day_of_week, Weekday::Thu);

    assert!(c.advance(4.0 * 24.0 * 60.0));
    assert_eq!(c.elapsed_days(), 7);
    assert_eq!(c.day_of_week, Weekday::Mon, "a full week wraps back to Monday");
}

#[test]
fn day_of_week_always_matches_elapsed_days() {
    let mut c = clock();
    let steps = [1.0, 45.0, 480.0, 2.0, 90.0, 1440.0, 17.5, 600.0, 5.0, 3000.0];
    let mut prev = c.game_time;

    for round in 0..40 {
        let minutes = steps[round % steps.len()];
        c.advance(minutes);

        assert!(c.game_time >= prev, "game time went backwards");
        assert!(c.game_time >= c.epoch());
        assert_eq!(
            c.day_of_week,
            WEEK[(c.elapsed_days() % 7) as usize],
            "round {round}: {} is not {:?}",
            c.game_time,
            c.day_of_week
        );
        prev = c.game_time;
    }
}

#[test]
fn invalid_spans_are_ignored() {
    let mut c = clock();
    let start = c.game_time;
    assert!(!c.advance(-30.0));
    assert!(!c.advance(f64::NAN));
    assert!(!c.advance(0.0));
    assert_eq!(c.game_time, start);
}

#[test]
fn fractional_minutes_advance_seconds() {
    let mut c = clock();
    c.advance(0.5);
    assert_eq!(c.game_time - c.epoch(), Duration::seconds(30));
    assert_eq!(c.game_time.second(), 30);
    assert_eq!(c.formatted_time(), "07:30");
}

#[test]
fn time_of_day_boundaries() {
    assert_eq!(TimeOfDay::at_hour(5), TimeOfDay::Night);
    assert_eq!(TimeOfDay::at_hour(6), TimeOfDay::Morning);
    assert_eq!(TimeOfDay::at_hour(11), TimeOfDay::Morning);
    assert_eq!(TimeOfDay::at_hour(12), TimeOfDay::Afternoon);
    assert_eq!(TimeOfDay::at_hour(18), TimeOfDay::Evening);
    assert_eq!(TimeOfDay::at_hour(21), TimeOfDay::Evening);
    assert_eq!(TimeOfDay::at_hour(22), TimeOfDay::Night);
    assert_eq!(TimeOfDay::at_hour(0), TimeOfDay::Night);

    let mut c = clock();
    assert_eq!(c.time_of_day().icon(), "🌅");
    c.advance(480.0);
    assert_eq!(c.time_of_day(), TimeOfDay::Afternoon);
    assert_eq!(c.time_of_day().icon(), "☀️");
}
