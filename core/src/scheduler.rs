//! Game loop scheduler: Stopped / Running / Paused and the tick timer.
//!
//! The scheduler owns the only recurring timer. It never reads a clock:
//! callers pass real time in, and `take_due` hands back each tick whose
//! deadline has passed. Leaving Running drops the pending deadline, so a
//! stale tick can never fire against a replaced state.

use crate::types::RealMillis;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum LoopState {
    Stopped,
    Running,
    Paused,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Scheduler {
    state:        LoopState,
    base_tick_ms: f64,
    period_ms:    RealMillis,
    next_tick_at: Option<RealMillis>,
}

/// Tick period in whole milliseconds at `speed`; never below 1ms.
pub fn tick_period_ms(base_tick_ms: f64, speed: f64) -> RealMillis {
    (base_tick_ms / speed).round().max(1.0) as RealMillis
}

impl Scheduler {
    pub fn new(base_tick_ms: f64, speed: f64) -> Self {
        Self {
            state: LoopState::Stopped,
            base_tick_ms,
            period_ms: tick_period_ms(base_tick_ms, speed),
            next_tick_at: None,
        }
    }

    pub fn state(&self) -> LoopState {
        self.state
    }

    pub fn period_ms(&self) -> RealMillis {
        self.period_ms
    }

    pub fn next_tick_at(&self) -> Option<RealMillis> {
        self.next_tick_at
    }

    /// Stopped or Paused → Running. Returns false if already running.
    pub fn start(&mut self, now: RealMillis) -> bool {
        if self.state == LoopState::Running {
            return false;
        }
        self.enter_running(now);
        true
    }

    /// Running ↔ Paused. No effect while Stopped; returns the new state.
    pub fn toggle_pause(&mut self, now: RealMillis) -> LoopState {
        match self.state {
            LoopState::Running => {
                self.state = LoopState::Paused;
                self.next_tick_at = None;
            }
            LoopState::Paused  => self.enter_running(now),
            LoopState::Stopped => {}
        }
        self.state
    }

    /// Any state → Stopped, cancelling the pending tick.
    pub fn stop(&mut self) {
        self.state = LoopState::Stopped;
        self.next_tick_at = None;
    }

    /// Change the period. A running timer is torn down and restarted at `now`.
    pub fn set_speed(&mut self, speed: f64, now: RealMillis) {
        self.period_ms = tick_period_ms(self.base_tick_ms, speed);
        if self.state == LoopState::Running {
            self.next_tick_at = Some(now.saturating_add(self.period_ms));
        }
    }

    /// If a tick is due at or before `now`, consume it, schedule the next
    /// one a period later and return the consumed deadline.
    pub fn take_due(&mut self, now: RealMillis) -> Option<RealMillis> {
        let due = self.next_tick_at.filter(|&at| at <= now)?;
        self.next_tick_at = Some(due.saturating_add(self.period_ms));
        Some(due)
    }

    fn enter_running(&mut self, now: RealMillis) {
        self.state = LoopState::Running;
        self.next_tick_at = Some(now.saturating_add(self.period_ms));
    }
}
