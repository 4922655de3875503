//! Activity cooldowns as an explicit expiry table.
//!
//! Each entry maps an activity to the real-time instant its cooldown ends.
//! An activity with a live entry cannot be performed, so an entry is never
//! re-armed before it expires; the next perform after expiry arms a fresh one.

use crate::{catalog::ActivityId, types::RealMillis};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct CooldownTable {
    expiries: BTreeMap<ActivityId, RealMillis>,
}

impl CooldownTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a cooldown for `id` ending at `now + duration_ms`.
    pub fn arm(&mut self, id: ActivityId, now: RealMillis, duration_ms: RealMillis) {
        self.expiries.insert(id, now.saturating_add(duration_ms));
    }

    /// True while `id` has an entry whose deadline is still in the future.
    pub fn is_active(&self, id: ActivityId, now: RealMillis) -> bool {
        self.expiries.get(&id).is_some_and(|&at| at > now)
    }

    pub fn expires_at(&self, id: ActivityId) -> Option<RealMillis> {
        self.expiries.get(&id).copied()
    }

    /// Earliest pending deadline, if any.
    pub fn next_expiry(&self) -> Option<RealMillis> {
        self.expiries.values().min().copied()
    }

    /// Remove and return every entry due at or before `now`, earliest first.
    pub fn expire_due(&mut self, now: RealMillis) -> Vec<(ActivityId, RealMillis)> {
        let mut due: Vec<(ActivityId, RealMillis)> = self
            .expiries
            .iter()
            .filter(|&(_, &at)| at <= now)
            .map(|(&id, &at)| (id, at))
            .collect();
        due.sort_by_key(|&(id, at)| (at, id));
        for (id, _) in &due {
            self.expiries.remove(id);
        }
        due
    }

    /// Ids currently holding an entry, in id order.
    pub fn active_ids(&self) -> impl Iterator<Item = ActivityId> + '_ {
        self.expiries.keys().copied()
    }

    pub fn len(&self) -> usize {
        self.expiries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.expiries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn entry_is_active_until_deadline() {
        let mut t = CooldownTable::new();
        t.arm(ActivityId::Sleep, 1_000, 30_000);

        assert!(t.is_active(ActivityId::Sleep, 1_000));
        assert!(t.is_active(ActivityId::Sleep, 30_999));
        assert!(!t.is_active(ActivityId::Sleep, 31_000));
        assert!(!t.is_active(ActivityId::Tv, 1_000));
    }

    #[test]
    fn expire_due_returns_in_deadline_order() {
        let mut t = CooldownTable::new();
        t.arm(ActivityId::Water, 5_000, 30_000);
        t.arm(ActivityId::Sleep, 0, 30_000);
        t.arm(ActivityId::Tv, 20_000, 30_000);

        let due = t.expire_due(35_000);
        assert_eq!(due, vec![(ActivityId::Sleep, 30_000), (ActivityId::Water, 35_000)]);
        assert_eq!(t.len(), 1);
        assert_eq!(t.next_expiry(), Some(50_000));
    }
}
