//! Task ID type and monotonic ID generation.
//!
//! IDs are Unix timestamps in milliseconds, so they sort by creation time and
//! stay compatible with previously persisted data. A bare timestamp collides
//! when two tasks are created within the same millisecond, so the generator
//! remembers every known ID and normally hands out something greater than
//! all of them.

use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::errors::CoreError;

/// Unique identifier of a task. Never reused.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, JsonSchema,
)]
#[serde(transparent)]
pub struct TaskId(i64);

impl TaskId {
    #[must_use]
    pub const fn new(raw: i64) -> Self {
        Self(raw)
    }

    #[must_use]
    pub const fn get(self) -> i64 {
        self.0
    }
}

impl fmt::Display for TaskId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for TaskId {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim()
            .parse::<i64>()
            .map(Self)
            .map_err(|_| CoreError::InvalidId(s.to_string()))
    }
}

/// Issues unique task IDs, increasing while there is room above the largest one.
///
/// Seed it with every ID already present in hydrated data (see
/// [`IdGenerator::observe`]) so IDs stay unique across restarts, including
/// when the wall clock moves backwards.
///
/// Once an ID of `i64::MAX` is known there is nothing left above it, and the
/// generator hands out the lowest positive ID not yet taken instead.
#[derive(Debug, Clone, Default)]
pub struct IdGenerator {
    last: i64,
    taken: BTreeSet<i64>,
}

impl IdGenerator {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            last: 0,
            taken: BTreeSet::new(),
        }
    }

    /// Build a generator that will only issue IDs above every ID in `ids`.
    #[must_use]
    pub fn seeded<I>(ids: I) -> Self
    where
        I: IntoIterator<Item = TaskId>,
    {
        let mut generator = Self::new();
        for id in ids {
            generator.observe(id);
        }
        generator
    }

    /// Record an ID that already exists so it is never issued again.
    pub fn observe(&mut self, id: TaskId) {
        self.last = self.last.max(id.0);
        self.taken.insert(id.0);
    }

    /// Issue the next ID for a task created at `now`.
    pub fn next_at(&mut self, now: DateTime<Utc>) -> TaskId {
        let id = match self.last.checked_add(1) {
            Some(next) => now.timestamp_millis().max(next),
            None => self.lowest_free(),
        };
        self.observe(TaskId(id));
        TaskId(id)
    }

    /// Issue the next ID using the current wall-clock time.
    pub fn next_id(&mut self) -> TaskId {
        self.next_at(Utc::now())
    }

    fn lowest_free(&self) -> i64 {
        let mut candidate = 1;
        for &id in self.taken.range(1..) {
            if id != candidate {
                break;
            }
            candidate += 1;
        }
        candidate
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use chrono::TimeZone;
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn id_follows_clock_when_ahead() {
        let now = Utc.timestamp_millis_opt(1_700_000_000_123).unwrap();
        let mut ids = IdGenerator::new();
        assert_eq!(ids.next_at(now), TaskId::new(1_700_000_000_123));
    }

    #[test]
    fn same_millisecond_gets_distinct_ids() {
        let now = Utc.timestamp_millis_opt(1_700_000_000_000).unwrap();
        let mut ids = IdGenerator::new();
        let a = ids.next_at(now);
        let b = ids.next_at(now);
        assert_eq!(b.get(), a.get() + 1);
    }

    #[test]
    fn clock_going_backwards_never_reuses() {
        let later = Utc.timestamp_millis_opt(2_000).unwrap();
        let earlier = Utc.timestamp_millis_opt(1_000).unwrap();
        let mut ids = IdGenerator::new();
        let a = ids.next_at(later);
        let b = ids.next_at(earlier);
        assert!(b > a);
    }

    #[test]
    fn seeded_generator_skips_observed_ids() {
        let mut ids = IdGenerator::seeded([TaskId::new(10), TaskId::new(5_000), TaskId::new(7)]);
        let now = Utc.timestamp_millis_opt(100).unwrap();
        assert_eq!(ids.next_at(now), TaskId::new(5_001));
    }

    #[test]
    fn exhausted_range_falls_back_to_lowest_free_id() {
        let mut ids = IdGenerator::seeded([TaskId::new(i64::MAX), TaskId::new(1), TaskId::new(3)]);
        let now = Utc.timestamp_millis_opt(1_700_000_000_000).unwrap();

        let issued: Vec<_> = (0..3).map(|_| ids.next_at(now)).collect();
        assert_eq!(issued, [TaskId::new(2), TaskId::new(4), TaskId::new(5)]);
    }

    #[test]
    fn rapid_generation_is_unique() {
        let mut ids = IdGenerator::new();
        let mut seen = HashSet::new();
        for _ in 0..1_000 {
            assert!(seen.insert(ids.next_id()));
        }
    }

    #[test]
    fn parse_task_id() {
        assert_eq!(" 42 ".parse::<TaskId>().unwrap(), TaskId::new(42));
        let err = "abc".parse::<TaskId>().unwrap_err();
        assert!(err.to_string().contains("abc"));
    }
}
