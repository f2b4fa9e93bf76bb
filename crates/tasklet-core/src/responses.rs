//! Views handed to the rendering layer.
//!
//! The store never pushes updates. After every intent the renderer pulls a
//! fresh [`Snapshot`] (or just [`Counts`]) and redraws from it.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::entities::Task;
use crate::enums::{Filter, Theme};
use crate::ids::TaskId;

/// Derived task statistics. `active + completed == total` always holds.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct Counts {
    pub total: usize,
    pub active: usize,
    pub completed: usize,
}

impl Counts {
    /// Count a sequence of tasks.
    #[must_use]
    pub fn tally<'a, I>(tasks: I) -> Self
    where
        I: IntoIterator<Item = &'a Task>,
    {
        tasks.into_iter().fold(Self::default(), |mut counts, task| {
            counts.total += 1;
            if task.completed {
                counts.completed += 1;
            } else {
                counts.active += 1;
            }
            counts
        })
    }
}

/// Everything the rendering layer needs after an intent.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct Snapshot {
    pub filter: Filter,
    pub theme: Theme,
    /// Tasks visible under `filter`, in insertion order.
    pub tasks: Vec<Task>,
    /// Counts over the whole collection, independent of `filter`.
    pub counts: Counts,
}

/// Response from `tasklet delete`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct DeleteResponse {
    pub id: TaskId,
    /// `false` when no task had this ID.
    pub deleted: bool,
}

/// Response from `tasklet theme`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct ThemeResponse {
    pub theme: Theme,
}

#[cfg(test)]
mod tests {
    use chrono::Utc;
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn tally_splits_active_and_completed() {
        let mut done = Task::new(TaskId::new(1), "a", Utc::now()).unwrap();
        done.toggle();
        let open = Task::new(TaskId::new(2), "b", Utc::now()).unwrap();

        let counts = Counts::tally([&done, &open]);
        assert_eq!(
            counts,
            Counts {
                total: 2,
                active: 1,
                completed: 1
            }
        );
    }

    #[test]
    fn tally_of_nothing_is_zero() {
        assert_eq!(Counts::tally(std::iter::empty::<&Task>()), Counts::default());
    }
}
