//! The authoritative task list and its derived views.
//!
//! `TaskStore` is the only owner of task state. Callers hold an instance and
//! pass it by reference; there is no global. Every successful mutation
//! re-persists the entire collection through the gateway. No-op intents
//! (blank text, unknown IDs) leave both memory and storage untouched.

use chrono::{DateTime, Utc};

use tasklet_core::entities::Task;
use tasklet_core::enums::{Filter, Theme};
use tasklet_core::ids::{IdGenerator, TaskId};
use tasklet_core::responses::{Counts, Snapshot};

use crate::error::StoreError;
use crate::gateway::PersistenceGateway;
use crate::medium::KeyValueStore;

/// Owns tasks, the current filter and the theme preference.
///
/// When a storage write fails the in-memory change has already been applied;
/// the error is returned so the caller can report it, and the next successful
/// write persists the full collection again.
#[derive(Debug)]
pub struct TaskStore<S> {
    gateway: PersistenceGateway<S>,
    tasks: Vec<Task>,
    ids: IdGenerator,
    filter: Filter,
    theme: Theme,
}

impl<S: KeyValueStore> TaskStore<S> {
    /// Hydrate a store from whatever the gateway has persisted.
    ///
    /// The filter always starts at [`Filter::All`].
    #[must_use]
    pub fn open(gateway: PersistenceGateway<S>) -> Self {
        let tasks = gateway.load_tasks();
        let theme = gateway.load_theme();
        let ids = IdGenerator::seeded(tasks.iter().map(|task| task.id));
        tracing::debug!(tasks = tasks.len(), %theme, "task store hydrated");
        Self {
            gateway,
            tasks,
            ids,
            filter: Filter::default(),
            theme,
        }
    }

    /// Start with a filter other than [`Filter::All`].
    #[must_use]
    pub const fn with_filter(mut self, filter: Filter) -> Self {
        self.filter = filter;
        self
    }

    /// Access the persistence gateway.
    #[must_use]
    pub const fn gateway(&self) -> &PersistenceGateway<S> {
        &self.gateway
    }

    // -----------------------------------------------------------------------
    // Intents
    // -----------------------------------------------------------------------

    /// Append a new task built from `text`.
    ///
    /// Returns `Ok(None)` without touching anything when `text` is blank.
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if persisting the collection fails.
    pub fn add_task(&mut self, text: &str) -> Result<Option<Task>, StoreError> {
        self.add_task_at(text, Utc::now())
    }

    fn add_task_at(&mut self, text: &str, now: DateTime<Utc>) -> Result<Option<Task>, StoreError> {
        if text.trim().is_empty() {
            tracing::debug!("ignoring blank task text");
            return Ok(None);
        }
        let id = self.ids.next_at(now);
        let Some(task) = Task::new(id, text, now) else {
            return Ok(None);
        };
        self.tasks.push(task.clone());
        tracing::debug!(%id, "task added");
        self.persist()?;
        Ok(Some(task))
    }

    /// Remove the task with `id`. Returns whether anything was removed.
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if persisting the collection fails.
    pub fn delete_task(&mut self, id: TaskId) -> Result<bool, StoreError> {
        let Some(index) = self.position(id) else {
            tracing::debug!(%id, "delete ignored: no such task");
            return Ok(false);
        };
        self.tasks.remove(index);
        tracing::debug!(%id, "task deleted");
        self.persist()?;
        Ok(true)
    }

    /// Flip completion of the task with `id`, returning its new state.
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if persisting the collection fails.
    pub fn toggle_task(&mut self, id: TaskId) -> Result<Option<Task>, StoreError> {
        let Some(index) = self.position(id) else {
            tracing::debug!(%id, "toggle ignored: no such task");
            return Ok(None);
        };
        self.tasks[index].toggle();
        let task = self.tasks[index].clone();
        tracing::debug!(%id, completed = task.completed, "task toggled");
        self.persist()?;
        Ok(Some(task))
    }

    /// Change the current view filter. Not persisted.
    pub const fn set_filter(&mut self, filter: Filter) {
        self.filter = filter;
    }

    /// Switch between light and dark, persisting the new preference.
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if persisting the theme fails.
    pub fn toggle_theme(&mut self) -> Result<Theme, StoreError> {
        self.theme = self.theme.toggled();
        self.gateway.save_theme(self.theme)?;
        Ok(self.theme)
    }

    // -----------------------------------------------------------------------
    // Queries
    // -----------------------------------------------------------------------

    /// All tasks in insertion order.
    #[must_use]
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    #[must_use]
    pub fn get(&self, id: TaskId) -> Option<&Task> {
        self.tasks.iter().find(|task| task.id == id)
    }

    /// Tasks visible under `filter`, in insertion order. Computed on demand.
    #[must_use]
    pub fn filtered_tasks(&self, filter: Filter) -> Vec<&Task> {
        self.tasks.iter().filter(|task| filter.matches(task)).collect()
    }

    #[must_use]
    pub fn counts(&self) -> Counts {
        Counts::tally(&self.tasks)
    }

    #[must_use]
    pub const fn filter(&self) -> Filter {
        self.filter
    }

    #[must_use]
    pub const fn theme(&self) -> Theme {
        self.theme
    }

    /// The current view: filter, theme, visible tasks and counts.
    #[must_use]
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            filter: self.filter,
            theme: self.theme,
            tasks: self
                .filtered_tasks(self.filter)
                .into_iter()
                .cloned()
                .collect(),
            counts: self.counts(),
        }
    }

    fn position(&self, id: TaskId) -> Option<usize> {
        self.tasks.iter().position(|task| task.id == id)
    }

    fn persist(&mut self) -> Result<(), StoreError> {
        self.gateway.save_tasks(&self.tasks)
    }
}
