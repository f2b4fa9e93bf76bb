//! Persistence gateway: tasks and theme on a key-value medium.
//!
//! Two independent keys:
//! - [`TASKS_KEY`] holds the whole task collection as a JSON array
//!   (`id`, `text`, `completed`, `createdAt` in RFC 3339).
//! - [`THEME_KEY`] holds the literal `"dark"` or `"light"`.
//!
//! Loads never fail. Absent, unreadable or malformed data degrades to an empty
//! collection and the light theme, with a warning in the log.

use std::collections::HashSet;

use tasklet_core::entities::Task;
use tasklet_core::enums::Theme;

use crate::error::StoreError;
use crate::medium::KeyValueStore;

/// Key holding the serialized task list.
pub const TASKS_KEY: &str = "todo-tasks";

/// Key holding the theme literal.
pub const THEME_KEY: &str = "theme";

/// Translates between in-memory state and the serialized form on a medium.
#[derive(Debug)]
pub struct PersistenceGateway<S> {
    medium: S,
}

impl<S: KeyValueStore> PersistenceGateway<S> {
    #[must_use]
    pub const fn new(medium: S) -> Self {
        Self { medium }
    }

    /// Access the underlying medium.
    #[must_use]
    pub const fn medium(&self) -> &S {
        &self.medium
    }

    /// Give back the underlying medium.
    #[must_use]
    pub fn into_medium(self) -> S {
        self.medium
    }

    /// Load the persisted task collection in stored order.
    ///
    /// Records with blank text or an ID already seen earlier in the list are
    /// dropped so the result always satisfies the collection invariants.
    #[must_use]
    pub fn load_tasks(&self) -> Vec<Task> {
        let raw = match self.medium.get(TASKS_KEY) {
            Ok(Some(raw)) => raw,
            Ok(None) => return Vec::new(),
            Err(error) => {
                tracing::warn!(%error, key = TASKS_KEY, "failed to read tasks; starting empty");
                return Vec::new();
            }
        };

        let records: Vec<Task> = match serde_json::from_str(&raw) {
            Ok(records) => records,
            Err(error) => {
                tracing::warn!(%error, key = TASKS_KEY, "malformed task data; starting empty");
                return Vec::new();
            }
        };

        let loaded = records.len();
        let mut seen = HashSet::with_capacity(loaded);
        let tasks: Vec<Task> = records
            .into_iter()
            .filter(|task| !task.text.trim().is_empty() && seen.insert(task.id))
            .collect();

        if tasks.len() != loaded {
            tracing::warn!(
                dropped = loaded - tasks.len(),
                "dropped task records with blank text or duplicate ids"
            );
        }
        tracing::debug!(count = tasks.len(), "loaded tasks");
        tasks
    }

    /// Serialize the entire collection and write it under [`TASKS_KEY`].
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if serialization or the medium write fails.
    pub fn save_tasks(&mut self, tasks: &[Task]) -> Result<(), StoreError> {
        let raw = serde_json::to_string(tasks)?;
        self.medium.set(TASKS_KEY, &raw)?;
        tracing::debug!(count = tasks.len(), "persisted tasks");
        Ok(())
    }

    /// Load the theme preference. Anything but `"dark"` means light.
    #[must_use]
    pub fn load_theme(&self) -> Theme {
        match self.medium.get(THEME_KEY) {
            Ok(value) => Theme::from_stored(value.as_deref()),
            Err(error) => {
                tracing::warn!(%error, key = THEME_KEY, "failed to read theme; using light");
                Theme::Light
            }
        }
    }

    /// Write the theme literal under [`THEME_KEY`].
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if the medium write fails.
    pub fn save_theme(&mut self, theme: Theme) -> Result<(), StoreError> {
        self.medium.set(THEME_KEY, theme.as_str())?;
        tracing::debug!(%theme, "persisted theme");
        Ok(())
    }
}
