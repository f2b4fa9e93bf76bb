use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::ids::TaskId;

/// A single to-do entry.
///
/// Field names are serialized in camelCase (`createdAt`) to match the
/// persisted `todo-tasks` record layout.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    pub id: TaskId,
    pub text: String,
    pub completed: bool,
    pub created_at: DateTime<Utc>,
}

impl Task {
    /// Build a new, not yet completed task.
    ///
    /// Returns `None` when `text` is empty or whitespace-only. Stored text is
    /// always trimmed.
    #[must_use]
    pub fn new(id: TaskId, text: &str, created_at: DateTime<Utc>) -> Option<Self> {
        let text = text.trim();
        if text.is_empty() {
            return None;
        }
        Some(Self {
            id,
            text: text.to_string(),
            completed: false,
            created_at,
        })
    }

    /// Flip the completion flag in place.
    pub const fn toggle(&mut self) {
        self.completed = !self.completed;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_trims_text() {
        let task = Task::new(TaskId::new(1), "  Buy milk \n", Utc::now()).unwrap();
        assert_eq!(task.text, "Buy milk");
        assert!(!task.completed);
    }

    #[test]
    fn new_rejects_blank_text() {
        assert!(Task::new(TaskId::new(1), "", Utc::now()).is_none());
        assert!(Task::new(TaskId::new(1), "   \t", Utc::now()).is_none());
    }

    #[test]
    fn toggle_is_an_involution() {
        let mut task = Task::new(TaskId::new(7), "Walk dog", Utc::now()).unwrap();
        task.toggle();
        assert!(task.completed);
        task.toggle();
        assert!(!task.completed);
    }

    #[test]
    fn serializes_created_at_in_camel_case() {
        let task = Task::new(TaskId::new(42), "x", Utc::now()).unwrap();
        let value = serde_json::to_value(&task).unwrap();
        assert_eq!(value["id"], 42);
        assert!(value.get("createdAt").is_some());
        assert!(value.get("created_at").is_none());
    }
}
