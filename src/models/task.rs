// Task model - one record of the stored JSON array
// Timestamp id for stable identity, priority defaults to low

use serde::{Deserialize, Serialize};
use super::common::Priority;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    pub id: i64, // Creation timestamp (ms), unique within the collection
    pub text: String,
    #[serde(default)]
    pub completed: bool,
    #[serde(default)]
    pub priority: Priority,
}

impl Task {
    pub fn new(id: i64, text: impl Into<String>, priority: Priority) -> Self {
        Self {
            id,
            text: text.into(),
            completed: false,
            priority,
        }
    }
}

/// New-task input fields
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskDraft {
    pub text: String,
    pub priority: Priority,
}

/// Task currently being edited, with its scratch fields
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditSession {
    pub taskId: i64,
    pub text: String,
    pub priority: Option<Priority>,
}

impl EditSession {
    pub fn new(taskId: i64) -> Self {
        Self {
            taskId,
            text: String::new(),
            priority: None,
        }
    }

    /// Scratch text if typed, otherwise the task's own text
    pub fn displayText<'a>(&'a self, task: &'a Task) -> &'a str {
        if self.text.is_empty() { &task.text } else { &self.text }
    }

    pub fn displayPriority(&self, task: &Task) -> Priority {
        self.priority.unwrap_or(task.priority)
    }
}
