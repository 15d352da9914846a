// Error type shared by the controller, storage and settings layers

use thiserror::Error;

#[derive(Debug, Error)]
pub enum TaskListError {
    /// Raised by addTask when the trimmed text is empty
    #[error("Task cannot be empty.")]
    EmptyTaskText,

    #[error("Failed to get home directory")]
    NoHomeDir,

    #[error("Storage I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

pub type Result<T, E = TaskListError> = std::result::Result<T, E>;

impl From<TaskListError> for String {
    fn from(e: TaskListError) -> Self {
        e.to_string()
    }
}
