// Models module for the task list
// All fields use camelCase for consistency

pub mod common;
pub mod config;
pub mod task;

pub use common::{InsertOrder, Priority, PriorityFilter};
pub use config::{Settings, SettingsOverride};
pub use task::{EditSession, Task, TaskDraft};
