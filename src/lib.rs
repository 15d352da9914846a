// Allow non-snake_case names for JSON serialization compatibility with the frontend
#![allow(non_snake_case)]

pub mod commands;
pub mod dialog;
pub mod error;
pub mod models;
pub mod storage;

pub use commands::task::{EditInput, Outcome, TaskListController};
pub use commands::view::{Pager, TaskView, deriveView};
pub use dialog::{DialogKind, Dialogs, HeadlessDialogs, Notice, Prompt};
pub use error::{Result, TaskListError};
pub use models::{EditSession, InsertOrder, Priority, PriorityFilter, Settings, SettingsOverride, Task, TaskDraft};
pub use storage::{FileStore, KeyValueStore, MemoryStore};

/// Install the fmt subscriber; later calls are no-ops
pub fn initLogging() {
    let _ = tracing_subscriber::fmt().with_target(false).try_init();
}

/// Controller over the default file store with settings from ~/.tasklist/config.md
pub fn openDefault<D: Dialogs>(dialogs: D) -> Result<TaskListController<FileStore, D>> {
    let settings = storage::loadSettingsFile(&storage::globalConfigPath()?);
    let store = FileStore::openDefault()?;
    tracing::info!("[openDefault] Using data directory {:?}", store.dir());
    Ok(TaskListController::load(store, dialogs, settings))
}
