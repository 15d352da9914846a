// Commands module - task list operations and view derivation

pub mod common;
pub mod task;
pub mod view;
