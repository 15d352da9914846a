// Task list controller - owns the collection and every operation on it
// Each committed mutation replaces the whole collection, then persists it

use crate::dialog::{self, Dialogs, Notice};
use crate::error::{Result, TaskListError};
use crate::models::{EditSession, InsertOrder, Priority, PriorityFilter, Settings, Task, TaskDraft};
use crate::storage::{KeyValueStore, loadTasks, saveTasks};
use super::common::{newId, now};
use super::view::{Pager, TaskView, deriveView};

/// Result of a confirmation-gated operation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Applied,
    Cancelled,
    NotFound,
}

/// Replacement values for commitEdit; None falls back to the scratch field, then the task
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EditInput {
    pub text: Option<String>,
    pub priority: Option<Priority>,
}

pub struct TaskListController<S: KeyValueStore, D: Dialogs> {
    store: S,
    dialogs: D,
    settings: Settings,
    tasks: Vec<Task>,
    draft: TaskDraft,
    editing: Option<EditSession>,
    filter: PriorityFilter,
    page: usize,
}

impl<S: KeyValueStore, D: Dialogs> TaskListController<S, D> {
    /// Load the collection from the store (empty when missing or unreadable)
    pub fn load(store: S, dialogs: D, settings: Settings) -> Self {
        let settings = settings.normalized();
        let tasks = loadTasks(&store, &settings.storageKey);
        tracing::info!("[TaskListController::load] {} tasks under '{}'", tasks.len(), settings.storageKey);
        Self {
            store,
            dialogs,
            draft: TaskDraft { text: String::new(), priority: settings.defaultPriority },
            settings,
            tasks,
            editing: None,
            filter: PriorityFilter::All,
            page: 0,
        }
    }

    // ============================================
    // ACCESSORS
    // ============================================

    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn draft(&self) -> &TaskDraft {
        &self.draft
    }

    pub fn editing(&self) -> Option<&EditSession> {
        self.editing.as_ref()
    }

    pub fn filter(&self) -> PriorityFilter {
        self.filter
    }

    pub fn page(&self) -> usize {
        self.page
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn dialogs(&self) -> &D {
        &self.dialogs
    }

    fn find(&self, id: i64) -> Option<&Task> {
        self.tasks.iter().find(|t| t.id == id)
    }

    fn notify(&self, notice: Notice) {
        if self.settings.notificationsEnabled {
            self.dialogs.notify(&notice);
        }
    }

    /// Swap in the new collection and write it through to the store
    fn commit(&mut self, tasks: Vec<Task>) -> Result<()> {
        self.tasks = tasks;
        // A shrinking collection must not leave the view past the last page
        self.page = self.pager().select(self.page);
        if let Err(e) = saveTasks(&self.store, &self.settings.storageKey, &self.tasks) {
            tracing::error!("[commit] Failed to persist {} tasks: {}", self.tasks.len(), e);
            self.notify(dialog::storageErrorNotice(&e.to_string()));
            return Err(e);
        }
        Ok(())
    }

    // ============================================
    // DRAFT / ADD
    // ============================================

    pub fn setDraftText(&mut self, text: impl Into<String>) {
        self.draft.text = text.into();
    }

    pub fn setDraftPriority(&mut self, priority: Priority) {
        self.draft.priority = priority;
    }

    /// Add from the new-task input fields
    pub fn submitDraft(&mut self) -> Result<Task> {
        let TaskDraft { text, priority } = self.draft.clone();
        self.addTask(&text, Some(priority))
    }

    pub fn addTask(&mut self, text: &str, priority: Option<Priority>) -> Result<Task> {
        if text.trim().is_empty() {
            tracing::info!("[addTask] Rejected empty task text");
            self.notify(dialog::emptyTaskNotice());
            return Err(TaskListError::EmptyTaskText);
        }

        let priority = priority.unwrap_or(self.settings.defaultPriority);
        let task = Task::new(newId(&self.tasks, now()), text, priority);

        let mut updated = Vec::with_capacity(self.tasks.len() + 1);
        match self.settings.insertOrder {
            InsertOrder::NewestFirst => {
                updated.push(task.clone());
                updated.extend(self.tasks.iter().cloned());
            }
            InsertOrder::Append => {
                updated.extend(self.tasks.iter().cloned());
                updated.push(task.clone());
            }
        }

        self.draft = TaskDraft { text: String::new(), priority: self.settings.defaultPriority };
        tracing::info!("[addTask] Added task {} ({})", task.id, task.priority.asStr());
        self.commit(updated)?;
        self.notify(dialog::addedNotice());
        Ok(task)
    }

    // ============================================
    // TOGGLE
    // ============================================

    pub async fn toggleCompletion(&mut self, id: i64) -> Result<Outcome> {
        let Some(completed) = self.find(id).map(|t| t.completed) else {
            tracing::warn!("[toggleCompletion] Task {} not found", id);
            return Ok(Outcome::NotFound);
        };

        if !self.dialogs.confirm(&dialog::togglePrompt(completed)).await {
            tracing::info!("[toggleCompletion] Cancelled for task {}", id);
            return Ok(Outcome::Cancelled);
        }

        let updated = self
            .tasks
            .iter()
            .map(|t| if t.id == id { Task { completed: !completed, ..t.clone() } } else { t.clone() })
            .collect();

        tracing::info!("[toggleCompletion] Task {} completed: {} -> {}", id, completed, !completed);
        self.commit(updated)?;
        self.notify(dialog::toggledNotice(completed));
        Ok(Outcome::Applied)
    }

    // ============================================
    // EDIT
    // ============================================

    /// Enter edit mode; ignored while another task is being edited
    pub fn beginEdit(&mut self, id: i64) -> bool {
        if let Some(session) = &self.editing {
            if session.taskId != id {
                tracing::debug!("[beginEdit] Task {} is being edited, ignoring {}", session.taskId, id);
            }
            return session.taskId == id;
        }
        if self.find(id).is_none() {
            tracing::warn!("[beginEdit] Task {} not found", id);
            return false;
        }
        tracing::debug!("[beginEdit] Editing task {}", id);
        self.editing = Some(EditSession::new(id));
        true
    }

    pub fn setEditText(&mut self, text: impl Into<String>) {
        if let Some(session) = self.editing.as_mut() {
            session.text = text.into();
        }
    }

    pub fn setEditPriority(&mut self, priority: Priority) {
        if let Some(session) = self.editing.as_mut() {
            session.priority = Some(priority);
        }
    }

    pub fn cancelEdit(&mut self) {
        if let Some(session) = self.editing.take() {
            tracing::debug!("[cancelEdit] Left edit mode for task {}", session.taskId);
        }
    }

    /// Text and priority to render for a row in edit mode, None when the row is not being edited
    pub fn editDisplay<'a>(&'a self, task: &'a Task) -> Option<(&'a str, Priority)> {
        self.editing
            .as_ref()
            .filter(|s| s.taskId == task.id)
            .map(|s| (s.displayText(task), s.displayPriority(task)))
    }

    pub async fn commitEdit(&mut self, id: i64, input: EditInput) -> Result<Outcome> {
        let Some(current) = self.find(id).cloned() else {
            tracing::warn!("[commitEdit] Task {} not found", id);
            return Ok(Outcome::NotFound);
        };

        let scratch = self.editing.as_ref().filter(|s| s.taskId == id);
        let text = input
            .text
            .filter(|t| !t.trim().is_empty())
            .or_else(|| scratch.map(|s| s.text.clone()).filter(|t| !t.trim().is_empty()))
            .unwrap_or(current.text);
        let priority = input
            .priority
            .or_else(|| scratch.and_then(|s| s.priority))
            .unwrap_or(current.priority);

        if !self.dialogs.confirm(&dialog::editPrompt()).await {
            tracing::info!("[commitEdit] Cancelled for task {}", id);
            return Ok(Outcome::Cancelled);
        }

        let updated = self
            .tasks
            .iter()
            .map(|t| {
                if t.id == id {
                    Task { text: text.clone(), priority, ..t.clone() }
                } else {
                    t.clone()
                }
            })
            .collect();

        if self.editing.as_ref().is_some_and(|s| s.taskId == id) {
            self.editing = None;
        }
        tracing::info!("[commitEdit] Updated task {} ({})", id, priority.asStr());
        self.commit(updated)?;
        self.notify(dialog::editedNotice());
        Ok(Outcome::Applied)
    }

    // ============================================
    // DELETE
    // ============================================

    pub async fn deleteTask(&mut self, id: i64) -> Result<Outcome> {
        if self.find(id).is_none() {
            tracing::warn!("[deleteTask] Task {} not found", id);
            return Ok(Outcome::NotFound);
        }

        if !self.dialogs.confirm(&dialog::deletePrompt()).await {
            tracing::info!("[deleteTask] Cancelled for task {}", id);
            return Ok(Outcome::Cancelled);
        }

        let updated: Vec<Task> = self.tasks.iter().filter(|t| t.id != id).cloned().collect();
        if self.editing.as_ref().is_some_and(|s| s.taskId == id) {
            self.editing = None;
        }

        tracing::info!("[deleteTask] Deleted task {}, {} remaining", id, updated.len());
        self.commit(updated)?;
        self.notify(dialog::deletedNotice());
        Ok(Outcome::Applied)
    }

    // ============================================
    // VIEW STATE
    // ============================================

    /// Changing the filter returns to the first page
    pub fn setFilter(&mut self, filter: PriorityFilter) {
        if self.filter != filter {
            self.filter = filter;
            self.page = 0;
        }
    }

    pub fn pager(&self) -> Pager {
        let total = if self.settings.pagerCountsFiltered {
            self.tasks.iter().filter(|t| self.filter.matches(t.priority)).count()
        } else {
            self.tasks.len()
        };
        Pager::new(total, self.settings.pageSize)
    }

    /// Record the page index emitted by the pager
    pub fn setPage(&mut self, index: usize) {
        self.page = self.pager().select(index);
    }

    pub fn view(&self) -> TaskView {
        deriveView(&self.tasks, self.filter, self.page, self.settings.pageSize)
    }
}
