// Confirmation and notification collaborator
// Modal prompts gate state-changing actions; notices are fire-and-forget toasts

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DialogKind {
    Success,
    Error,
    Warning,
    Info,
}

/// Modal confirmation prompt
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Prompt {
    pub title: String,
    pub message: Option<String>,
    pub kind: DialogKind,
    pub confirmLabel: String,
    pub cancelLabel: String,
}

/// Non-blocking result notification
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub title: String,
    pub message: Option<String>,
    pub kind: DialogKind,
}

impl Notice {
    pub fn new(title: &str, message: Option<&str>, kind: DialogKind) -> Self {
        Self {
            title: title.to_string(),
            message: message.map(str::to_string),
            kind,
        }
    }
}

#[allow(async_fn_in_trait)]
pub trait Dialogs {
    /// Resolves to true when the user accepts, false on cancel or dismiss
    async fn confirm(&self, prompt: &Prompt) -> bool;

    fn notify(&self, notice: &Notice);
}

impl<D: Dialogs> Dialogs for &D {
    async fn confirm(&self, prompt: &Prompt) -> bool {
        (**self).confirm(prompt).await
    }

    fn notify(&self, notice: &Notice) {
        (**self).notify(notice)
    }
}

/// Dialogs without a UI: answers every prompt the same way and logs notices
#[derive(Debug, Clone, Copy)]
pub struct HeadlessDialogs {
    pub accept: bool,
}

impl HeadlessDialogs {
    pub fn accepting() -> Self {
        Self { accept: true }
    }

    pub fn rejecting() -> Self {
        Self { accept: false }
    }
}

impl Dialogs for HeadlessDialogs {
    async fn confirm(&self, prompt: &Prompt) -> bool {
        tracing::debug!("[HeadlessDialogs::confirm] '{}' -> {}", prompt.title, self.accept);
        self.accept
    }

    fn notify(&self, notice: &Notice) {
        match notice.kind {
            DialogKind::Error => tracing::warn!("[notify] {}: {}", notice.title, notice.message.as_deref().unwrap_or("")),
            _ => tracing::info!("[notify] {}: {}", notice.title, notice.message.as_deref().unwrap_or("")),
        }
    }
}

// ============================================
// PROMPTS AND NOTICES
// ============================================

pub fn togglePrompt(completed: bool) -> Prompt {
    Prompt {
        title: if completed {
            "Are you sure you want to mark this task as incomplete?".to_string()
        } else {
            "Are you sure you want to mark this task as completed?".to_string()
        },
        message: None,
        kind: DialogKind::Warning,
        confirmLabel: if completed { "Mark as Incomplete" } else { "Mark as Completed" }.to_string(),
        cancelLabel: "Cancel".to_string(),
    }
}

pub fn toggledNotice(wasCompleted: bool) -> Notice {
    let title = if wasCompleted { "Task marked as incomplete!" } else { "Task marked as completed!" };
    Notice::new(title, None, DialogKind::Success)
}

pub fn editPrompt() -> Prompt {
    Prompt {
        title: "Are you sure?".to_string(),
        message: Some("Once edited, the changes will be applied.".to_string()),
        kind: DialogKind::Info,
        confirmLabel: "Yes, edit it!".to_string(),
        cancelLabel: "No, cancel!".to_string(),
    }
}

pub fn deletePrompt() -> Prompt {
    Prompt {
        title: "Are you sure?".to_string(),
        message: Some("Once deleted, you will not be able to recover this task!".to_string()),
        kind: DialogKind::Warning,
        confirmLabel: "Yes, delete it!".to_string(),
        cancelLabel: "No, cancel!".to_string(),
    }
}

pub fn addedNotice() -> Notice {
    Notice::new("Good job!", Some("You've successfully added a new task!"), DialogKind::Success)
}

pub fn emptyTaskNotice() -> Notice {
    Notice::new("Error!", Some("Task cannot be empty."), DialogKind::Error)
}

pub fn editedNotice() -> Notice {
    Notice::new("Edited!", Some("Your task has been updated."), DialogKind::Success)
}

pub fn deletedNotice() -> Notice {
    Notice::new("Deleted!", Some("Your task has been deleted."), DialogKind::Success)
}

pub fn storageErrorNotice(message: &str) -> Notice {
    Notice::new("Error!", Some(message), DialogKind::Error)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_prompt_follows_state() {
        let p = togglePrompt(false);
        assert!(p.title.contains("completed"));
        assert_eq!(p.confirmLabel, "Mark as Completed");

        let p = togglePrompt(true);
        assert!(p.title.contains("incomplete"));
        assert_eq!(p.confirmLabel, "Mark as Incomplete");
        assert_eq!(p.kind, DialogKind::Warning);
    }

    #[tokio::test]
    async fn test_headless_dialogs_answer() {
        assert!(HeadlessDialogs::accepting().confirm(&deletePrompt()).await);
        assert!(!HeadlessDialogs::rejecting().confirm(&editPrompt()).await);
    }
}
