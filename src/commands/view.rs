// View derivation - filtering, pagination and counters over the task collection

use crate::models::{PriorityFilter, Task};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskView {
    pub rows: Vec<Task>,
    pub page: usize,
    pub pageSize: usize,
    /// Unfiltered collection length
    pub totalTasks: usize,
    /// Completed count over the unfiltered collection
    pub completedTasks: usize,
    pub filteredTasks: usize,
    /// Page count over the unfiltered collection (what the pager shows by default)
    pub pageCount: usize,
    pub filteredPageCount: usize,
}

/// Pure derivation: filter by priority, then slice the requested page
pub fn deriveView(tasks: &[Task], filter: PriorityFilter, page: usize, pageSize: usize) -> TaskView {
    let pageSize = pageSize.max(1);
    let filtered: Vec<&Task> = tasks.iter().filter(|t| filter.matches(t.priority)).collect();

    let rows = filtered
        .iter()
        .skip(page.saturating_mul(pageSize))
        .take(pageSize)
        .map(|t| (*t).clone())
        .collect();

    TaskView {
        rows,
        page,
        pageSize,
        totalTasks: tasks.len(),
        completedTasks: tasks.iter().filter(|t| t.completed).count(),
        filteredTasks: filtered.len(),
        pageCount: Pager::new(tasks.len(), pageSize).pageCount(),
        filteredPageCount: Pager::new(filtered.len(), pageSize).pageCount(),
    }
}

/// Pagination widget contract: page count from item total, zero-based selection
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pager {
    pub totalItems: usize,
    pub pageSize: usize,
}

impl Pager {
    pub fn new(totalItems: usize, pageSize: usize) -> Self {
        Self { totalItems, pageSize: pageSize.max(1) }
    }

    pub fn pageCount(&self) -> usize {
        self.totalItems.div_ceil(self.pageSize)
    }

    /// Index emitted for a user selection, clamped to the last page
    pub fn select(&self, index: usize) -> usize {
        index.min(self.pageCount().saturating_sub(1))
    }
}
