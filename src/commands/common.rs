// Common helpers for commands

use crate::models::Task;

/// Get current timestamp in milliseconds
pub fn now() -> i64 {
    chrono::Utc::now().timestamp_millis()
}

/// Creation timestamp as id, bumped past the largest existing id when it collides
pub fn newId(existing: &[Task], timestamp: i64) -> i64 {
    if existing.iter().any(|t| t.id == timestamp) {
        existing.iter().map(|t| t.id).max().unwrap_or(timestamp) + 1
    } else {
        timestamp
    }
}
