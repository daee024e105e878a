//! Display implementation for user-facing messages.
//!
//! All message text lives in this one match so wording stays consistent and
//! a new variant cannot be added without deciding how it reads.

use super::types::Message;
use std::fmt::{Display, Formatter, Result};

impl Display for Message {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        let text = match self {
            // === TASK MESSAGES ===
            Message::TaskCreated(id, title) => format!("Created task {}: {}", id, title),
            Message::TaskUpdated(id, title) => format!("Updated task {}: {}", id, title),
            Message::TaskCompleted(id) => format!("Marked task {} as completed", id),
            Message::TaskDeleted(id) => format!("Deleted task {}", id),
            Message::TasksBulkCreated(count) => format!("Created {} tasks in bulk", count),
            Message::BulkFileEmpty => "No tasks created (input file was empty)".to_string(),
            Message::NoTasksFound => "No tasks found".to_string(),

            // === GENERIC ===
            Message::CommandFailed(reason) => reason.clone(),
        };
        write!(f, "{}", text)
    }
}
