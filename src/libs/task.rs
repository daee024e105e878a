//! Task model and field validation.
//!
//! Defines the persisted document shape (`Task`), the payloads the CLI feeds
//! into the repository (`NewTask`, `TaskChanges`), the write-time patch image
//! (`TaskPatch`), and the listing filter (`TaskFilter`).
//!
//! Validation is a declarative table of field rules applied to a
//! [`TaskChanges`] view. Create and update both funnel through the same
//! table, so a rule can never hold on one path and not the other.

use crate::libs::error::{Result, TaskError};
use chrono::{DateTime, NaiveDate, Utc};
use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Task priority level.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    Low,
    #[default]
    Medium,
    High,
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let value = match self {
            Priority::Low => "low",
            Priority::Medium => "medium",
            Priority::High => "high",
        };
        write!(f, "{}", value)
    }
}

/// A single task, in exactly the shape persisted to the store.
///
/// The identifier is a UUIDv4 text token generated at construction and
/// stored as the document `_id`; it is immutable for the life of the task.
/// Timestamps are assigned here and by the repository, never by the caller.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Task {
    #[serde(rename = "_id")]
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub due_date: Option<NaiveDate>,
    #[serde(default)]
    pub priority: Priority,
    #[serde(default)]
    pub completed: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Task {
    /// Build a fresh task from a creation payload: new id, trimmed text
    /// fields, `completed = false`, both timestamps set to now.
    pub fn new(draft: NewTask) -> Self {
        let now = Utc::now();
        Task {
            id: Uuid::new_v4().to_string(),
            title: draft.title.trim().to_string(),
            description: draft.description.trim().to_string(),
            due_date: draft.due_date,
            priority: draft.priority,
            completed: false,
            created_at: now,
            updated_at: now,
        }
    }
}

/// Creation payload for a single task.
///
/// Also the item shape of the `add-bulk` JSON file: an array of objects with
/// `title` plus optional `description`, `due_date` (`YYYY-MM-DD`), and
/// `priority` (`low`/`medium`/`high`).
#[derive(Debug, Clone, Deserialize)]
pub struct NewTask {
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub due_date: Option<NaiveDate>,
    #[serde(default)]
    pub priority: Priority,
}

impl NewTask {
    /// View of this draft as a change set, for running the field rules.
    pub fn as_changes(&self) -> TaskChanges {
        TaskChanges {
            title: Some(self.title.clone()),
            description: Some(self.description.clone()),
            due_date: self.due_date,
            priority: Some(self.priority),
        }
    }
}

/// Partial update payload: `None` means "leave the field alone".
#[derive(Debug, Clone, Default)]
pub struct TaskChanges {
    pub title: Option<String>,
    pub description: Option<String>,
    pub due_date: Option<NaiveDate>,
    pub priority: Option<Priority>,
}

impl TaskChanges {
    pub fn is_empty(&self) -> bool {
        self.title.is_none() && self.description.is_none() && self.due_date.is_none() && self.priority.is_none()
    }
}

/// The image a single write applies to a task: the validated changes plus
/// the new `updated_at`, and optionally the completion flip.
#[derive(Debug, Clone)]
pub struct TaskPatch {
    pub title: Option<String>,
    pub description: Option<String>,
    pub due_date: Option<NaiveDate>,
    pub priority: Option<Priority>,
    pub completed: Option<bool>,
    pub updated_at: DateTime<Utc>,
}

impl TaskPatch {
    /// Patch carrying a validated change set.
    pub fn from_changes(changes: TaskChanges) -> Self {
        TaskPatch {
            title: changes.title.map(|title| title.trim().to_string()),
            description: changes.description.map(|description| description.trim().to_string()),
            due_date: changes.due_date,
            priority: changes.priority,
            completed: None,
            updated_at: Utc::now(),
        }
    }

    /// Patch that marks a task completed and nothing else.
    pub fn completed() -> Self {
        TaskPatch {
            title: None,
            description: None,
            due_date: None,
            priority: None,
            completed: Some(true),
            updated_at: Utc::now(),
        }
    }
}

/// Optional listing filters; an empty filter matches every task.
#[derive(Debug, Clone, Default)]
pub struct TaskFilter {
    pub completed: Option<bool>,
    pub priority: Option<Priority>,
    pub due_date: Option<NaiveDate>,
}

impl TaskFilter {
    pub fn matches(&self, task: &Task) -> bool {
        if let Some(completed) = self.completed {
            if task.completed != completed {
                return false;
            }
        }
        if let Some(priority) = self.priority {
            if task.priority != priority {
                return false;
            }
        }
        if let Some(due_date) = self.due_date {
            if task.due_date != Some(due_date) {
                return false;
            }
        }
        true
    }
}

/// One field rule: the field name reported on failure, and the check run
/// against a change set. Fields whose values are valid by construction
/// (`priority` and `due_date` are typed at the clap/serde boundary) need no
/// entry here.
struct FieldRule {
    field: &'static str,
    check: fn(&TaskChanges) -> std::result::Result<(), String>,
}

const FIELD_RULES: &[FieldRule] = &[FieldRule {
    field: "title",
    check: check_title,
}];

fn check_title(changes: &TaskChanges) -> std::result::Result<(), String> {
    match &changes.title {
        Some(title) if title.trim().is_empty() => Err("title cannot be empty".to_string()),
        _ => Ok(()),
    }
}

/// Run every field rule against a change set. Fields absent from the change
/// set pass; fields present are held to the same rules on create and update.
pub fn validate(changes: &TaskChanges) -> Result<()> {
    for rule in FIELD_RULES {
        (rule.check)(changes).map_err(|reason| TaskError::Validation { field: rule.field, reason })?;
    }
    Ok(())
}
