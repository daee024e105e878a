//! Error types for task operations.
//!
//! Every repository and store operation reports one of three failure kinds:
//! invalid caller data, an identifier that does not resolve, or a store
//! failure with the underlying driver cause attached. Nothing is retried;
//! errors propagate to the CLI, which prints them and exits non-zero.

use thiserror::Error;

pub type Result<T> = std::result::Result<T, TaskError>;

#[derive(Debug, Error)]
pub enum TaskError {
    /// Caller-supplied data violates a field rule.
    #[error("Invalid {field}: {reason}")]
    Validation { field: &'static str, reason: String },

    /// The identifier does not resolve to an existing task. Can surface at
    /// read time or at write time, when another invocation deleted the task
    /// between our read and our write.
    #[error("Task '{0}' not found")]
    NotFound(String),

    /// Connection, acknowledgment, or other driver failure.
    #[error("Store error: {0}")]
    Store(#[from] mongodb::error::Error),
}
