//! Store error types.
//!
//! A single typed error covers every failure mode of the store. The only
//! variant callers are expected to branch on is [`TaskError::NotFound`] —
//! the HTTP layer turns it into a client-visible 404; everything else is
//! a server-side fault.

use thiserror::Error;

/// Convenience alias for store results.
pub type Result<T> = std::result::Result<T, TaskError>;

/// Errors from task store operations.
#[derive(Debug, Error)]
pub enum TaskError {
    /// Database operation failed.
    #[error("Database error: {0}")]
    Database(#[from] rusqlite::Error),

    /// Could not check a connection out of the pool.
    #[error("Connection pool error: {0}")]
    Pool(#[from] r2d2::Error),

    /// A schema migration failed to apply.
    #[error("Migration {version} failed: {source}")]
    Migration {
        /// Version of the migration that failed.
        version: u32,
        /// The underlying SQL error.
        source: rusqlite::Error,
    },

    /// No task row matches the given id.
    #[error("Task not found: {id}")]
    NotFound {
        /// The id that was looked up.
        id: i64,
    },
}

impl TaskError {
    /// Create a not-found error for a task id.
    pub fn task_not_found(id: i64) -> Self {
        Self::NotFound { id }
    }

    /// Whether this error is a not-found lookup miss.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}
