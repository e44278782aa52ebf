//! Business layer for task records.
//!
//! Wraps [`TaskRepository`] and owns the not-found policy: lookup misses
//! from the repository become [`TaskError::NotFound`] here, which the
//! HTTP layer surfaces as a 404. Each operation is a single atomic
//! read-then-write against one connection — no multi-step protocol.

use rusqlite::Connection;

use crate::errors::{Result, TaskError};
use crate::repository::TaskRepository;
use crate::types::{Task, TaskDraft, TaskFilter};

/// Task service: create, get, update, delete, list.
pub struct TaskService;

impl TaskService {
    /// Create a task. The store assigns the id.
    pub fn create(conn: &Connection, draft: &TaskDraft) -> Result<Task> {
        TaskRepository::insert(conn, draft)
    }

    /// Get a task by id, or [`TaskError::NotFound`].
    pub fn get(conn: &Connection, id: i64) -> Result<Task> {
        TaskRepository::get(conn, id)?.ok_or_else(|| TaskError::task_not_found(id))
    }

    /// Full-replace update of a task, or [`TaskError::NotFound`].
    pub fn update(conn: &Connection, id: i64, draft: &TaskDraft) -> Result<Task> {
        TaskRepository::update(conn, id, draft)?.ok_or_else(|| TaskError::task_not_found(id))
    }

    /// Delete a task, or [`TaskError::NotFound`].
    pub fn delete(conn: &Connection, id: i64) -> Result<()> {
        if TaskRepository::delete(conn, id)? {
            Ok(())
        } else {
            Err(TaskError::task_not_found(id))
        }
    }

    /// List tasks, optionally filtered by completion state.
    pub fn list(conn: &Connection, filter: &TaskFilter) -> Result<Vec<Task>> {
        TaskRepository::list(conn, filter)
    }
}
