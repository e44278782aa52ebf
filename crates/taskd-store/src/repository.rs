//! SQL data access layer for task rows.
//!
//! All methods take a `&Connection` parameter and are stateless — pure
//! functions that translate between Rust types and SQL. Lookup misses
//! surface as `Option`/`bool`; the not-found policy lives in
//! [`crate::service::TaskService`].

use rusqlite::{params, Connection, OptionalExtension, Row};

use crate::errors::Result;
use crate::types::{Task, TaskDraft, TaskFilter};

/// Map a `tasks` row to a [`Task`].
fn task_from_row(row: &Row<'_>) -> rusqlite::Result<Task> {
    Ok(Task {
        id: row.get("id")?,
        title: row.get("title")?,
        description: row.get("description")?,
        completed: row.get("completed")?,
    })
}

/// Task repository for SQL CRUD operations.
pub struct TaskRepository;

impl TaskRepository {
    /// Insert a new task row and return the stored record.
    ///
    /// The id comes from the store (`last_insert_rowid`); the row is
    /// re-read after insert so the caller gets exactly what persisted.
    pub fn insert(conn: &Connection, draft: &TaskDraft) -> Result<Task> {
        let _ = conn.execute(
            "INSERT INTO tasks (title, description, completed) VALUES (?1, ?2, ?3)",
            params![draft.title, draft.description, draft.completed],
        )?;
        let id = conn.last_insert_rowid();
        let task = conn.query_row("SELECT * FROM tasks WHERE id = ?1", params![id], |row| {
            task_from_row(row)
        })?;
        Ok(task)
    }

    /// Get a task by id. Returns `None` when no row matches.
    pub fn get(conn: &Connection, id: i64) -> Result<Option<Task>> {
        let task = conn
            .query_row("SELECT * FROM tasks WHERE id = ?1", params![id], |row| {
                task_from_row(row)
            })
            .optional()?;
        Ok(task)
    }

    /// Overwrite every non-id field of a task row.
    ///
    /// Full-replace semantics: all three columns are bound from the draft
    /// on every call. Returns the updated record, or `None` if no row
    /// matched the id.
    pub fn update(conn: &Connection, id: i64, draft: &TaskDraft) -> Result<Option<Task>> {
        let changed = conn.execute(
            "UPDATE tasks SET title = ?1, description = ?2, completed = ?3 WHERE id = ?4",
            params![draft.title, draft.description, draft.completed, id],
        )?;
        if changed == 0 {
            return Ok(None);
        }
        Self::get(conn, id)
    }

    /// Delete a task row. Returns whether a row was removed.
    pub fn delete(conn: &Connection, id: i64) -> Result<bool> {
        let removed = conn.execute("DELETE FROM tasks WHERE id = ?1", params![id])?;
        Ok(removed > 0)
    }

    /// List task rows, optionally filtered by completion state.
    ///
    /// No explicit ordering — rows come back in store (rowid) order.
    pub fn list(conn: &Connection, filter: &TaskFilter) -> Result<Vec<Task>> {
        let tasks = match filter.completed {
            Some(completed) => {
                let mut stmt = conn.prepare("SELECT * FROM tasks WHERE completed = ?1")?;
                let rows = stmt.query_map(params![completed], |row| task_from_row(row))?;
                rows.collect::<rusqlite::Result<Vec<_>>>()?
            }
            None => {
                let mut stmt = conn.prepare("SELECT * FROM tasks")?;
                let rows = stmt.query_map([], |row| task_from_row(row))?;
                rows.collect::<rusqlite::Result<Vec<_>>>()?
            }
        };
        Ok(tasks)
    }
}
