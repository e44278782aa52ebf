//! # taskd-store
//!
//! Task record CRUD with `SQLite` persistence.
//!
//! Provides the connection pool, schema migrations, the stateless
//! [`TaskRepository`] SQL layer, and the [`TaskService`] business layer
//! that owns the not-found semantics.

#![deny(unsafe_code)]

pub mod connection;
pub mod errors;
pub mod migrations;
pub mod repository;
pub mod service;
pub mod types;

pub use connection::{new_file, new_in_memory, ConnectionConfig, ConnectionPool, PooledConnection};
pub use errors::{Result, TaskError};
pub use migrations::run_migrations;
pub use repository::TaskRepository;
pub use service::TaskService;
pub use types::{Task, TaskDraft, TaskFilter};
