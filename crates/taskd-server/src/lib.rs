//! # taskd-server
//!
//! Axum HTTP server for the task record service.
//!
//! - REST endpoints: task CRUD under `/tasks`, health check at `/health`
//! - Connection-per-request: each handler checks a pooled `SQLite`
//!   connection out at entry; RAII returns it on every exit path
//! - Graceful shutdown via `tokio::signal` + `CancellationToken`

#![deny(unsafe_code)]

pub mod config;
pub mod error;
pub mod health;
pub mod routes;
pub mod server;
pub mod shutdown;

pub use config::ServerConfig;
pub use error::ApiError;
pub use server::{AppState, TaskServer};
pub use shutdown::ShutdownCoordinator;
