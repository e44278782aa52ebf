//! `TaskServer` — Axum HTTP server for the task record service.

use std::net::SocketAddr;
use std::time::Instant;

use axum::extract::State;
use axum::response::Json;
use axum::routing::get;
use axum::Router;
use taskd_store::ConnectionPool;
use tokio::task::JoinHandle;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::info;

use crate::config::ServerConfig;
use crate::health::{self, HealthResponse};
use crate::routes;
use crate::shutdown::ShutdownCoordinator;

/// Shared state accessible from Axum handlers.
///
/// The pool is the only process-wide mutable resource: created once at
/// startup, shared by every request, dropped at process exit.
#[derive(Clone)]
pub struct AppState {
    /// `SQLite` connection pool.
    pub pool: ConnectionPool,
    /// When the server started.
    pub start_time: Instant,
}

/// The taskd HTTP server.
pub struct TaskServer {
    config: ServerConfig,
    pool: ConnectionPool,
    shutdown: ShutdownCoordinator,
    start_time: Instant,
}

impl TaskServer {
    /// Create a new server over an already-migrated pool.
    pub fn new(config: ServerConfig, pool: ConnectionPool) -> Self {
        Self {
            config,
            pool,
            shutdown: ShutdownCoordinator::new(),
            start_time: Instant::now(),
        }
    }

    /// Build the Axum router with all routes.
    pub fn router(&self) -> Router {
        let state = AppState {
            pool: self.pool.clone(),
            start_time: self.start_time,
        };

        // /tasks and /tasks/ are distinct paths in axum; both serve the
        // collection endpoints.
        Router::new()
            .route("/health", get(health_handler))
            .route(
                "/tasks",
                get(routes::list_tasks).post(routes::create_task),
            )
            .route(
                "/tasks/",
                get(routes::list_tasks).post(routes::create_task),
            )
            .route(
                "/tasks/{id}",
                get(routes::get_task)
                    .put(routes::update_task)
                    .delete(routes::delete_task),
            )
            .layer(TraceLayer::new_for_http())
            .layer(CorsLayer::permissive())
            .with_state(state)
    }

    /// Bind the listener and serve until shutdown is requested.
    ///
    /// Returns the bound address and the join handle of the server task.
    pub async fn listen(&self) -> std::io::Result<(SocketAddr, JoinHandle<()>)> {
        let bind = format!("{}:{}", self.config.host, self.config.port);
        let listener = tokio::net::TcpListener::bind(&bind).await?;
        let addr = listener.local_addr()?;

        let router = self.router();
        let token = self.shutdown.token();
        let handle = tokio::spawn(async move {
            let serve = axum::serve(listener, router)
                .with_graceful_shutdown(token.cancelled_owned());
            if let Err(e) = serve.await {
                tracing::error!(error = %e, "server task exited with error");
            }
        });

        info!(%addr, "taskd listening");
        Ok((addr, handle))
    }

    /// Get the shutdown coordinator.
    pub fn shutdown(&self) -> &ShutdownCoordinator {
        &self.shutdown
    }

    /// Get the server configuration.
    pub fn config(&self) -> &ServerConfig {
        &self.config
    }
}

/// GET /health
async fn health_handler(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(health::health_check(state.start_time))
}
