//! # taskd
//!
//! Task record server binary — loads settings, opens the database pool,
//! runs migrations, and starts the HTTP server.

#![deny(unsafe_code)]

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Parser;
use taskd_server::{ServerConfig, TaskServer};
use taskd_settings::TaskdSettings;
use taskd_store::ConnectionConfig;
use tracing_subscriber::EnvFilter;

/// Task record server.
#[derive(Parser, Debug)]
#[command(name = "taskd", about = "Task record server")]
struct Cli {
    /// Host to bind (overrides settings).
    #[arg(long)]
    host: Option<String>,

    /// Port to bind (overrides settings; 0 for auto-assign).
    #[arg(long)]
    port: Option<u16>,

    /// Path to the `SQLite` database (overrides settings).
    #[arg(long)]
    db_path: Option<PathBuf>,
}

/// Compiled default database location (`~/.taskd/tasks.db`).
fn default_db_path() -> PathBuf {
    let home = std::env::var("HOME").unwrap_or_else(|_| "/tmp".to_string());
    PathBuf::from(home).join(".taskd").join("tasks.db")
}

/// Database path precedence: CLI flag, then settings, then the default.
fn resolve_db_path(cli: Option<PathBuf>, settings: &TaskdSettings) -> PathBuf {
    if let Some(path) = cli {
        return path;
    }
    if settings.database.path.is_empty() {
        default_db_path()
    } else {
        PathBuf::from(&settings.database.path)
    }
}

fn ensure_parent_dir(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
    }
    Ok(())
}

/// Initialize the tracing subscriber. `RUST_LOG` wins over settings.
fn init_tracing(filter: &str) {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter));
    tracing_subscriber::fmt().with_env_filter(env_filter).init();
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Cli::parse();

    // Settings are best-effort: a missing file means defaults; an invalid
    // one should not take the server down either.
    let settings = taskd_settings::load_settings().unwrap_or_default();
    init_tracing(&settings.logging.filter);

    let db_path = resolve_db_path(args.db_path, &settings);
    ensure_parent_dir(&db_path)?;
    let connection_config = ConnectionConfig {
        pool_size: settings.database.pool_size,
        busy_timeout_ms: settings.database.busy_timeout_ms,
    };
    let pool = taskd_store::new_file(&db_path.to_string_lossy(), &connection_config)
        .context("Failed to open database")?;
    {
        let conn = pool.get().context("Failed to get DB connection")?;
        let _ = taskd_store::run_migrations(&conn).context("Failed to run migrations")?;
    }

    let config = ServerConfig {
        host: args.host.unwrap_or(settings.server.host),
        port: args.port.unwrap_or(settings.server.port),
    };

    let server = TaskServer::new(config, pool);
    let (addr, handle) = server.listen().await.context("Failed to bind server")?;

    tracing::info!("taskd listening on http://{addr}");

    tokio::signal::ctrl_c()
        .await
        .context("Failed to listen for ctrl-c")?;

    tracing::info!("Shutting down...");
    server.shutdown().shutdown();
    let _ = handle.await;

    tracing::info!("Shutdown complete");
    Ok(())
}
