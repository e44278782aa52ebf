//! Settings error types.

use thiserror::Error;

/// Convenience alias for settings results.
pub type Result<T> = std::result::Result<T, SettingsError>;

/// Errors from settings loading.
#[derive(Debug, Error)]
pub enum SettingsError {
    /// Settings file could not be read.
    #[error("Failed to read settings file: {0}")]
    Io(#[from] std::io::Error),

    /// Settings file contains invalid JSON or fails to deserialize.
    #[error("Invalid settings JSON: {0}")]
    Json(#[from] serde_json::Error),
}
