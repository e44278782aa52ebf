//! # taskd-settings
//!
//! Settings for the taskd server: compiled defaults, deep-merged
//! `~/.taskd/settings.json` overrides, and `TASKD_*` environment
//! variable overrides on top.

#![deny(unsafe_code)]

pub mod errors;
pub mod loader;
pub mod types;

pub use errors::{Result, SettingsError};
pub use loader::{load_settings, load_settings_from_path, settings_path};
pub use types::{DatabaseSettings, LoggingSettings, ServerSettings, TaskdSettings};
