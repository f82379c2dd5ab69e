//! Unified application error type.
//! All modules (config, cli, utils) return AppError to keep the error
//! handling consistent and easy to manage.
//!
//! Note: the evaluator itself is infallible; bad schedule data degrades to
//! "closed" instead of surfacing here.

use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    // ---------------------------
    // IO
    // ---------------------------
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    // ---------------------------
    // Parsing errors
    // ---------------------------
    #[error("Invalid time format (expected HH:MM): {0}")]
    InvalidTime(String),

    #[error("Invalid time window (expected HH:MM-HH:MM): {0}")]
    InvalidWindow(String),

    #[error("Invalid weekday name: {0}")]
    InvalidWeekday(String),

    // ---------------------------
    // Settings errors
    // ---------------------------
    #[error("Settings file error: {0}")]
    Settings(#[from] serde_yaml::Error),

    #[error("JSON output error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to load settings file")]
    SettingsLoad,

    #[error("Failed to save settings file")]
    SettingsSave,
}

pub type AppResult<T> = Result<T, AppError>;
