//! # App Error Type
//!
//! Failures that end the process (or a one-shot command) rather than being
//! shown as an [`Alert`](crate::controller::Alert) inside the screen.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Source                      Variant              Exit                  │
//! │  ──────────────────────────  ───────────────────  ──────────────────── │
//! │  tienda.toml unreadable      Io / ConfigParse     before store opens   │
//! │  bad config values           InvalidConfig        before store opens   │
//! │  no home / data dir          NoDataDir            before store opens   │
//! │  store open / initialize     Database             after Fatal alert    │
//! │  one-shot command rejected   Rejected             after the alert      │
//! │  terminal prompt failed      Prompt               interactive only     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use thiserror::Error;
use tienda_db::DbError;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("Failed to parse config file: {0}")]
    ConfigParse(#[from] toml::de::Error),

    #[error("Could not determine the application data directory")]
    NoDataDir,

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Database(#[from] DbError),

    /// The command ran but its alert was not a success. Already shown.
    #[error("{0}")]
    Rejected(String),

    #[error("Prompt failed: {0}")]
    Prompt(#[from] dialoguer::Error),

    #[error("Failed to encode output: {0}")]
    Json(#[from] serde_json::Error),
}

pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_database_error_is_transparent() {
        let err: AppError = DbError::ConnectionFailed("unable to open database file".into()).into();
        assert_eq!(err.to_string(), "Connection failed: unable to open database file");
    }

    #[test]
    fn test_config_parse_error_converts() {
        let parse_err = toml::from_str::<toml::Value>("[database").unwrap_err();
        let err: AppError = parse_err.into();
        assert!(matches!(err, AppError::ConfigParse(_)));
    }
}
