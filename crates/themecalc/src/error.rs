//! Error types for preferences and the application shell

use thiserror::Error;

/// Result type for preference store operations
pub type PrefsResult<T> = Result<T, PrefsError>;

/// Result type for application operations
pub type AppResult<T> = Result<T, AppError>;

/// Errors raised while reading or writing stored preferences
#[derive(Debug, Error)]
pub enum PrefsError {
    /// IO error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Preference file is not valid JSON
    #[error("Invalid preference file: {0}")]
    Json(#[from] serde_json::Error),

    /// Stored value does not name a known theme
    #[error("Unknown theme identifier: {0}")]
    UnknownTheme(String),

    /// Backend-specific storage failure (browser storage unavailable, quota)
    #[error("Storage error: {message}")]
    Storage {
        /// Error message
        message: String,
    },
}

impl PrefsError {
    /// Create a storage error
    #[must_use]
    pub fn storage(message: impl Into<String>) -> Self {
        Self::Storage {
            message: message.into(),
        }
    }
}

/// Errors that end the application
#[derive(Debug, Error)]
pub enum AppError {
    /// Configuration error
    #[error("Configuration error: {message}")]
    Config {
        /// Error message
        message: String,
    },

    /// Preference store error
    #[error("Preference error: {0}")]
    Prefs(#[from] PrefsError),

    /// Terminal or file IO error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl AppError {
    /// Create a configuration error
    #[must_use]
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }
}
