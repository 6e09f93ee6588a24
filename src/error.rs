//! Error types for the Biblat catalog tools

use thiserror::Error;

/// Mapping failure raised by the journal translator.
///
/// The translator is pure: it never logs and never swallows a failure.
/// Each variant names the attribute being derived and the raw value that
/// could not be handled, so callers can skip-and-log whole records.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MapError {
    #[error("missing tag {tag} while deriving attribute '{attribute}'")]
    MissingTag {
        attribute: &'static str,
        tag: &'static str,
    },

    #[error("malformed timestamp {raw:?} for attribute '{attribute}' (expected YYYYMMDDHHMM)")]
    Timestamp {
        attribute: &'static str,
        raw: String,
    },

    #[error("unknown vocabulary code {code:?} for attribute '{attribute}'")]
    UnknownCode {
        attribute: &'static str,
        code: String,
    },
}

/// Main application error type
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Store error: {0}")]
    Store(String),

    #[error("Mapping error: {0}")]
    Mapping(#[from] MapError),
}

/// Result type alias for application operations
pub type AppResult<T> = Result<T, AppError>;
