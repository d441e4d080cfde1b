//! Error types for MiniMessage parsing.

use thiserror::Error;

/// Errors that abort a parse.
///
/// Unbalanced open/close tags and unknown tag names are never errors; they
/// degrade to no-ops and literal text respectively.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum MiniMessageError {
    /// A click or hover tag with fewer fields than its syntax requires.
    #[error("malformed tag (too few fields): <{0}>")]
    MalformedTag(String),

    /// A click or hover action name outside the fixed enumeration.
    #[error("invalid action `{action}` in tag <{token}>")]
    InvalidAction { action: String, token: String },

    /// Bad caller-supplied argument (e.g. an odd-length placeholder list).
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// Hover bodies nested deeper than the configured limit.
    #[error("markup nested deeper than {0} levels")]
    TooDeep(usize),
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, MiniMessageError>;
