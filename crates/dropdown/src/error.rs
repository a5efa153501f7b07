//! Error types for configuration loading and event scripts.
//!
//! The state machine itself never fails; these errors come from the edges
//! where hosts hand us serialized input.

use thiserror::Error;

/// Errors produced while loading dropdown input.
#[derive(Error, Debug)]
pub enum Error {
    /// Configuration JSON could not be parsed.
    #[error("invalid dropdown configuration: {0}")]
    Json(#[from] serde_json::Error),

    /// Configuration or script could not be read.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// A line of an event script could not be parsed.
    #[error("script line {line}: {message}")]
    Script {
        /// One-based line number.
        line: usize,
        /// What was wrong with the line.
        message: String,
    },

    /// A script referred to an option index that does not exist.
    #[error("script line {line}: no option at index {index} ({count} options)")]
    UnknownOption {
        /// One-based line number.
        line: usize,
        /// Requested option index.
        index: usize,
        /// Number of configured options.
        count: usize,
    },
}

impl Error {
    /// Creates a script error for the given line.
    pub fn script(line: usize, message: impl Into<String>) -> Self {
        Self::Script {
            line,
            message: message.into(),
        }
    }

    /// Returns the script line the error refers to, if any.
    #[must_use]
    pub const fn line(&self) -> Option<usize> {
        match self {
            Self::Script { line, .. } | Self::UnknownOption { line, .. } => Some(*line),
            Self::Json(_) | Self::Io(_) => None,
        }
    }
}

/// Result alias for dropdown input loading.
pub type Result<T> = std::result::Result<T, Error>;
