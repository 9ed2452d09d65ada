use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while managing the pantry or querying recipes.
///
/// Every variant is recoverable: callers report it and carry on.
#[derive(Error, Debug)]
pub enum PantryError {
    /// Input rejected before touching the store (e.g. an empty ingredient name)
    #[error("Invalid input: {0}")]
    ValidationError(String),

    /// The backing file exists but could not be read or parsed
    #[error("Failed to read ingredients file {}: {reason}", path.display())]
    FileReadError { path: PathBuf, reason: String },

    /// The backing file could not be written
    #[error("Failed to write ingredients file {}: {reason}", path.display())]
    FileWriteError { path: PathBuf, reason: String },

    /// The recipe API answered with a non-success status
    #[error("Recipe API returned HTTP {status}")]
    HttpError { status: u16 },

    /// The recipe API could not be reached
    #[error("Failed to reach recipe API: {0}")]
    NetworkError(#[source] reqwest::Error),

    /// The recipe API response could not be understood
    #[error("Failed to parse recipe API response: {0}")]
    ParseError(String),

    /// No API key was configured
    #[error("API_KEY is not set; cannot query the recipe API")]
    MissingApiKey,

    /// Configuration error
    #[error("Configuration error: {0}")]
    ConfigError(#[from] config::ConfigError),
}

impl PantryError {
    pub(crate) fn file_read(path: impl Into<PathBuf>, reason: impl ToString) -> Self {
        PantryError::FileReadError {
            path: path.into(),
            reason: reason.to_string(),
        }
    }

    pub(crate) fn file_write(path: impl Into<PathBuf>, reason: impl ToString) -> Self {
        PantryError::FileWriteError {
            path: path.into(),
            reason: reason.to_string(),
        }
    }
}
