//! Error types for the watch organizer.

use thiserror::Error;

/// Result type alias using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for the watch organizer.
#[derive(Error, Debug)]
pub enum Error {
    // Input errors
    #[error("Could not find '{0}'")]
    InputNotFound(String),

    #[error("Failed to read input: {0}")]
    InputRead(String),

    #[error("No 'Title' column in {0}")]
    MissingTitleColumn(String),

    // IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // JSON errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    // Generic errors
    #[error("{0}")]
    Other(String),
}

impl Error {
    /// Create a generic error from a string.
    pub fn other<S: Into<String>>(msg: S) -> Self {
        Error::Other(msg.into())
    }

    /// Whether this error only means the input was absent.
    ///
    /// The binary treats this as a graceful stop rather than a failure.
    pub fn is_input_not_found(&self) -> bool {
        matches!(self, Error::InputNotFound(_))
    }
}

impl From<csv::Error> for Error {
    fn from(err: csv::Error) -> Self {
        Error::InputRead(err.to_string())
    }
}
