//! Error types for bridge-config

/// Result type for bridge-config operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in bridge-config operations
///
/// Reads never fail: a missing or unreachable path is reported through
/// `None`/`false`. Only writes and payload decoding produce errors.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The dotted path has no segments and cannot be assigned
    #[error("Invalid configuration path: '{path}'")]
    InvalidPath { path: String },

    /// Host payload or typed read could not be (de)serialized
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl Error {
    pub fn invalid_path(path: impl Into<String>) -> Self {
        Self::InvalidPath { path: path.into() }
    }
}
