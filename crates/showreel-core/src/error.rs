//! Error types for the showreel core

use thiserror::Error;

/// Result type alias using the showreel Error
pub type Result<T> = std::result::Result<T, Error>;

/// Showreel error types
///
/// Recoverable storage conditions (absent or unreadable slots, failed
/// writes) are handled and logged where they occur; only conditions the
/// caller must act on surface here.
#[derive(Error, Debug)]
pub enum Error {
    #[error("Project '{0}' not found")]
    ProjectNotFound(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}
