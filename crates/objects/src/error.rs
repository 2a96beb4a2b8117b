//! Error types for JSON conversion.

use thiserror::Error;

/// Result type alias for JSON conversion.
pub type Result<T> = std::result::Result<T, JsonError>;

/// Errors that can occur while converting objects to or from JSON.
#[derive(Error, Debug)]
pub enum JsonError {
    /// The value could not be written as JSON.
    #[error("failed to serialize to JSON: {0}")]
    Serialize(#[source] serde_json::Error),

    /// The text was not valid JSON for the requested type.
    #[error("failed to deserialize from JSON: {0}")]
    Deserialize(#[source] serde_json::Error),
}
