//! Error types for Snapdock.
//!
//! The docking engine itself never errors: given well-formed rectangles it
//! returns a result or `None`. These types cover the fallible ambient
//! surfaces (persistence, configuration) and serialize with structured
//! `kind`/`message` fields for the shell frontend.

use serde::Serialize;
use thiserror::Error;

/// Errors that can occur outside the pure docking paths.
#[derive(Debug, Error, Serialize)]
#[serde(tag = "kind", content = "message")]
pub enum SnapdockError {
    /// Configuration error.
    #[error("Configuration error: {0}")]
    ConfigError(String),
    /// Layout store operation failed.
    #[error("Store error: {0}")]
    StoreError(String),
    /// Serialization or deserialization failed.
    #[error("Serialization error: {0}")]
    SerializationError(String),
    /// IO error.
    #[error("IO error: {0}")]
    IoError(String),
}

impl From<std::io::Error> for SnapdockError {
    fn from(err: std::io::Error) -> Self { Self::IoError(err.to_string()) }
}

impl From<serde_json::Error> for SnapdockError {
    fn from(err: serde_json::Error) -> Self { Self::SerializationError(err.to_string()) }
}
