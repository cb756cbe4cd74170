//! Error types for the silo_core library.
//!
//! These cover infrastructure failures only. Domain outcomes (unknown ids,
//! rejected quantities, name collisions) are ordinary return values on the
//! registry operations and never surface through this type.

use std::io;

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Core error type for silo_core operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// IO error occurred
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// JSON serialization/deserialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// TOML parsing error
    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    /// Configuration validation error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Persistent store error (corrupted or unreadable registry snapshot)
    #[error("Store error: {0}")]
    Store(String),
}
