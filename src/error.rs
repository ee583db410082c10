//! Error types for Armory
//!
//! Centralized error handling using thiserror.

use thiserror::Error;

/// All error types that can occur in Armory
#[derive(Debug, Error)]
pub enum ArmoryError {
    /// Catalog file could not be read or parsed
    #[error("Catalog error: {0}")]
    Catalog(String),

    /// Tool declares a file type with no registered launch strategy
    #[error("Unsupported tool type: {0}")]
    UnsupportedType(String),

    /// External process failed to spawn or exited with failure
    #[error("Process error: {0}")]
    Process(String),

    /// User input could not be interpreted
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Console/terminal interaction error
    #[error("Console error: {0}")]
    Console(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization/deserialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias for Armory operations
pub type Result<T> = std::result::Result<T, ArmoryError>;
