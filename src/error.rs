//! Error types for the demo binary
//!
//! The pattern components themselves never fail; these errors cover writing
//! events to the console. Argument errors are reported by clap.
//! Uses thiserror for ergonomic error definitions.

use thiserror::Error;

/// Application-level errors
#[derive(Debug, Error)]
pub enum AppError {
    /// IO error while writing to the console
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization error
    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),
}
