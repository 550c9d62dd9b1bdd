//! # Error Types
//!
//! This module defines error types used throughout the tablero library.

use thiserror::Error;

/// Main error type for tablero operations
#[derive(Debug, Error)]
pub enum TableroError {
    /// A question references a score that is not in the declared score list
    #[error("question in topic '{topic}' has score '{score}', which is not present in scores")]
    Validation { topic: String, score: String },

    /// Font loading or parsing failure (fatal, no fallback font is defined)
    #[error("Font error: {0}")]
    Font(String),

    /// Image encoding error
    #[error("Image error: {0}")]
    Image(String),

    /// Malformed input document
    #[error("Parse error: {0}")]
    Parse(#[from] serde_json::Error),

    /// I/O error wrapper
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
