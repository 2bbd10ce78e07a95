//! Error handling types for syntax-select
//!
//! None of these errors reach the end user. The selection commands absorb
//! them, log them, and leave the selection unchanged.

use thiserror::Error;

/// Comprehensive error type for selection operations
#[derive(Debug, Error)]
pub enum SelectError {
    /// Grammar could not be loaded into a parser
    #[error("Failed to load grammar for {language}: {message}")]
    ParserLoad { language: String, message: String },

    /// Parser returned no tree
    #[error("Parser produced no tree for language: {language}")]
    Parse { language: String },

    /// Language identifier has no strategy
    #[error("Unsupported language: {language}")]
    UnknownLanguage { language: String },

    /// Selection offsets that do not fit the document
    #[error("Invalid range {start}..{end}")]
    InvalidRange { start: usize, end: usize },

    /// Configuration error
    #[error("Invalid configuration: {message}")]
    Config { message: String },

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for selection operations
pub type SelectResult<T> = Result<T, SelectError>;

/// Helper functions for common error patterns
impl SelectError {
    /// Create a parser load error
    pub fn parser_load(language: impl Into<String>, message: impl Into<String>) -> Self {
        SelectError::ParserLoad {
            language: language.into(),
            message: message.into(),
        }
    }

    /// Create a parse error
    pub fn parse(language: impl Into<String>) -> Self {
        SelectError::Parse {
            language: language.into(),
        }
    }

    /// Create an unknown language error
    pub fn unknown_language(language: impl Into<String>) -> Self {
        SelectError::UnknownLanguage {
            language: language.into(),
        }
    }

    /// Create an invalid range error
    pub fn invalid_range(start: usize, end: usize) -> Self {
        SelectError::InvalidRange { start, end }
    }

    /// Create a configuration error
    pub fn config(message: impl Into<String>) -> Self {
        SelectError::Config {
            message: message.into(),
        }
    }
}
