//! Error types for cli-sample

use std::io;
use std::num::ParseIntError;
use thiserror::Error;

/// Result type alias for application-level operations
pub type Result<T> = std::result::Result<T, AppError>;

/// Top-level error type for the application
#[derive(Error, Debug)]
pub enum AppError {
    /// The invocation was not understood; the usage block applies
    #[error("Usage error: {0}")]
    Usage(#[from] UsageError),

    /// I/O errors
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

/// Reasons an invocation falls back to the usage block
#[derive(Error, Debug)]
pub enum UsageError {
    #[error("no command given")]
    NoCommand,

    #[error("help requested")]
    HelpRequested,

    #[error("unknown command '{0}'")]
    UnknownCommand(String),

    #[error("missing value for {0}")]
    MissingOption(String),

    #[error("value for {0} is blank")]
    BlankValue(String),

    #[error("invalid integer for {name}: '{value}' ({source})")]
    InvalidInteger {
        name: String,
        value: String,
        source: ParseIntError,
    },
}

/// Specialized result type for argument handling
pub type UsageResult<T> = std::result::Result<T, UsageError>;
