//! cli-sample - A simple command-line sample
//!
//! Two commands are provided: `greet` prints a greeting for a name and `add`
//! prints the sum of two integers. Anything else prints the usage block.

// Public modules
pub mod cli;
pub mod error;
pub mod runner;

// Re-export commonly used types
pub use error::{AppError, Result, UsageError};
