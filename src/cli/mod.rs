//! CLI interface and argument handling
//!
//! This module routes the argument vector to a command and resolves
//! flag values for the command handlers.

pub mod app;
pub mod options;

// Re-export main types
pub use app::*;
pub use options::*;
