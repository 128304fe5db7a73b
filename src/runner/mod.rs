//! Command handlers
//!
//! Each handler takes the tokens following its command word and returns the
//! line to print, or the reason the usage block applies instead.

pub mod add;
pub mod context;
pub mod greet;

// Re-export main types
pub use add::*;
pub use context::*;
pub use greet::*;
