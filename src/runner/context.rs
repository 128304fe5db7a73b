//! Execution context for command handling
//!
//! The context carries the verbosity level and owns diagnostic output,
//! which always goes to standard error so that standard output stays
//! reserved for command results and the usage block.

use colored::Colorize;
use std::env;

/// Environment variable selecting the verbosity level
pub const VERBOSITY_ENV: &str = "CLI_SAMPLE_VERBOSITY";

/// Execution context shared by the router and the command handlers
#[derive(Debug, Clone)]
pub struct Context {
    /// Verbosity level
    pub verbosity: Verbosity,
}

/// Verbosity levels for diagnostic output
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Verbosity {
    Silent = 0,
    Quiet = 1,
    Normal = 2,
    Verbose = 3,
}

impl Verbosity {
    /// Parse a verbosity name, case-insensitively
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "silent" => Some(Verbosity::Silent),
            "quiet" => Some(Verbosity::Quiet),
            "normal" => Some(Verbosity::Normal),
            "verbose" => Some(Verbosity::Verbose),
            _ => None,
        }
    }

    /// Read the verbosity from the environment, defaulting to `Normal`
    pub fn from_env() -> Self {
        env::var(VERBOSITY_ENV)
            .ok()
            .and_then(|v| Verbosity::parse(&v))
            .unwrap_or(Verbosity::Normal)
    }
}

impl Context {
    /// Create a new context with default settings
    pub fn new() -> Self {
        Context {
            verbosity: Verbosity::Normal,
        }
    }

    /// Create a context configured from the environment
    pub fn from_env() -> Self {
        Context::new().with_verbosity(Verbosity::from_env())
    }

    /// Set verbosity level
    pub fn with_verbosity(mut self, verbosity: Verbosity) -> Self {
        self.verbosity = verbosity;
        self
    }

    /// Print error message
    pub fn print_error(&self, message: &str) {
        if self.verbosity >= Verbosity::Quiet {
            eprintln!("{} {}", "[ERROR]".red().bold(), message);
        }
    }

    /// Print debug message (only in verbose mode)
    pub fn print_debug(&self, message: &str) {
        if self.verbosity >= Verbosity::Verbose {
            eprintln!("{} {}", "[DEBUG]".dimmed(), message);
        }
    }

    /// Print command dispatch message
    pub fn print_command_start(&self, command: &str) {
        self.print_debug(&format!("Running command: {}", command));
    }

    /// Print usage fallback message
    pub fn print_usage_fallback(&self, reason: &str) {
        self.print_debug(&format!("Showing usage: {}", reason));
    }
}

impl Default for Context {
    fn default() -> Self {
        Self::new()
    }
}
