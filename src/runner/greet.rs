//! The `greet` command

use crate::cli::find_option;
use crate::error::{UsageError, UsageResult};

/// Accepted names for the greeting target, in priority order
pub const NAME_FLAGS: &[&str] = &["--name", "-n"];

/// Build the greeting line for the arguments following `greet`
pub fn greet(args: &[String]) -> UsageResult<String> {
    let name = find_option(args, NAME_FLAGS)
        .ok_or_else(|| UsageError::MissingOption(NAME_FLAGS[0].to_string()))?;

    if name.trim().is_empty() {
        return Err(UsageError::BlankValue(NAME_FLAGS[0].to_string()));
    }

    Ok(format!("Hello, {}!", name))
}
