//! The `add` command

use crate::cli::find_option;
use crate::error::{UsageError, UsageResult};

/// Build the sum line for the arguments following `add`.
///
/// The sum wraps on overflow, matching unchecked 32-bit arithmetic.
pub fn add(args: &[String]) -> UsageResult<String> {
    let a = int_option(args, "--a")?;
    let b = int_option(args, "--b")?;

    Ok(a.wrapping_add(b).to_string())
}

fn int_option(args: &[String], name: &str) -> UsageResult<i32> {
    let value = find_option(args, &[name])
        .ok_or_else(|| UsageError::MissingOption(name.to_string()))?;

    parse_int(value).map_err(|source| UsageError::InvalidInteger {
        name: name.to_string(),
        value: value.to_string(),
        source,
    })
}

/// Parse a base-10 `i32`, tolerating surrounding ASCII whitespace
pub fn parse_int(value: &str) -> Result<i32, std::num::ParseIntError> {
    value
        .trim_matches(|c: char| matches!(c, ' ' | '\t'..='\r'))
        .parse::<i32>()
}
