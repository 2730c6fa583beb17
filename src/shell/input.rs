//! Input validation
//!
//! Pure checks on raw console entries. The session calls these in a loop
//! and re-prompts on `InvalidInput`.

use crate::error::{Result, StockError};

pub const NOT_A_NUMBER: &str = "Please enter a whole number in the format as shown in the example...";
pub const NEGATIVE_NUMBER: &str =
    "Please enter a positive whole number in the format as shown in the example...";

/// Parse a whole number that must not be negative
///
/// Surrounding whitespace is ignored. Zero is accepted.
pub fn parse_non_negative(input: &str) -> Result<u64> {
    let trimmed = input.trim();

    if let Ok(value) = trimmed.parse::<u64>() {
        return Ok(value);
    }

    match trimmed.strip_prefix('-').map(str::parse::<u64>) {
        Some(Ok(0)) => Ok(0),
        Some(Ok(_)) => Err(StockError::InvalidInput(NEGATIVE_NUMBER.to_string())),
        _ => Err(StockError::InvalidInput(NOT_A_NUMBER.to_string())),
    }
}

/// Whether a yes/no answer means yes
///
/// Anything other than `yes` or `y` (case-insensitive) is a no.
pub fn parse_confirmation(input: &str) -> bool {
    matches!(input.trim().to_lowercase().as_str(), "yes" | "y")
}
