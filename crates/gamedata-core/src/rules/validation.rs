//! Input validation rules for console answers
//!
//! Field labels double as the subject of the user-facing message, so they
//! are kept as named constants next to the rules that use them.

use std::str::FromStr;

use crate::errors::{GameDataError, Result};

pub const FIELD_ROOM_NAME: &str = "Room name";
pub const FIELD_ROOM_DESCRIPTION: &str = "Room description";
pub const FIELD_CHARACTER_NAME: &str = "Character name";
pub const FIELD_LEVEL: &str = "level";
pub const FIELD_ROOM_ID: &str = "room ID";

/// Require a non-empty answer
///
/// The answer is rejected when it is empty or whitespace-only. Accepted
/// answers are returned untouched (no trimming) so stored values match
/// what the user typed.
///
/// # Errors
/// * `EmptyField` - If `value` is empty after trimming
pub fn require_text<'a>(field: &str, value: &'a str) -> Result<&'a str> {
    if value.trim().is_empty() {
        return Err(GameDataError::EmptyField {
            field: field.to_string(),
        });
    }
    Ok(value)
}

/// Parse an integer answer
///
/// Surrounding whitespace and a leading sign are accepted.
///
/// # Errors
/// * `InvalidNumber` - If the trimmed input does not parse as `T`
pub fn parse_integer<T: FromStr>(field: &str, input: &str) -> Result<T> {
    input
        .trim()
        .parse::<T>()
        .map_err(|_| GameDataError::InvalidNumber {
            field: field.to_string(),
            input: input.to_string(),
        })
}
