//! Structural check run before any decoding

use tracing::warn;

use crate::error::FormatError;

/// Minimum length of the core code, in characters
pub const MIN_CORE_LEN: usize = 9;

/// Position of the `-` between law level and tech level
pub const SEPARATOR_INDEX: usize = 7;

pub const SEPARATOR: char = '-';

/// Tokens are separated by single spaces only; tabs and other whitespace
/// stay inside a token
pub const TOKEN_SEPARATOR: char = ' ';

/// Space-delimited tokens of the trimmed input. Runs of spaces do not
/// produce empty tokens.
pub fn tokens(input: &str) -> impl Iterator<Item = &str> {
    input
        .trim()
        .split(TOKEN_SEPARATOR)
        .filter(|token| !token.is_empty())
}

/// First token of the input
pub fn core_code(input: &str) -> Option<&str> {
    tokens(input).next()
}

/// Check that the core code is long enough and has its separator in place.
///
/// Individual category characters are not checked here; unknown ones
/// decode to `Unknown` instead.
pub fn validate(input: &str) -> Result<(), FormatError> {
    if input.is_empty() {
        warn!("Invalid UWP string provided");
        return Err(FormatError::Empty);
    }
    let code = core_code(input).unwrap_or_default();

    let result = match code.chars().nth(SEPARATOR_INDEX) {
        _ if code.chars().count() < MIN_CORE_LEN => Err(FormatError::CoreTooShort {
            code: code.to_string(),
        }),
        Some(SEPARATOR) => Ok(()),
        Some(found) => Err(FormatError::MissingSeparator {
            code: code.to_string(),
            found,
        }),
        None => Err(FormatError::CoreTooShort {
            code: code.to_string(),
        }),
    };

    if let Err(err) = &result {
        warn!(core = code, "{}", err);
    }
    result
}

/// Validation in the form the input field displays: `None` when valid,
/// otherwise the message to show
pub fn validation_message(input: &str) -> Option<String> {
    validate(input).err().map(|err| err.to_string())
}
