//! Parsing of durations typed by the user

use std::time::Duration;

use crate::error::InputError;

/// Parse a non-negative number of seconds, fractions allowed (`--timer 2.5`)
pub fn parse_seconds(raw: &str) -> Result<Duration, InputError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(InputError::Empty);
    }

    let secs: f64 = trimmed
        .parse()
        .map_err(|_| InputError::NotANumber(trimmed.to_string()))?;
    if secs.is_nan() {
        return Err(InputError::NotANumber(trimmed.to_string()));
    }
    if secs.is_sign_negative() && secs != 0.0 {
        return Err(InputError::Negative(trimmed.to_string()));
    }

    Duration::try_from_secs_f64(secs.abs()).map_err(|_| InputError::TooLarge(trimmed.to_string()))
}

/// Parse a non-negative whole number of seconds (menu prompt)
pub fn parse_whole_seconds(raw: &str) -> Result<u64, InputError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(InputError::Empty);
    }

    match trimmed.parse::<i128>() {
        Ok(secs) if secs < 0 => Err(InputError::Negative(trimmed.to_string())),
        Ok(secs) => u64::try_from(secs).map_err(|_| InputError::TooLarge(trimmed.to_string())),
        Err(_) => Err(InputError::NotANumber(trimmed.to_string())),
    }
}
