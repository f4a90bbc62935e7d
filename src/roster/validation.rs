//! Pure field validators used by the entry prompts. Each function either
//! returns the accepted, typed value or the reason it was rejected; none of
//! them touch the roster.

use super::error::ValidationError;
use super::{MAX_IDENTIFIER, MAX_NAME_LEN, MAX_SCORE, MIN_IDENTIFIER, MIN_SCORE};

/// Parse a raw identifier line. Range and uniqueness are checked separately
/// by [`validate_identifier`].
pub fn parse_identifier(raw: &str) -> Result<i64, ValidationError> {
    raw.trim()
        .parse::<i64>()
        .map_err(|_| ValidationError::NotANumber)
}

/// Accept `id` when it is a 4-digit identifier not yet present in `accepted`.
pub fn validate_identifier(id: i64, accepted: &[u32]) -> Result<u32, ValidationError> {
    let id = u32::try_from(id)
        .ok()
        .filter(|id| (MIN_IDENTIFIER..=MAX_IDENTIFIER).contains(id))
        .ok_or(ValidationError::IdentifierRange(id))?;

    if accepted.contains(&id) {
        return Err(ValidationError::DuplicateIdentifier(id));
    }
    Ok(id)
}

/// Names are ASCII letters, spaces and hyphens, start with a letter, never
/// contain two spaces in a row, and stay under [`MAX_NAME_LEN`] characters.
pub fn validate_name(name: &str) -> Result<(), ValidationError> {
    if name.is_empty() {
        return Err(ValidationError::EmptyName);
    }
    if name.chars().count() >= MAX_NAME_LEN {
        return Err(ValidationError::NameTooLong);
    }

    let allowed = |ch: char| ch.is_ascii_alphabetic() || ch == ' ' || ch == '-';
    if !name.chars().all(allowed) || name.contains("  ") {
        return Err(ValidationError::NameCharset);
    }
    if !name.starts_with(|ch: char| ch.is_ascii_alphabetic()) {
        return Err(ValidationError::NameCharset);
    }
    Ok(())
}

/// Both bounds are inclusive. NaN is rejected because it is outside every range.
pub fn validate_score(score: f64) -> Result<f64, ValidationError> {
    if (MIN_SCORE..=MAX_SCORE).contains(&score) {
        Ok(score)
    } else {
        Err(ValidationError::ScoreRange)
    }
}

pub fn parse_score(raw: &str) -> Result<f64, ValidationError> {
    let score = raw
        .trim()
        .parse::<f64>()
        .map_err(|_| ValidationError::NotANumber)?;
    validate_score(score)
}

/// Accept a start-up count in `1..=max`.
pub fn validate_count(count: i64, max: usize) -> Result<usize, ValidationError> {
    usize::try_from(count)
        .ok()
        .filter(|count| (1..=max).contains(count))
        .ok_or(ValidationError::CountRange { min: 1, max })
}

pub fn parse_count(raw: &str, max: usize) -> Result<usize, ValidationError> {
    let count = raw
        .trim()
        .parse::<i64>()
        .map_err(|_| ValidationError::NotANumber)?;
    validate_count(count, max)
}
