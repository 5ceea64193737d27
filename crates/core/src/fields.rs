//! Shared field validators used by every command before it writes.
//!
//! Each validator returns [`CoreError::InvalidInput`] or
//! [`CoreError::InvalidAmount`] naming the offending field, so the API layer
//! can surface a precise message without further mapping.

use crate::error::CoreError;

/// Maximum length for short free-text fields (names, item labels, numbers).
pub const MAX_SHORT_TEXT_LEN: usize = 200;

/// Maximum length for long free-text fields (descriptions, notes).
pub const MAX_LONG_TEXT_LEN: usize = 5000;

/// Require a non-blank string no longer than `max_len` characters.
pub fn require_text(field: &str, value: &str, max_len: usize) -> Result<(), CoreError> {
    if value.trim().is_empty() {
        return Err(CoreError::InvalidInput(format!("{field} must not be empty")));
    }
    if value.chars().count() > max_len {
        return Err(CoreError::InvalidInput(format!(
            "{field} must be at most {max_len} characters"
        )));
    }
    Ok(())
}

/// Validate an optional free-text field: may be empty, but bounded.
pub fn bounded_text(field: &str, value: &str, max_len: usize) -> Result<(), CoreError> {
    if value.chars().count() > max_len {
        return Err(CoreError::InvalidInput(format!(
            "{field} must be at most {max_len} characters"
        )));
    }
    Ok(())
}

/// Require a finite, non-negative monetary amount or quantity.
pub fn require_amount(field: &str, value: f64) -> Result<(), CoreError> {
    if !value.is_finite() {
        return Err(CoreError::InvalidAmount(format!("{field} must be a finite number")));
    }
    if value < 0.0 {
        return Err(CoreError::InvalidAmount(format!(
            "{field} must be >= 0, got {value}"
        )));
    }
    Ok(())
}

/// Require a strictly positive identifier reference.
pub fn require_positive_id(field: &str, value: i64) -> Result<(), CoreError> {
    if value <= 0 {
        return Err(CoreError::InvalidInput(format!(
            "{field} must be a positive id, got {value}"
        )));
    }
    Ok(())
}
