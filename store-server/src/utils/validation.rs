//! Input validation helpers
//!
//! Centralized text length constants and validation functions.
//! Limits are chosen based on:
//! - Reasonable UX limits for names and labels
//! - SQLite TEXT has no built-in length enforcement

use crate::utils::AppError;

// ── Text length limits ──────────────────────────────────────────────

/// Entity names: zone, method, bundle, configuration labels
pub const MAX_NAME_LEN: usize = 200;

/// Method codes: short identifiers like "STD", "EXP"
pub const MAX_CODE_LEN: usize = 16;

/// Delivery estimate display strings
pub const MAX_ESTIMATE_LEN: usize = 64;

// ── Validation helpers (CRUD handlers) ──────────────────────────────

/// Validate that a required string is non-empty and within the length limit.
pub fn validate_required_text(value: &str, field: &str, max_len: usize) -> Result<(), AppError> {
    if value.trim().is_empty() {
        return Err(AppError::Validation(format!("{field} must not be empty")));
    }
    if value.len() > max_len {
        return Err(AppError::Validation(format!(
            "{field} is too long ({} chars, max {max_len})",
            value.len()
        )));
    }
    Ok(())
}

/// Validate that an optional string, if present, is within the length limit.
pub fn validate_optional_text(
    value: &Option<String>,
    field: &str,
    max_len: usize,
) -> Result<(), AppError> {
    if let Some(v) = value
        && v.len() > max_len
    {
        return Err(AppError::Validation(format!(
            "{field} is too long ({} chars, max {max_len})",
            v.len()
        )));
    }
    Ok(())
}

// ── Validation helpers (shipping) ───────────────────────────────────

/// Validate a postcode: exactly 4 ASCII digits.
pub fn validate_postcode(postcode: &str) -> Result<(), AppError> {
    if postcode.len() != 4 || !postcode.bytes().all(|b| b.is_ascii_digit()) {
        return Err(AppError::Validation(
            "postcode must be exactly 4 digits".to_string(),
        ));
    }
    Ok(())
}

/// Validate a zone postcode pattern: exactly 4 characters, digits or `x`.
pub fn validate_postcode_pattern(pattern: &str) -> Result<(), AppError> {
    if pattern.len() != 4 || !pattern.bytes().all(|b| b.is_ascii_digit() || b == b'x') {
        return Err(AppError::Validation(
            "postcode_pattern must be 4 characters of digits or 'x'".to_string(),
        ));
    }
    Ok(())
}

/// Validate a parcel weight in grams: must be positive.
pub fn validate_weight_g(weight_g: i64) -> Result<(), AppError> {
    if weight_g <= 0 {
        return Err(AppError::Validation(
            "weight_g must be greater than zero".to_string(),
        ));
    }
    Ok(())
}
