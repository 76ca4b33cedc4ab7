//! Generic request-field validation.
//!
//! Handlers validate before any write so a failed request never leaves
//! partial state; every error names the offending field.

use crate::error::CoreError;

/// Ensure a required text field is non-blank after trimming and within
/// `max_len`.
pub fn validate_required_text(field: &str, value: &str, max_len: usize) -> Result<(), CoreError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(CoreError::Validation(format!("{field} must not be blank")));
    }
    if trimmed.len() > max_len {
        return Err(CoreError::Validation(format!(
            "{field} exceeds maximum length of {max_len} characters"
        )));
    }
    Ok(())
}

/// Extract a required field from an optional DTO slot, naming the field
/// when absent.
pub fn require<T>(field: &str, value: Option<T>) -> Result<T, CoreError> {
    value.ok_or_else(|| CoreError::Validation(format!("{field} is required")))
}

/// Minimal shape check for an email address: something on both sides of
/// one `@`. Deliverability is not this layer's problem.
pub fn validate_email(field: &str, value: &str) -> Result<(), CoreError> {
    let valid = match value.split_once('@') {
        Some((local, domain)) => !local.trim().is_empty() && domain.contains('.'),
        None => false,
    };
    if valid {
        Ok(())
    } else {
        Err(CoreError::Validation(format!(
            "{field} is not a valid email address"
        )))
    }
}
