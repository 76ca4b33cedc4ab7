//! Shoot field constants and validation.
//!
//! Shoot categories are stored as plain text and validated against a
//! fixed list here, keeping the set in one place for the API layer and
//! the default landing-page content.

use crate::error::CoreError;

/// Maximum length of a shoot title.
pub const MAX_TITLE_LENGTH: usize = 200;

/// Maximum length of a location string.
pub const MAX_LOCATION_LENGTH: usize = 300;

/// Valid shoot category tags.
pub const SHOOT_TYPES: &[&str] = &[
    "wedding",
    "portrait",
    "corporate",
    "event",
    "family",
    "maternity",
    "engagement",
    "commercial",
    "lifestyle",
    "other",
];

/// Validate that `shoot_type` is one of the known category tags.
pub fn validate_shoot_type(shoot_type: &str) -> Result<(), CoreError> {
    if SHOOT_TYPES.contains(&shoot_type) {
        Ok(())
    } else {
        Err(CoreError::Validation(format!(
            "Invalid shoot_type '{shoot_type}'. Must be one of: {}",
            SHOOT_TYPES.join(", ")
        )))
    }
}
