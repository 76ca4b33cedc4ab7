//! Gallery appearance settings for a shoot.
//!
//! Stored as JSONB on the shoot row. Enum fields are validated by
//! deserialization; the background color is free text and validated
//! here. Every field has a default so rows created before a setting
//! existed deserialize cleanly.

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/// How images are arranged in the public gallery.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GalleryLayout {
    Grid,
    Masonry,
    Slideshow,
}

/// Gap between images.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GallerySpacing {
    Compact,
    Regular,
    Relaxed,
}

/// Border treatment around each image.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BorderStyle {
    None,
    Thin,
    Frame,
}

/// Horizontal alignment of the cover image banner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CoverAlignment {
    Left,
    Center,
    Right,
}

/// Placement of the gallery navigation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NavPosition {
    Top,
    Side,
    Hidden,
}

/// Appearance settings for one shoot's gallery page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GallerySettings {
    pub layout: GalleryLayout,
    pub spacing: GallerySpacing,
    pub border_style: BorderStyle,
    /// CSS hex color, `#rgb` or `#rrggbb`.
    pub background_color: String,
    pub cover_alignment: CoverAlignment,
    pub nav_position: NavPosition,
}

impl Default for GallerySettings {
    fn default() -> Self {
        Self {
            layout: GalleryLayout::Grid,
            spacing: GallerySpacing::Regular,
            border_style: BorderStyle::None,
            background_color: "#ffffff".to_string(),
            cover_alignment: CoverAlignment::Center,
            nav_position: NavPosition::Top,
        }
    }
}

/// Validate the non-enum parts of gallery settings.
pub fn validate_gallery_settings(settings: &GallerySettings) -> Result<(), CoreError> {
    if !is_hex_color(&settings.background_color) {
        return Err(CoreError::Validation(format!(
            "background_color '{}' is not a hex color (#rgb or #rrggbb)",
            settings.background_color
        )));
    }
    Ok(())
}

fn is_hex_color(value: &str) -> bool {
    let Some(digits) = value.strip_prefix('#') else {
        return false;
    };
    matches!(digits.len(), 3 | 6) && digits.chars().all(|c| c.is_ascii_hexdigit())
}
