//! Shoot entity models and DTOs.

use std::collections::HashMap;

use chrono::NaiveDate;
use darkroom_core::gallery::GallerySettings;
use darkroom_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::types::Json;
use sqlx::FromRow;

use crate::models::image::ShootImage;

/// A row from the `shoots` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Shoot {
    pub id: DbId,
    pub client_id: DbId,
    pub title: String,
    pub description: Option<String>,
    pub notes: Option<String>,
    /// Category tag, validated against `darkroom_core::shoot::SHOOT_TYPES`.
    pub shoot_type: String,
    pub shoot_date: NaiveDate,
    pub location: String,
    pub is_private: bool,
    /// Unique across all shoots; auto-derived from the title when not
    /// supplied at creation.
    pub slug: String,
    /// Display title for the gallery page; falls back to `title`.
    pub custom_title: Option<String>,
    pub seo_tags: Vec<String>,
    /// Designated cover image; always one of this shoot's images.
    pub cover_image_id: Option<DbId>,
    pub gallery_settings: Json<GallerySettings>,
    pub view_count: i64,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// A shoot with its images, pre-sorted by position.
#[derive(Debug, Clone, Serialize)]
pub struct ShootWithImages {
    pub shoot: Shoot,
    pub images: Vec<ShootImage>,
}

/// DTO for creating a new shoot.
///
/// `client_id`, `title`, `shoot_type`, `shoot_date`, and `location` are
/// required; they are optional here so the handler can reject a missing
/// one with a message naming the field instead of a bare decode error.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateShoot {
    pub client_id: Option<DbId>,
    pub title: Option<String>,
    pub description: Option<String>,
    pub notes: Option<String>,
    pub shoot_type: Option<String>,
    pub shoot_date: Option<NaiveDate>,
    pub location: Option<String>,
    pub is_private: Option<bool>,
    /// Custom slug; derived from the title when omitted.
    pub slug: Option<String>,
    pub custom_title: Option<String>,
    pub seo_tags: Option<Vec<String>>,
    pub gallery_settings: Option<GallerySettings>,
}

/// DTO for a partial metadata update.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateShoot {
    pub title: Option<String>,
    pub description: Option<String>,
    pub notes: Option<String>,
    pub shoot_type: Option<String>,
    pub shoot_date: Option<NaiveDate>,
    pub location: Option<String>,
    pub is_private: Option<bool>,
    pub slug: Option<String>,
    pub custom_title: Option<String>,
    pub seo_tags: Option<Vec<String>>,
    pub gallery_settings: Option<GallerySettings>,
}

/// DTO for the full gallery customization update.
///
/// Everything about how a shoot's gallery looks and is ordered, applied
/// in one transaction. `banner_image_id` is tri-state: absent leaves
/// the cover alone, `null` clears it, an id sets it (after
/// belongs-to-shoot validation).
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ApplyCustomization {
    pub title: Option<String>,
    pub location: Option<String>,
    pub shoot_date: Option<NaiveDate>,
    pub description: Option<String>,
    pub notes: Option<String>,
    pub shoot_type: Option<String>,
    pub client_id: Option<DbId>,
    pub is_private: Option<bool>,
    pub seo_tags: Option<Vec<String>>,
    pub custom_title: Option<String>,
    pub slug: Option<String>,
    pub banner_image_id: Option<Option<DbId>>,
    pub gallery_settings: Option<GallerySettings>,
    /// Complete map of image id -> desired position.
    pub image_sequences: Option<HashMap<DbId, i32>>,
}
