//! Image entity models and DTOs.
//!
//! Rows in `shoot_images` record uploads registered against a shoot;
//! the bytes themselves live in object storage behind `storage_path`.

use darkroom_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `shoot_images` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct ShootImage {
    pub id: DbId,
    pub shoot_id: DbId,
    pub filename: String,
    pub storage_path: String,
    pub original_filename: Option<String>,
    pub file_size_bytes: Option<i64>,
    pub is_hidden: bool,
    /// Display order within the shoot. Strictly ordered per shoot;
    /// gaps are fine, duplicates are not.
    pub position: i32,
    pub download_count: i64,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for registering an uploaded image.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateShootImage {
    pub shoot_id: DbId,
    pub filename: String,
    pub storage_path: String,
    pub original_filename: Option<String>,
    pub file_size_bytes: Option<i64>,
    pub is_hidden: Option<bool>,
}

/// DTO for updating an existing image.
///
/// `shoot_id` re-homes the image ("move to archive"); position in the
/// target shoot is assigned by the repository, not the caller.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateShootImage {
    pub filename: Option<String>,
    pub storage_path: Option<String>,
    pub original_filename: Option<String>,
    pub file_size_bytes: Option<i64>,
    pub is_hidden: Option<bool>,
    pub shoot_id: Option<DbId>,
}
