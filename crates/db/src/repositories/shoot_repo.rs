//! Repository for the `shoots` table.

use sqlx::types::Json;
use sqlx::PgPool;

use darkroom_core::gallery::GallerySettings;
use darkroom_core::types::DbId;

use crate::models::shoot::{CreateShoot, Shoot, ShootWithImages, UpdateShoot};
use crate::repositories::ImageRepo;

/// Column list shared across queries to avoid repetition.
pub(crate) const COLUMNS: &str = "id, client_id, title, description, notes, shoot_type, shoot_date, \
    location, is_private, slug, custom_title, seo_tags, cover_image_id, gallery_settings, \
    view_count, created_at, updated_at";

/// Provides CRUD operations for shoots.
pub struct ShootRepo;

impl ShootRepo {
    /// Insert a new shoot, returning the created row.
    ///
    /// The caller has already validated the required fields are
    /// present and resolved `slug` (custom or derived from the title);
    /// a slug collision surfaces as a unique violation on
    /// `uq_shoots_slug`.
    pub async fn create(
        pool: &PgPool,
        input: &CreateShoot,
        slug: &str,
    ) -> Result<Shoot, sqlx::Error> {
        let query = format!(
            "INSERT INTO shoots
                (client_id, title, description, notes, shoot_type, shoot_date,
                 location, is_private, slug, custom_title, seo_tags, gallery_settings)
             VALUES ($1, $2, $3, $4, $5, $6, $7, COALESCE($8, false), $9, $10,
                     COALESCE($11, '{{}}'), $12)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Shoot>(&query)
            .bind(input.client_id)
            .bind(&input.title)
            .bind(&input.description)
            .bind(&input.notes)
            .bind(&input.shoot_type)
            .bind(input.shoot_date)
            .bind(&input.location)
            .bind(input.is_private)
            .bind(slug)
            .bind(&input.custom_title)
            .bind(&input.seo_tags)
            .bind(Json(input.gallery_settings.clone().unwrap_or_default()))
            .fetch_one(pool)
            .await
    }

    /// Find a shoot by its internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Shoot>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM shoots WHERE id = $1");
        sqlx::query_as::<_, Shoot>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all shoots, most recent shoot date first (admin view).
    pub async fn list(pool: &PgPool) -> Result<Vec<Shoot>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM shoots ORDER BY shoot_date DESC, id DESC");
        sqlx::query_as::<_, Shoot>(&query).fetch_all(pool).await
    }

    /// List publicly visible shoots.
    pub async fn list_public(pool: &PgPool) -> Result<Vec<Shoot>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM shoots WHERE is_private = false
             ORDER BY shoot_date DESC, id DESC"
        );
        sqlx::query_as::<_, Shoot>(&query).fetch_all(pool).await
    }

    /// List the shoots belonging to one client.
    pub async fn list_by_client(pool: &PgPool, client_id: DbId) -> Result<Vec<Shoot>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM shoots WHERE client_id = $1
             ORDER BY shoot_date DESC, id DESC"
        );
        sqlx::query_as::<_, Shoot>(&query)
            .bind(client_id)
            .fetch_all(pool)
            .await
    }

    /// Fetch a shoot together with its images, sorted by position.
    pub async fn get_with_images(
        pool: &PgPool,
        id: DbId,
    ) -> Result<Option<ShootWithImages>, sqlx::Error> {
        let Some(shoot) = Self::find_by_id(pool, id).await? else {
            return Ok(None);
        };
        let images = ImageRepo::list_by_shoot(pool, id).await?;
        Ok(Some(ShootWithImages { shoot, images }))
    }

    /// Update a shoot. Only non-`None` fields in `input` are applied;
    /// `id` and `client_id` are immutable here (see `reassign_client`).
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateShoot,
    ) -> Result<Option<Shoot>, sqlx::Error> {
        let query = format!(
            "UPDATE shoots SET
                title            = COALESCE($2, title),
                description      = COALESCE($3, description),
                notes            = COALESCE($4, notes),
                shoot_type       = COALESCE($5, shoot_type),
                shoot_date       = COALESCE($6, shoot_date),
                location         = COALESCE($7, location),
                is_private       = COALESCE($8, is_private),
                slug             = COALESCE($9, slug),
                custom_title     = COALESCE($10, custom_title),
                seo_tags         = COALESCE($11, seo_tags),
                gallery_settings = COALESCE($12, gallery_settings)
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Shoot>(&query)
            .bind(id)
            .bind(&input.title)
            .bind(&input.description)
            .bind(&input.notes)
            .bind(&input.shoot_type)
            .bind(input.shoot_date)
            .bind(&input.location)
            .bind(input.is_private)
            .bind(&input.slug)
            .bind(&input.custom_title)
            .bind(&input.seo_tags)
            .bind(input.gallery_settings.clone().map(Json))
            .fetch_optional(pool)
            .await
    }

    /// Set or clear the cover image designation.
    ///
    /// Belongs-to-shoot validation happens in the caller; the database
    /// FK only guarantees the id references some image.
    pub async fn set_cover(
        pool: &PgPool,
        id: DbId,
        cover_image_id: Option<DbId>,
    ) -> Result<Option<Shoot>, sqlx::Error> {
        let query = format!(
            "UPDATE shoots SET cover_image_id = $2 WHERE id = $1 RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Shoot>(&query)
            .bind(id)
            .bind(cover_image_id)
            .fetch_optional(pool)
            .await
    }

    /// Move a shoot to a different client.
    pub async fn reassign_client(
        pool: &PgPool,
        id: DbId,
        client_id: DbId,
    ) -> Result<Option<Shoot>, sqlx::Error> {
        let query = format!("UPDATE shoots SET client_id = $2 WHERE id = $1 RETURNING {COLUMNS}");
        sqlx::query_as::<_, Shoot>(&query)
            .bind(id)
            .bind(client_id)
            .fetch_optional(pool)
            .await
    }

    /// Record one public gallery view. The counter only ever grows.
    ///
    /// Looks up by slug and only counts public shoots, so crawling
    /// private gallery URLs neither reveals nor mutates anything.
    pub async fn increment_view_by_slug(
        pool: &PgPool,
        slug: &str,
    ) -> Result<Option<Shoot>, sqlx::Error> {
        let query = format!(
            "UPDATE shoots SET view_count = view_count + 1
             WHERE slug = $1 AND is_private = false
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Shoot>(&query)
            .bind(slug)
            .fetch_optional(pool)
            .await
    }

    /// Delete a shoot by ID (images cascade). Returns `true` if a row
    /// was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM shoots WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
