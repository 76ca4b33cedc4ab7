//! Repository for the `shoot_images` table.

use sqlx::PgPool;

use darkroom_core::types::DbId;

use crate::models::image::{CreateShootImage, ShootImage, UpdateShootImage};

/// Column list shared across queries to avoid repetition.
pub(crate) const COLUMNS: &str = "id, shoot_id, filename, storage_path, original_filename, \
    file_size_bytes, is_hidden, position, download_count, created_at, updated_at";

/// Provides CRUD operations for shoot images.
pub struct ImageRepo;

impl ImageRepo {
    /// Insert a new image at the end of its shoot's order
    /// (`max(position) + 1`, or 1 for the first image).
    pub async fn create(pool: &PgPool, input: &CreateShootImage) -> Result<ShootImage, sqlx::Error> {
        let query = format!(
            "INSERT INTO shoot_images
                (shoot_id, filename, storage_path, original_filename, file_size_bytes,
                 is_hidden, position)
             VALUES ($1, $2, $3, $4, $5, COALESCE($6, false),
                     (SELECT COALESCE(MAX(position), 0) + 1 FROM shoot_images WHERE shoot_id = $1))
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, ShootImage>(&query)
            .bind(input.shoot_id)
            .bind(&input.filename)
            .bind(&input.storage_path)
            .bind(&input.original_filename)
            .bind(input.file_size_bytes)
            .bind(input.is_hidden)
            .fetch_one(pool)
            .await
    }

    /// Find an image by its internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<ShootImage>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM shoot_images WHERE id = $1");
        sqlx::query_as::<_, ShootImage>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List a shoot's images in display order.
    pub async fn list_by_shoot(pool: &PgPool, shoot_id: DbId) -> Result<Vec<ShootImage>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM shoot_images WHERE shoot_id = $1 ORDER BY position"
        );
        sqlx::query_as::<_, ShootImage>(&query)
            .bind(shoot_id)
            .fetch_all(pool)
            .await
    }

    /// The id set of a shoot's images, in display order.
    pub async fn list_ids_by_shoot(pool: &PgPool, shoot_id: DbId) -> Result<Vec<DbId>, sqlx::Error> {
        sqlx::query_scalar("SELECT id FROM shoot_images WHERE shoot_id = $1 ORDER BY position")
            .bind(shoot_id)
            .fetch_all(pool)
            .await
    }

    /// Update an image's fields. Only non-`None` fields are applied;
    /// `shoot_id` and `position` are handled by `move_to_shoot`.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateShootImage,
    ) -> Result<Option<ShootImage>, sqlx::Error> {
        let query = format!(
            "UPDATE shoot_images SET
                filename          = COALESCE($2, filename),
                storage_path      = COALESCE($3, storage_path),
                original_filename = COALESCE($4, original_filename),
                file_size_bytes   = COALESCE($5, file_size_bytes),
                is_hidden         = COALESCE($6, is_hidden)
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, ShootImage>(&query)
            .bind(id)
            .bind(&input.filename)
            .bind(&input.storage_path)
            .bind(&input.original_filename)
            .bind(input.file_size_bytes)
            .bind(input.is_hidden)
            .fetch_optional(pool)
            .await
    }

    /// Re-home an image to a different shoot (the "move to archive"
    /// flow), appending it to the target shoot's order.
    ///
    /// One transaction: if the image is the source shoot's cover, the
    /// designation is cleared; the image then gets the target's next
    /// position. Returns `None` if the image does not exist.
    pub async fn move_to_shoot(
        pool: &PgPool,
        id: DbId,
        target_shoot_id: DbId,
    ) -> Result<Option<ShootImage>, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let current: Option<(DbId,)> =
            sqlx::query_as("SELECT shoot_id FROM shoot_images WHERE id = $1 FOR UPDATE")
                .bind(id)
                .fetch_optional(&mut *tx)
                .await?;
        let Some((source_shoot_id,)) = current else {
            return Ok(None);
        };

        sqlx::query(
            "UPDATE shoots SET cover_image_id = NULL
             WHERE id = $1 AND cover_image_id = $2",
        )
        .bind(source_shoot_id)
        .bind(id)
        .execute(&mut *tx)
        .await?;

        let query = format!(
            "UPDATE shoot_images SET
                shoot_id = $2,
                position = (SELECT COALESCE(MAX(position), 0) + 1
                            FROM shoot_images WHERE shoot_id = $2)
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        let moved = sqlx::query_as::<_, ShootImage>(&query)
            .bind(id)
            .bind(target_shoot_id)
            .fetch_one(&mut *tx)
            .await?;

        tx.commit().await?;
        Ok(Some(moved))
    }

    /// Record one download of an image. The counter only ever grows.
    pub async fn increment_download(
        pool: &PgPool,
        id: DbId,
    ) -> Result<Option<ShootImage>, sqlx::Error> {
        let query = format!(
            "UPDATE shoot_images SET download_count = download_count + 1
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, ShootImage>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Delete an image by ID. Returns `true` if a row was removed.
    ///
    /// Siblings are not renumbered; ordering is by relative position,
    /// not density. A dangling cover designation is cleared by the FK.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM shoot_images WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
