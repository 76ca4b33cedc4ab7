//! Gallery sequencing and customization operations.
//!
//! Everything here writes in one transaction: a crash or failure leaves
//! either the old complete state or the new complete state, never an
//! interleaving. The `uq_shoot_images_position` constraint is deferred,
//! so positions may collide transiently inside a transaction and are
//! strict again at commit.
//!
//! Set validation (complete permutation, cover belongs to shoot) is
//! pure logic in `darkroom_core` and runs in the handlers before any
//! write; concurrent conflicting edits can only fail a transaction,
//! never corrupt the order at rest.

use sqlx::types::Json;
use sqlx::PgPool;

use darkroom_core::sequencing::Direction;
use darkroom_core::types::DbId;

use crate::models::image::ShootImage;
use crate::models::shoot::{ApplyCustomization, Shoot};
use crate::repositories::shoot_repo::COLUMNS as SHOOT_COLUMNS;
use crate::repositories::ImageRepo;

/// Transactional gallery operations: reorder, single-step move, and the
/// combined customization update.
pub struct GalleryRepo;

impl GalleryRepo {
    /// Assign `position = index + 1` for the complete ordering of a
    /// shoot's images, in one atomic batch.
    ///
    /// Callers must have validated that `ordered_ids` is a full
    /// permutation of the shoot's image set. Returns the refreshed
    /// ordered list.
    pub async fn reorder(
        pool: &PgPool,
        shoot_id: DbId,
        ordered_ids: &[DbId],
    ) -> Result<Vec<ShootImage>, sqlx::Error> {
        let mut tx = pool.begin().await?;
        apply_order(&mut tx, shoot_id, ordered_ids).await?;
        tx.commit().await?;

        ImageRepo::list_by_shoot(pool, shoot_id).await
    }

    /// Swap an image with its immediate neighbor in the current order.
    ///
    /// A move past the boundary (first image up, last image down) is a
    /// no-op. Returns `None` when the image is not part of the shoot,
    /// otherwise the refreshed ordered list.
    pub async fn move_image(
        pool: &PgPool,
        shoot_id: DbId,
        image_id: DbId,
        direction: Direction,
    ) -> Result<Option<Vec<ShootImage>>, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let rows: Vec<(DbId, i32)> = sqlx::query_as(
            "SELECT id, position FROM shoot_images
             WHERE shoot_id = $1 ORDER BY position FOR UPDATE",
        )
        .bind(shoot_id)
        .fetch_all(&mut *tx)
        .await?;

        let Some(index) = rows.iter().position(|(id, _)| *id == image_id) else {
            return Ok(None);
        };
        let neighbor = match direction {
            Direction::Up if index > 0 => index - 1,
            Direction::Down if index + 1 < rows.len() => index + 1,
            _ => {
                // Boundary: nothing to swap.
                return Ok(Some(ImageRepo::list_by_shoot(pool, shoot_id).await?));
            }
        };

        let (target_id, target_pos) = rows[index];
        let (neighbor_id, neighbor_pos) = rows[neighbor];
        swap_positions(&mut tx, target_id, neighbor_pos, neighbor_id, target_pos).await?;
        tx.commit().await?;

        Ok(Some(ImageRepo::list_by_shoot(pool, shoot_id).await?))
    }

    /// Apply a full gallery customization: scalar/object field updates,
    /// cover designation, and resequencing, committed together.
    ///
    /// All input validation (required fields, cover ownership, complete
    /// sequence set) happens in the caller before this runs; nothing is
    /// written on a validation failure. `ordered_ids` is the flattened
    /// `image_sequences` map, when one was supplied.
    ///
    /// Returns `None` if the shoot does not exist.
    pub async fn apply_customization(
        pool: &PgPool,
        shoot_id: DbId,
        input: &ApplyCustomization,
        ordered_ids: Option<&[DbId]>,
    ) -> Result<Option<Shoot>, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let query = format!(
            "UPDATE shoots SET
                title            = COALESCE($2, title),
                location         = COALESCE($3, location),
                shoot_date       = COALESCE($4, shoot_date),
                description      = COALESCE($5, description),
                notes            = COALESCE($6, notes),
                shoot_type       = COALESCE($7, shoot_type),
                client_id        = COALESCE($8, client_id),
                is_private       = COALESCE($9, is_private),
                seo_tags         = COALESCE($10, seo_tags),
                custom_title     = COALESCE($11, custom_title),
                slug             = COALESCE($12, slug),
                gallery_settings = COALESCE($13, gallery_settings),
                cover_image_id   = CASE WHEN $14 THEN $15 ELSE cover_image_id END
             WHERE id = $1
             RETURNING {SHOOT_COLUMNS}"
        );
        let updated = sqlx::query_as::<_, Shoot>(&query)
            .bind(shoot_id)
            .bind(&input.title)
            .bind(&input.location)
            .bind(input.shoot_date)
            .bind(&input.description)
            .bind(&input.notes)
            .bind(&input.shoot_type)
            .bind(input.client_id)
            .bind(input.is_private)
            .bind(&input.seo_tags)
            .bind(&input.custom_title)
            .bind(&input.slug)
            .bind(input.gallery_settings.clone().map(Json))
            .bind(input.banner_image_id.is_some())
            .bind(input.banner_image_id.flatten())
            .fetch_optional(&mut *tx)
            .await?;
        let Some(shoot) = updated else {
            return Ok(None);
        };

        if let Some(ordered_ids) = ordered_ids {
            apply_order(&mut tx, shoot_id, ordered_ids).await?;
        }

        tx.commit().await?;
        Ok(Some(shoot))
    }
}

/// Write `position = index + 1` for each id, scoped to the shoot.
async fn apply_order(
    tx: &mut sqlx::Transaction<'_, sqlx::Postgres>,
    shoot_id: DbId,
    ordered_ids: &[DbId],
) -> Result<(), sqlx::Error> {
    for (index, image_id) in ordered_ids.iter().enumerate() {
        sqlx::query(
            "UPDATE shoot_images SET position = $3
             WHERE id = $2 AND shoot_id = $1",
        )
        .bind(shoot_id)
        .bind(image_id)
        .bind(index as i32 + 1)
        .execute(&mut **tx)
        .await?;
    }
    Ok(())
}

async fn swap_positions(
    tx: &mut sqlx::Transaction<'_, sqlx::Postgres>,
    first_id: DbId,
    first_pos: i32,
    second_id: DbId,
    second_pos: i32,
) -> Result<(), sqlx::Error> {
    sqlx::query("UPDATE shoot_images SET position = $2 WHERE id = $1")
        .bind(first_id)
        .bind(first_pos)
        .execute(&mut **tx)
        .await?;
    sqlx::query("UPDATE shoot_images SET position = $2 WHERE id = $1")
        .bind(second_id)
        .bind(second_pos)
        .execute(&mut **tx)
        .await?;
    Ok(())
}
