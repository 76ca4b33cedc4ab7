//! Handlers for the `/images` resource.
//!
//! Uploads themselves go to object storage out of band; these endpoints
//! register and manage the resulting records.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;

use darkroom_core::error::CoreError;
use darkroom_core::fields::validate_required_text;
use darkroom_core::types::DbId;
use darkroom_db::models::image::{CreateShootImage, ShootImage, UpdateShootImage};
use darkroom_db::repositories::{ImageRepo, ShootRepo};

use crate::error::{AppError, AppResult};
use crate::middleware::identity::StaffIdentity;
use crate::state::AppState;

/// Maximum length of a stored filename.
const MAX_FILENAME_LENGTH: usize = 255;

/// POST /api/v1/images
///
/// Registers an uploaded image against a shoot, appending it to the
/// shoot's display order.
pub async fn create(
    identity: StaffIdentity,
    State(state): State<AppState>,
    Json(input): Json<CreateShootImage>,
) -> AppResult<(StatusCode, Json<ShootImage>)> {
    validate_required_text("filename", &input.filename, MAX_FILENAME_LENGTH)?;
    validate_required_text("storage_path", &input.storage_path, 1024)?;

    ShootRepo::find_by_id(&state.pool, input.shoot_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Shoot",
            id: input.shoot_id,
        }))?;

    let image = ImageRepo::create(&state.pool, &input).await?;
    tracing::info!(
        image_id = image.id,
        shoot_id = image.shoot_id,
        position = image.position,
        staff_id = identity.staff_id,
        "Image registered",
    );
    Ok((StatusCode::CREATED, Json(image)))
}

/// PATCH /api/v1/images/{id}
///
/// Field updates, including the "move to archive" flow: a `shoot_id`
/// re-homes the image to the end of the target shoot's order.
pub async fn update(
    identity: StaffIdentity,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateShootImage>,
) -> AppResult<Json<ShootImage>> {
    if let Some(filename) = &input.filename {
        validate_required_text("filename", filename, MAX_FILENAME_LENGTH)?;
    }

    if let Some(target_shoot_id) = input.shoot_id {
        ShootRepo::find_by_id(&state.pool, target_shoot_id)
            .await?
            .ok_or(AppError::Core(CoreError::NotFound {
                entity: "Shoot",
                id: target_shoot_id,
            }))?;
        ImageRepo::move_to_shoot(&state.pool, id, target_shoot_id)
            .await?
            .ok_or(AppError::Core(CoreError::NotFound { entity: "Image", id }))?;
        tracing::info!(
            image_id = id,
            shoot_id = target_shoot_id,
            staff_id = identity.staff_id,
            "Image moved to another shoot",
        );
    }

    let image = ImageRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "Image", id }))?;
    Ok(Json(image))
}

/// DELETE /api/v1/images/{id}
pub async fn delete(
    identity: StaffIdentity,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    let deleted = ImageRepo::delete(&state.pool, id).await?;
    if deleted {
        tracing::info!(image_id = id, staff_id = identity.staff_id, "Image deleted");
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::NotFound { entity: "Image", id }))
    }
}
