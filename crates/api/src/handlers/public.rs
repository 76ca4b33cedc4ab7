//! Public (unauthenticated) gallery endpoints.
//!
//! Private shoots and hidden images simply do not exist here: lookups
//! that touch them return 404 rather than 403, so nothing is revealed.

use axum::extract::{Path, State};
use axum::Json;

use darkroom_core::types::DbId;
use darkroom_db::models::image::ShootImage;
use darkroom_db::models::shoot::{Shoot, ShootWithImages};
use darkroom_db::repositories::{ImageRepo, ShootRepo};

use crate::error::{AppError, AppResult};
use crate::state::AppState;

/// GET /api/v1/public/shoots
pub async fn list_shoots(State(state): State<AppState>) -> AppResult<Json<Vec<Shoot>>> {
    let shoots = ShootRepo::list_public(&state.pool).await?;
    Ok(Json(shoots))
}

/// GET /api/v1/public/shoots/{slug}
///
/// Each successful fetch counts one gallery view. Hidden images are
/// omitted from the public gallery.
pub async fn get_shoot_by_slug(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> AppResult<Json<ShootWithImages>> {
    let shoot = ShootRepo::increment_view_by_slug(&state.pool, &slug)
        .await?
        .ok_or_else(|| AppError::NotFound("Resource not found".to_string()))?;

    let images: Vec<ShootImage> = ImageRepo::list_by_shoot(&state.pool, shoot.id)
        .await?
        .into_iter()
        .filter(|image| !image.is_hidden)
        .collect();
    Ok(Json(ShootWithImages { shoot, images }))
}

/// POST /api/v1/public/images/{id}/download
///
/// Records one download and returns the image record (the caller
/// fetches the bytes from object storage via `storage_path`).
pub async fn record_download(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<ShootImage>> {
    let image = ImageRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| AppError::NotFound("Resource not found".to_string()))?;
    if image.is_hidden {
        return Err(AppError::NotFound("Resource not found".to_string()));
    }
    let shoot = ShootRepo::find_by_id(&state.pool, image.shoot_id)
        .await?
        .ok_or_else(|| AppError::NotFound("Resource not found".to_string()))?;
    if shoot.is_private {
        return Err(AppError::NotFound("Resource not found".to_string()));
    }

    let counted = ImageRepo::increment_download(&state.pool, id)
        .await?
        .ok_or_else(|| AppError::NotFound("Resource not found".to_string()))?;
    Ok(Json(counted))
}
