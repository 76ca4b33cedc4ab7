//! Handlers for the `/shoots` resource: CRUD, cover designation,
//! sequencing, and the combined gallery customization update.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use chrono::{Datelike, Utc};
use serde::Deserialize;

use darkroom_core::error::CoreError;
use darkroom_core::fields::{require, validate_required_text};
use darkroom_core::gallery::{validate_gallery_settings, GallerySettings};
use darkroom_core::sequencing::{order_from_positions, validate_complete_order, Direction};
use darkroom_core::shoot::{validate_shoot_type, MAX_LOCATION_LENGTH, MAX_TITLE_LENGTH};
use darkroom_core::slug::{is_valid_slug, shoot_slug, slugify};
use darkroom_core::types::DbId;
use darkroom_db::models::image::ShootImage;
use darkroom_db::models::shoot::{ApplyCustomization, CreateShoot, Shoot, ShootWithImages, UpdateShoot};
use darkroom_db::repositories::{ClientRepo, GalleryRepo, ImageRepo, ShootRepo};

use crate::error::{AppError, AppResult};
use crate::middleware::identity::StaffIdentity;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Request payloads
// ---------------------------------------------------------------------------

/// Body of `PUT /shoots/{id}/cover`.
#[derive(Debug, Deserialize)]
pub struct SetCoverRequest {
    pub image_id: Option<DbId>,
}

/// Body of `PUT /shoots/{id}/order`: the complete desired ordering.
#[derive(Debug, Deserialize)]
pub struct ReorderRequest {
    pub image_ids: Vec<DbId>,
}

/// Body of `POST /shoots/{id}/images/{image_id}/move`.
#[derive(Debug, Deserialize)]
pub struct MoveImageRequest {
    pub direction: Direction,
}

/// Body of `POST /shoots/{id}/reassign`.
#[derive(Debug, Deserialize)]
pub struct ReassignRequest {
    pub client_id: DbId,
}

// ---------------------------------------------------------------------------
// CRUD
// ---------------------------------------------------------------------------

/// POST /api/v1/shoots
pub async fn create(
    identity: StaffIdentity,
    State(state): State<AppState>,
    Json(input): Json<CreateShoot>,
) -> AppResult<(StatusCode, Json<Shoot>)> {
    let client_id = require("client_id", input.client_id)?;
    let title = require("title", input.title.clone())?;
    validate_required_text("title", &title, MAX_TITLE_LENGTH)?;
    let shoot_type = require("shoot_type", input.shoot_type.clone())?;
    validate_shoot_type(&shoot_type)?;
    require("shoot_date", input.shoot_date)?;
    let location = require("location", input.location.clone())?;
    validate_required_text("location", &location, MAX_LOCATION_LENGTH)?;
    if let Some(settings) = &input.gallery_settings {
        validate_gallery_settings(settings)?;
    }

    ClientRepo::find_by_id(&state.pool, client_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Client",
            id: client_id,
        }))?;

    let slug = resolve_slug(input.slug.as_deref(), &title)?;
    let shoot = ShootRepo::create(&state.pool, &input, &slug).await?;
    tracing::info!(
        shoot_id = shoot.id,
        slug = %shoot.slug,
        staff_id = identity.staff_id,
        "Shoot created",
    );
    Ok((StatusCode::CREATED, Json(shoot)))
}

/// GET /api/v1/shoots
pub async fn list(
    _identity: StaffIdentity,
    State(state): State<AppState>,
) -> AppResult<Json<Vec<Shoot>>> {
    let shoots = ShootRepo::list(&state.pool).await?;
    Ok(Json(shoots))
}

/// GET /api/v1/shoots/{id}
pub async fn get_by_id(
    _identity: StaffIdentity,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<ShootWithImages>> {
    let with_images = ShootRepo::get_with_images(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "Shoot", id }))?;
    Ok(Json(with_images))
}

/// PATCH /api/v1/shoots/{id}
pub async fn update(
    _identity: StaffIdentity,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateShoot>,
) -> AppResult<Json<Shoot>> {
    validate_optional_fields(
        input.title.as_deref(),
        input.location.as_deref(),
        input.shoot_type.as_deref(),
        input.slug.as_deref(),
        input.gallery_settings.as_ref(),
    )?;

    let shoot = ShootRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "Shoot", id }))?;
    Ok(Json(shoot))
}

/// DELETE /api/v1/shoots/{id}
pub async fn delete(
    identity: StaffIdentity,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    let deleted = ShootRepo::delete(&state.pool, id).await?;
    if deleted {
        tracing::info!(shoot_id = id, staff_id = identity.staff_id, "Shoot deleted");
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::NotFound { entity: "Shoot", id }))
    }
}

// ---------------------------------------------------------------------------
// Gallery operations
// ---------------------------------------------------------------------------

/// PATCH /api/v1/shoots/{id}/customization
///
/// The single entry point for "everything about how this gallery looks
/// and is ordered". All validation runs before any write; the writes
/// themselves commit in one transaction.
pub async fn customize(
    identity: StaffIdentity,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<ApplyCustomization>,
) -> AppResult<Json<Shoot>> {
    validate_optional_fields(
        input.title.as_deref(),
        input.location.as_deref(),
        input.shoot_type.as_deref(),
        input.slug.as_deref(),
        input.gallery_settings.as_ref(),
    )?;

    ShootRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "Shoot", id }))?;

    if let Some(client_id) = input.client_id {
        ClientRepo::find_by_id(&state.pool, client_id)
            .await?
            .ok_or(AppError::Core(CoreError::NotFound {
                entity: "Client",
                id: client_id,
            }))?;
    }

    if let Some(Some(banner_id)) = input.banner_image_id {
        ensure_image_in_shoot(&state, banner_id, id, "banner_image_id").await?;
    }

    let ordered = match &input.image_sequences {
        Some(sequences) => {
            let current = ImageRepo::list_ids_by_shoot(&state.pool, id).await?;
            let order = order_from_positions(sequences);
            validate_complete_order(&current, &order)?;
            Some(order)
        }
        None => None,
    };

    let shoot = GalleryRepo::apply_customization(&state.pool, id, &input, ordered.as_deref())
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "Shoot", id }))?;

    tracing::info!(
        shoot_id = id,
        staff_id = identity.staff_id,
        resequenced = ordered.is_some(),
        "Gallery customization applied",
    );
    Ok(Json(shoot))
}

/// PUT /api/v1/shoots/{id}/cover
///
/// Setting the current cover id again toggles the designation off;
/// `null` clears it unconditionally.
pub async fn set_cover(
    identity: StaffIdentity,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<SetCoverRequest>,
) -> AppResult<Json<Shoot>> {
    let shoot = ShootRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "Shoot", id }))?;

    let new_cover = match input.image_id {
        None => None,
        Some(image_id) if shoot.cover_image_id == Some(image_id) => None,
        Some(image_id) => {
            ensure_image_in_shoot(&state, image_id, id, "image_id").await?;
            Some(image_id)
        }
    };

    let updated = ShootRepo::set_cover(&state.pool, id, new_cover)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "Shoot", id }))?;
    tracing::info!(
        shoot_id = id,
        cover_image_id = ?updated.cover_image_id,
        staff_id = identity.staff_id,
        "Cover image updated",
    );
    Ok(Json(updated))
}

/// PUT /api/v1/shoots/{id}/order
///
/// Takes the complete desired ordering; partial sets are rejected and
/// leave existing positions untouched.
pub async fn reorder(
    identity: StaffIdentity,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<ReorderRequest>,
) -> AppResult<Json<Vec<ShootImage>>> {
    ShootRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "Shoot", id }))?;

    let current = ImageRepo::list_ids_by_shoot(&state.pool, id).await?;
    validate_complete_order(&current, &input.image_ids)?;

    let images = GalleryRepo::reorder(&state.pool, id, &input.image_ids).await?;
    tracing::info!(
        shoot_id = id,
        image_count = images.len(),
        staff_id = identity.staff_id,
        "Gallery reordered",
    );
    Ok(Json(images))
}

/// POST /api/v1/shoots/{id}/images/{image_id}/move
///
/// Single-step move; a move past the boundary is a no-op.
pub async fn move_image(
    _identity: StaffIdentity,
    State(state): State<AppState>,
    Path((id, image_id)): Path<(DbId, DbId)>,
    Json(input): Json<MoveImageRequest>,
) -> AppResult<Json<Vec<ShootImage>>> {
    ShootRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "Shoot", id }))?;

    let images = GalleryRepo::move_image(&state.pool, id, image_id, input.direction)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Image",
            id: image_id,
        }))?;
    Ok(Json(images))
}

/// POST /api/v1/shoots/{id}/reassign
///
/// Explicitly move a shoot to another client.
pub async fn reassign(
    identity: StaffIdentity,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<ReassignRequest>,
) -> AppResult<Json<Shoot>> {
    ClientRepo::find_by_id(&state.pool, input.client_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Client",
            id: input.client_id,
        }))?;

    let shoot = ShootRepo::reassign_client(&state.pool, id, input.client_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "Shoot", id }))?;
    tracing::info!(
        shoot_id = id,
        client_id = input.client_id,
        staff_id = identity.staff_id,
        "Shoot reassigned",
    );
    Ok(Json(shoot))
}

// ---------------------------------------------------------------------------
// Shared validation
// ---------------------------------------------------------------------------

/// Validate the optional text/enum fields shared by update and
/// customization payloads.
fn validate_optional_fields(
    title: Option<&str>,
    location: Option<&str>,
    shoot_type: Option<&str>,
    slug: Option<&str>,
    gallery_settings: Option<&GallerySettings>,
) -> AppResult<()> {
    if let Some(title) = title {
        validate_required_text("title", title, MAX_TITLE_LENGTH)?;
    }
    if let Some(location) = location {
        validate_required_text("location", location, MAX_LOCATION_LENGTH)?;
    }
    if let Some(shoot_type) = shoot_type {
        validate_shoot_type(shoot_type)?;
    }
    if let Some(slug) = slug {
        if !is_valid_slug(slug) {
            return Err(AppError::Core(CoreError::Validation(
                "slug must be lowercase alphanumerics and hyphens".to_string(),
            )));
        }
    }
    if let Some(settings) = gallery_settings {
        validate_gallery_settings(settings)?;
    }
    Ok(())
}

/// Resolve the slug for a new shoot: a supplied one must be canonical,
/// a derived one is `slugify(title)-gallery-{year}`.
fn resolve_slug(custom: Option<&str>, title: &str) -> AppResult<String> {
    match custom {
        Some(slug) => {
            if !is_valid_slug(slug) {
                return Err(AppError::Core(CoreError::Validation(
                    "slug must be lowercase alphanumerics and hyphens".to_string(),
                )));
            }
            Ok(slug.to_string())
        }
        None => {
            if slugify(title).is_empty() {
                return Err(AppError::Core(CoreError::Validation(
                    "title must contain at least one alphanumeric character".to_string(),
                )));
            }
            Ok(shoot_slug(title, Utc::now().year()))
        }
    }
}

/// Validate that `image_id` exists and belongs to `shoot_id`.
async fn ensure_image_in_shoot(
    state: &AppState,
    image_id: DbId,
    shoot_id: DbId,
    field: &str,
) -> AppResult<()> {
    let image = ImageRepo::find_by_id(&state.pool, image_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Image",
            id: image_id,
        }))?;
    if image.shoot_id != shoot_id {
        return Err(AppError::Core(CoreError::Validation(format!(
            "{field} {image_id} does not belong to shoot {shoot_id}"
        ))));
    }
    Ok(())
}
