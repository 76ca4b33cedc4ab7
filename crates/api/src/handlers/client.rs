//! Handlers for the `/clients` resource.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;

use darkroom_core::error::CoreError;
use darkroom_core::fields::{validate_email, validate_required_text};
use darkroom_core::slug::{is_valid_slug, slugify};
use darkroom_core::types::DbId;
use darkroom_db::models::client::{Client, CreateClient, UpdateClient};
use darkroom_db::models::shoot::Shoot;
use darkroom_db::repositories::{ClientRepo, ShootRepo};

use crate::error::{AppError, AppResult};
use crate::middleware::identity::StaffIdentity;
use crate::state::AppState;

/// Maximum length of a client display name.
const MAX_NAME_LENGTH: usize = 200;

/// POST /api/v1/clients
///
/// The slug is derived from the name once, here; it never changes
/// unless an update supplies one explicitly.
pub async fn create(
    identity: StaffIdentity,
    State(state): State<AppState>,
    Json(input): Json<CreateClient>,
) -> AppResult<(StatusCode, Json<Client>)> {
    validate_required_text("name", &input.name, MAX_NAME_LENGTH)?;
    validate_email("email", &input.email)?;

    let slug = slugify(&input.name);
    if slug.is_empty() {
        return Err(AppError::Core(CoreError::Validation(
            "name must contain at least one alphanumeric character".to_string(),
        )));
    }

    let client = ClientRepo::create(&state.pool, &input, &slug, Some(identity.staff_id)).await?;
    tracing::info!(client_id = client.id, slug = %client.slug, "Client created");
    Ok((StatusCode::CREATED, Json(client)))
}

/// GET /api/v1/clients
pub async fn list(
    _identity: StaffIdentity,
    State(state): State<AppState>,
) -> AppResult<Json<Vec<Client>>> {
    let clients = ClientRepo::list(&state.pool).await?;
    Ok(Json(clients))
}

/// GET /api/v1/clients/{id}
pub async fn get_by_id(
    _identity: StaffIdentity,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<Client>> {
    let client = ClientRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Client",
            id,
        }))?;
    Ok(Json(client))
}

/// PATCH /api/v1/clients/{id}
pub async fn update(
    _identity: StaffIdentity,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateClient>,
) -> AppResult<Json<Client>> {
    if let Some(name) = &input.name {
        validate_required_text("name", name, MAX_NAME_LENGTH)?;
    }
    if let Some(email) = &input.email {
        validate_email("email", email)?;
    }
    if let Some(slug) = &input.slug {
        // An explicitly supplied slug must already be in canonical form.
        if !is_valid_slug(slug) {
            return Err(AppError::Core(CoreError::Validation(
                "slug must be lowercase alphanumerics and hyphens".to_string(),
            )));
        }
    }

    let client = ClientRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Client",
            id,
        }))?;
    Ok(Json(client))
}

/// GET /api/v1/clients/{id}/shoots
pub async fn list_shoots(
    _identity: StaffIdentity,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<Vec<Shoot>>> {
    ClientRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Client",
            id,
        }))?;
    let shoots = ShootRepo::list_by_client(&state.pool, id).await?;
    Ok(Json(shoots))
}

/// DELETE /api/v1/clients/{id}
///
/// Refused (409) while shoots still reference the client; reassign
/// them first.
pub async fn delete(
    identity: StaffIdentity,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    let deleted = ClientRepo::delete(&state.pool, id).await?;
    if deleted {
        tracing::info!(client_id = id, staff_id = identity.staff_id, "Client deleted");
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::NotFound {
            entity: "Client",
            id,
        }))
    }
}
