//! Handlers for the editable site-content document.

use axum::extract::State;
use axum::Json;
use serde_json::Value;

use crate::error::AppResult;
use crate::middleware::identity::StaffIdentity;
use crate::state::AppState;

/// GET /api/v1/site-config
///
/// The effective document: defaults deep-merged with persisted
/// overrides. Public, since the marketing pages render from it.
pub async fn get_config(State(state): State<AppState>) -> Json<Value> {
    Json(state.site_config.get().await)
}

/// PATCH /api/v1/site-config/bulk
///
/// Deep-merges a partial document into the overrides and persists the
/// result atomically. Returns the new effective document.
pub async fn bulk_update(
    identity: StaffIdentity,
    State(state): State<AppState>,
    Json(patch): Json<Value>,
) -> AppResult<Json<Value>> {
    state.site_config.apply_bulk_update(patch).await?;
    tracing::info!(staff_id = identity.staff_id, "Site config updated");
    Ok(Json(state.site_config.get().await))
}
