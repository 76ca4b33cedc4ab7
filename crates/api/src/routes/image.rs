//! Route definitions for the `/images` resource.

use axum::routing::{patch, post};
use axum::Router;

use crate::handlers::image;
use crate::state::AppState;

/// Routes mounted at `/images`.
///
/// ```text
/// POST   /        -> create (register an upload)
/// PATCH  /{id}    -> update (including archive move)
/// DELETE /{id}    -> delete
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", post(image::create))
        .route("/{id}", patch(image::update).delete(image::delete))
}
