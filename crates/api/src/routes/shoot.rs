//! Route definitions for the `/shoots` resource.

use axum::routing::{get, patch, post, put};
use axum::Router;

use crate::handlers::shoot;
use crate::state::AppState;

/// Routes mounted at `/shoots`.
///
/// ```text
/// GET    /                              -> list
/// POST   /                              -> create
/// GET    /{id}                          -> get_by_id (with images)
/// PATCH  /{id}                          -> update
/// DELETE /{id}                          -> delete
/// PATCH  /{id}/customization            -> customize
/// PUT    /{id}/cover                    -> set_cover
/// PUT    /{id}/order                    -> reorder
/// POST   /{id}/images/{image_id}/move   -> move_image
/// POST   /{id}/reassign                 -> reassign
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(shoot::list).post(shoot::create))
        .route(
            "/{id}",
            get(shoot::get_by_id)
                .patch(shoot::update)
                .delete(shoot::delete),
        )
        .route("/{id}/customization", patch(shoot::customize))
        .route("/{id}/cover", put(shoot::set_cover))
        .route("/{id}/order", put(shoot::reorder))
        .route("/{id}/images/{image_id}/move", post(shoot::move_image))
        .route("/{id}/reassign", post(shoot::reassign))
}
