//! Route definitions for the public gallery surface.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::public;
use crate::state::AppState;

/// Routes mounted at `/public`. No staff identity required.
///
/// ```text
/// GET  /shoots                  -> list_shoots
/// GET  /shoots/{slug}           -> get_shoot_by_slug (+1 view)
/// POST /images/{id}/download    -> record_download
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/shoots", get(public::list_shoots))
        .route("/shoots/{slug}", get(public::get_shoot_by_slug))
        .route("/images/{id}/download", post(public::record_download))
}
