//! Route definitions for the site-content configuration document.

use axum::routing::{get, patch};
use axum::Router;

use crate::handlers::site_config;
use crate::state::AppState;

/// Routes mounted at `/site-config`.
///
/// ```text
/// GET   /        -> get_config (public; marketing pages render from it)
/// PATCH /bulk    -> bulk_update (staff)
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(site_config::get_config))
        .route("/bulk", patch(site_config::bulk_update))
}
