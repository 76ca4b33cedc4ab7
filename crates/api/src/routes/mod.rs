pub mod client;
pub mod health;
pub mod image;
pub mod public;
pub mod shoot;
pub mod site_config;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /clients                                 list, create
/// /clients/{id}                            get, update, delete
/// /clients/{id}/shoots                     shoots for a client
///
/// /shoots                                  list, create
/// /shoots/{id}                             get (with images), update, delete
/// /shoots/{id}/customization               full gallery customization (PATCH)
/// /shoots/{id}/cover                       set/toggle cover image (PUT)
/// /shoots/{id}/order                       complete reorder (PUT)
/// /shoots/{id}/images/{image_id}/move      move one step up/down (POST)
/// /shoots/{id}/reassign                    reassign to another client (POST)
///
/// /images                                  register upload (POST)
/// /images/{id}                             update/archive-move, delete
///
/// /public/shoots                           public gallery listing
/// /public/shoots/{slug}                    public gallery (+1 view)
/// /public/images/{id}/download             record a download (POST)
///
/// /site-config                             effective merged document
/// /site-config/bulk                        deep-merge partial update (PATCH)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/clients", client::router())
        .nest("/shoots", shoot::router())
        .nest("/images", image::router())
        .nest("/public", public::router())
        .nest("/site-config", site_config::router())
}
