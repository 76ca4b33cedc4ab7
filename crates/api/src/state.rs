use std::sync::Arc;

use darkroom_site_config::SiteConfigStore;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc` or is already `Clone`).
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub pool: darkroom_db::DbPool,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
    /// Site-content configuration store, loaded once at startup.
    pub site_config: Arc<SiteConfigStore>,
}
