//! HTTP layer: configuration, shared state, error translation, routes,
//! and the router builder shared by the binary and the integration
//! tests.

pub mod config;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod router;
pub mod routes;
pub mod state;
