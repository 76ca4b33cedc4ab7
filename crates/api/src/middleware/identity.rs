//! Staff identity extraction.
//!
//! Authentication itself is external: an upstream auth proxy verifies
//! the session and forwards the resolved staff id in the
//! `x-staff-id` header. Handlers that mutate data take a
//! [`StaffIdentity`] argument; public read endpoints do not.

use axum::extract::FromRequestParts;
use axum::http::request::Parts;

use darkroom_core::types::DbId;

use crate::error::AppError;

/// Header set by the auth proxy with the resolved staff account id.
pub const STAFF_ID_HEADER: &str = "x-staff-id";

/// A resolved staff identity, required on admin endpoints.
#[derive(Debug, Clone, Copy)]
pub struct StaffIdentity {
    pub staff_id: DbId,
}

impl<S> FromRequestParts<S> for StaffIdentity
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .headers
            .get(STAFF_ID_HEADER)
            .and_then(|value| value.to_str().ok())
            .and_then(|value| value.parse::<DbId>().ok())
            .map(|staff_id| Self { staff_id })
            .ok_or_else(|| {
                AppError::Unauthorized("A staff identity is required for this operation".to_string())
            })
    }
}
