use crate::types::DbId;

/// Domain-level error taxonomy.
///
/// Raised by the validation helpers in this crate and by the
/// site-configuration store; the HTTP layer is the only place these are
/// translated into status codes.
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Entity not found: {entity} with id {id}")]
    NotFound { entity: &'static str, id: DbId },

    #[error("Validation failed: {0}")]
    Validation(String),

    #[error("Conflict: {0}")]
    Conflict(String),

    /// A durable read or write failed. Prior state is left intact by
    /// every operation that can raise this.
    #[error("Storage failure: {0}")]
    Storage(String),

    #[error("Internal error: {0}")]
    Internal(String),
}
