//! Pure domain logic for the darkroom studio backend.
//!
//! No I/O lives here: error taxonomy, shared type aliases, slug
//! generation, shoot-type and gallery-settings validation, and the
//! sequence-order rules that the persistence layer applies
//! transactionally.

pub mod error;
pub mod fields;
pub mod gallery;
pub mod sequencing;
pub mod shoot;
pub mod slug;
pub mod types;

pub use error::CoreError;
