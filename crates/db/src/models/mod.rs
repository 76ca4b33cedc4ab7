//! Row structs and request DTOs, one module per entity.

pub mod client;
pub mod image;
pub mod shoot;
