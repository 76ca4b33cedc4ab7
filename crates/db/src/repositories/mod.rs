//! Repositories: unit structs with async CRUD over a [`sqlx::PgPool`].
//!
//! Single-statement operations return `Result<_, sqlx::Error>`;
//! multi-write operations open one transaction so a failure can never
//! leave a half-applied state.

pub mod client_repo;
pub mod gallery_repo;
pub mod image_repo;
pub mod shoot_repo;

pub use client_repo::ClientRepo;
pub use gallery_repo::GalleryRepo;
pub use image_repo::ImageRepo;
pub use shoot_repo::ShootRepo;
