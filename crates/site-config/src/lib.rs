//! Editable site-content configuration for the studio's marketing pages.
//!
//! All page content the studio edits through the admin UI (hero slides,
//! service cards, testimonials, per-category landing sections, contact
//! info) lives in one deeply nested JSON document. The document served
//! to readers is `deep_merge(default, override)`: a compile-time default
//! plus a persisted override file holding only what was edited.
//!
//! The override file is the sole durable copy of site content edits, so
//! every update is written with a temp-file-then-rename discipline and
//! the in-memory copy is replaced only after the rename succeeds.

pub mod defaults;
pub mod merge;
pub mod store;

pub use defaults::default_document;
pub use merge::deep_merge;
pub use store::SiteConfigStore;
