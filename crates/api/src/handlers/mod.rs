pub mod client;
pub mod image;
pub mod public;
pub mod shoot;
pub mod site_config;
