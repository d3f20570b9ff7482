pub mod config;
pub mod errors;

pub use config::{GalleryConfig, ProviderConfig, ServerConfig};
pub use errors::GalleryError;
