pub mod config;
pub mod metadata;

pub use config::AppConfig;
pub use metadata::ImageMetadata;
