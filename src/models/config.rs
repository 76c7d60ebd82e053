use serde::Deserialize;
use std::path::Path;

/// Application configuration loaded from an optional YAML file.
#[derive(Debug, Deserialize, Clone)]
pub struct AppConfig {
    /// Socket address the server binds to.
    #[serde(default = "default_bind")]
    pub bind: String,

    /// Maximum accepted upload size in bytes.
    #[serde(default = "default_max_upload_bytes")]
    pub max_upload_bytes: usize,

    /// JPEG quality used when encoding results (1-100).
    #[serde(default = "default_jpeg_quality")]
    pub jpeg_quality: u8,
}

fn default_bind() -> String {
    "0.0.0.0:5000".to_string()
}

fn default_max_upload_bytes() -> usize {
    16 * 1024 * 1024
}

fn default_jpeg_quality() -> u8 {
    90
}

impl AppConfig {
    /// Load configuration from a YAML file, falling back to defaults if the
    /// file is missing or malformed.
    ///
    /// With no explicit path, the `DARKROOM_CONFIG` environment variable is
    /// consulted; when that is unset too, defaults apply silently.
    pub fn load(path: Option<&Path>) -> Self {
        let path = match path {
            Some(p) => p.to_path_buf(),
            None => match std::env::var("DARKROOM_CONFIG") {
                Ok(p) => p.into(),
                Err(_) => return Self::default(),
            },
        };

        match std::fs::read_to_string(&path) {
            Ok(content) => match serde_yaml::from_str::<Self>(&content) {
                Ok(config) => {
                    tracing::info!(
                        bind = %config.bind,
                        max_upload_bytes = config.max_upload_bytes,
                        jpeg_quality = config.jpeg_quality,
                        "Loaded configuration"
                    );
                    config
                }
                Err(e) => {
                    tracing::warn!(%e, path = %path.display(), "Failed to parse config, using defaults");
                    Self::default()
                }
            },
            Err(e) => {
                tracing::warn!(%e, path = %path.display(), "Failed to read config, using defaults");
                Self::default()
            }
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            bind: default_bind(),
            max_upload_bytes: default_max_upload_bytes(),
            jpeg_quality: default_jpeg_quality(),
        }
    }
}
