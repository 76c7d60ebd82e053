use serde::Serialize;
use utoipa::ToSchema;

/// Properties of the original upload, derived once at decode time.
///
/// Carried alongside the result set for display purposes; the filters
/// themselves never consult it.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct ImageMetadata {
    /// Container format of the upload ("PNG", "JPEG", "GIF").
    pub format: String,
    /// Pixel dimensions as (width, height).
    #[schema(value_type = Vec<u32>, max_items = 2, min_items = 2)]
    pub size: (u32, u32),
    /// Color mode of the decoded upload ("RGB", "RGBA", "L", ...).
    pub mode: String,
}
