use axum::extract::{Multipart, State};
use axum::Json;
use filter_kit::FilterOptions;
use serde::Serialize;
use utoipa::ToSchema;

use crate::error::ApiError;
use crate::models::ImageMetadata;
use crate::server::AppState;
use crate::services::{codec, ResultSet};

/// Multipart form accepted by the upload endpoint (documentation only).
#[derive(Debug, ToSchema)]
#[allow(dead_code)]
pub struct UploadForm {
    /// Image file (PNG, JPEG or GIF).
    #[schema(value_type = String, format = Binary)]
    pub file: String,
    pub sharpen_intensity: Option<f32>,
    pub emboss_strength: Option<f32>,
    pub saturation_factor: Option<f32>,
    pub edge_threshold1: Option<f32>,
    pub edge_threshold2: Option<f32>,
    pub hue_shift: Option<f32>,
    pub sepia_intensity: Option<f32>,
    pub vibrance_factor: Option<f32>,
    pub vignette_intensity: Option<f32>,
    pub noise_reduction_strength: Option<f32>,
}

/// Successful upload response.
#[derive(Debug, Serialize, ToSchema)]
pub struct UploadResponse {
    pub success: bool,
    pub metadata: ImageMetadata,
    /// `original` plus the twelve filters, each a JPEG data URL.
    #[schema(value_type = Object)]
    pub filters: ResultSet,
}

/// Upload an image and receive the full filter battery
///
/// Runs every filter against the uploaded image and returns thirteen data
/// URLs (the original plus twelve renditions) ready for inline display.
#[utoipa::path(
    post,
    path = "/upload",
    request_body(content = UploadForm, content_type = "multipart/form-data"),
    responses(
        (status = 200, description = "All filters computed", body = UploadResponse),
        (status = 400, description = "Missing file, disallowed type, invalid image or bad parameter"),
        (status = 500, description = "Encoding failure"),
    ),
    tag = "Filters"
)]
pub async fn handle_upload(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<UploadResponse>, ApiError> {
    let mut file: Option<(String, Vec<u8>)> = None;
    let mut options = FilterOptions::default();

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| ApiError::Multipart(e.to_string()))?
    {
        let Some(name) = field.name().map(str::to_string) else {
            continue;
        };
        if name == "file" {
            let filename = field.file_name().unwrap_or_default().to_string();
            let bytes = field
                .bytes()
                .await
                .map_err(|e| ApiError::Multipart(e.to_string()))?;
            file = Some((filename, bytes.to_vec()));
        } else {
            let value = field
                .text()
                .await
                .map_err(|e| ApiError::Multipart(e.to_string()))?;
            options = apply_parameter(options, &name, &value)?;
        }
    }

    let (filename, bytes) = file.ok_or(ApiError::MissingFile)?;
    if !codec::extension_allowed(&filename) {
        return Err(ApiError::FileTypeNotAllowed(filename));
    }

    tracing::info!(
        filename = %filename,
        bytes = bytes.len(),
        "Processing upload"
    );

    // The battery is pure CPU work; keep it off the async runtime.
    let runner = state.runner.clone();
    let (metadata, filters) = tokio::task::spawn_blocking(move || {
        let (buffer, metadata) = codec::decode_upload(&bytes)?;
        let filters = runner.run_all(&buffer, &options)?;
        Ok::<_, ApiError>((metadata, filters))
    })
    .await
    .map_err(|e| ApiError::Internal(format!("Task join error: {e}")))??;

    Ok(Json(UploadResponse {
        success: true,
        metadata,
        filters,
    }))
}

/// Fold one form field into the option set.
///
/// Every parameter goes through an explicit fallible parse here, before any
/// filter runs; unknown field names are ignored.
fn apply_parameter(
    options: FilterOptions,
    name: &str,
    value: &str,
) -> Result<FilterOptions, ApiError> {
    let known = [
        "sharpen_intensity",
        "emboss_strength",
        "saturation_factor",
        "edge_threshold1",
        "edge_threshold2",
        "hue_shift",
        "sepia_intensity",
        "vibrance_factor",
        "vignette_intensity",
        "noise_reduction_strength",
    ];
    if !known.contains(&name) {
        return Ok(options);
    }

    let scalar: f32 = value
        .trim()
        .parse()
        .map_err(|_| ApiError::InvalidParameter {
            name: name.to_string(),
            value: value.to_string(),
        })?;

    Ok(match name {
        "sharpen_intensity" => options.sharpen_intensity(scalar),
        "emboss_strength" => options.emboss_strength(scalar),
        "saturation_factor" => options.saturation_factor(scalar),
        "edge_threshold1" => FilterOptions {
            edge_threshold1: scalar,
            ..options
        },
        "edge_threshold2" => FilterOptions {
            edge_threshold2: scalar,
            ..options
        },
        "hue_shift" => options.hue_shift(scalar),
        "sepia_intensity" => options.sepia_intensity(scalar),
        "vibrance_factor" => options.vibrance_factor(scalar),
        "vignette_intensity" => options.vignette_intensity(scalar),
        "noise_reduction_strength" => options.noise_reduction_strength(scalar),
        _ => unreachable!("filtered by the known-name check"),
    })
}
