use axum::{
    extract::Path,
    http::header,
    response::{IntoResponse, Response},
    Json,
};
use serde::Deserialize;
use utoipa::ToSchema;

use crate::error::ApiError;
use crate::services::decode_data_url;

/// Request body for the download endpoint.
#[derive(Debug, Deserialize, ToSchema)]
pub struct DownloadRequest {
    /// A data URL (or bare base64 string) previously returned by /upload.
    pub image_data: Option<String>,
}

/// Download one previously produced result as a file
///
/// Decodes the submitted data URL verbatim -- no recomputation happens on
/// this path -- and returns the bytes as a JPEG attachment named after the
/// filter.
#[utoipa::path(
    post,
    path = "/download/{filter_name}",
    request_body = DownloadRequest,
    responses(
        (status = 200, description = "Decoded image bytes", content_type = "image/jpeg"),
        (status = 400, description = "Missing or malformed image data"),
    ),
    params(
        ("filter_name" = String, Path, description = "Filter label used in the attachment filename"),
    ),
    tag = "Filters"
)]
pub async fn handle_download(
    Path(filter_name): Path<String>,
    Json(request): Json<DownloadRequest>,
) -> Result<Response, ApiError> {
    let image_data = request.image_data.ok_or(ApiError::MissingImageData)?;
    let bytes = decode_data_url(&image_data).map_err(ApiError::from)?;

    tracing::debug!(filter = %filter_name, bytes = bytes.len(), "Serving download");

    // Keep the filename header-safe regardless of what the path carried.
    let label: String = filter_name
        .chars()
        .filter(|c| c.is_ascii_alphanumeric() || *c == '_' || *c == '-')
        .collect();
    let label = if label.is_empty() {
        "result".to_string()
    } else {
        label
    };

    let headers = [
        (header::CONTENT_TYPE, "image/jpeg".to_string()),
        (
            header::CONTENT_DISPOSITION,
            format!("attachment; filename=\"filtered_image_{label}.jpg\""),
        ),
    ];
    Ok((headers, bytes).into_response())
}
