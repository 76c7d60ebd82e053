use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

/// Request-level errors surfaced to HTTP clients.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("No file part in request")]
    MissingFile,

    #[error("File type not allowed: {0}")]
    FileTypeNotAllowed(String),

    #[error("Invalid value for parameter '{name}': '{value}'")]
    InvalidParameter { name: String, value: String },

    #[error("No image data provided")]
    MissingImageData,

    #[error("Malformed multipart request: {0}")]
    Multipart(String),

    #[error("Pipeline error: {0}")]
    Pipeline(#[from] PipelineError),

    #[error("Internal error: {0}")]
    Internal(String),
}

/// Errors from the decode -> filter -> encode pipeline itself.
#[derive(Debug, Error)]
pub enum PipelineError {
    /// Bytes sniffed as a container the service does not accept.
    #[error("Unsupported image format: {0}")]
    UnsupportedFormat(String),

    /// Bytes could not be interpreted as any supported image.
    #[error("Invalid image file: {0}")]
    Decode(String),

    /// JPEG serialization of a computed buffer failed.
    #[error("JPEG encode error: {0}")]
    Encode(String),

    /// Download payload was not valid base64 (optionally data-URL wrapped).
    #[error("Image data decode error: {0}")]
    DataUrl(#[from] base64::DecodeError),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match &self {
            ApiError::MissingFile
            | ApiError::FileTypeNotAllowed(_)
            | ApiError::InvalidParameter { .. }
            | ApiError::MissingImageData
            | ApiError::Multipart(_) => StatusCode::BAD_REQUEST,
            ApiError::Pipeline(e) => match e {
                PipelineError::UnsupportedFormat(_)
                | PipelineError::Decode(_)
                | PipelineError::DataUrl(_) => StatusCode::BAD_REQUEST,
                PipelineError::Encode(_) => StatusCode::INTERNAL_SERVER_ERROR,
            },
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        let body = Json(json!({
            "status": status.as_u16(),
            "error": self.to_string(),
        }));

        (status, body).into_response()
    }
}
