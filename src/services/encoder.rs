//! Encode boundary: pixel buffer -> JPEG bytes -> data URL.

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;
use filter_kit::PixelBuffer;
use image::codecs::jpeg::JpegEncoder;
use image::ExtendedColorType;

use crate::error::PipelineError;

const DATA_URL_PREFIX: &str = "data:image/jpeg;base64,";

/// Serializes computed buffers for transport.
#[derive(Debug, Clone)]
pub struct ResultEncoder {
    quality: u8,
}

impl ResultEncoder {
    /// Create an encoder with the given JPEG quality (1-100).
    pub fn new(quality: u8) -> Self {
        Self {
            quality: quality.clamp(1, 100),
        }
    }

    /// Compress a buffer to JPEG bytes.
    pub fn encode_jpeg(&self, buffer: &PixelBuffer) -> Result<Vec<u8>, PipelineError> {
        // The filters work in BGR; the codec wants RGB.
        let mut rgb = Vec::with_capacity(buffer.data().len());
        for px in buffer.data().chunks_exact(3) {
            rgb.extend_from_slice(&[px[2], px[1], px[0]]);
        }

        let mut bytes = Vec::new();
        JpegEncoder::new_with_quality(&mut bytes, self.quality)
            .encode(
                &rgb,
                buffer.width(),
                buffer.height(),
                ExtendedColorType::Rgb8,
            )
            .map_err(|e| PipelineError::Encode(e.to_string()))?;
        Ok(bytes)
    }

    /// Compress a buffer and wrap it as an inline-displayable data URL.
    pub fn encode_data_url(&self, buffer: &PixelBuffer) -> Result<String, PipelineError> {
        let bytes = self.encode_jpeg(buffer)?;
        Ok(format!("{DATA_URL_PREFIX}{}", BASE64.encode(bytes)))
    }
}

/// Decode a previously produced data URL (or bare base64 string) back to
/// raw bytes.
///
/// An optional prefix up to the first comma is stripped, so both
/// `data:image/jpeg;base64,AAAA` and `AAAA` are valid inputs.
pub fn decode_data_url(text: &str) -> Result<Vec<u8>, PipelineError> {
    let payload = text
        .split_once(',')
        .map(|(_, rest)| rest)
        .unwrap_or(text);
    Ok(BASE64.decode(payload.trim())?)
}
