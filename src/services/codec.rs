//! Decode boundary: uploaded bytes -> pixel buffer + metadata.

use filter_kit::PixelBuffer;
use image::{ColorType, ImageFormat};

use crate::error::PipelineError;
use crate::models::ImageMetadata;

/// Upload filename extensions the service accepts.
pub const ALLOWED_EXTENSIONS: [&str; 4] = ["png", "jpg", "jpeg", "gif"];

/// Check a client-supplied filename against the extension allow-list
/// (case-insensitive).
pub fn extension_allowed(filename: &str) -> bool {
    filename
        .rsplit_once('.')
        .map(|(_, ext)| ALLOWED_EXTENSIONS.contains(&ext.to_ascii_lowercase().as_str()))
        .unwrap_or(false)
}

/// Decode uploaded bytes into a BGR pixel buffer plus metadata.
///
/// The container is sniffed from the bytes themselves, not the filename;
/// anything other than PNG/JPEG/GIF is rejected before decoding. Corrupt
/// or truncated data surfaces as [`PipelineError::Decode`].
pub fn decode_upload(bytes: &[u8]) -> Result<(PixelBuffer, ImageMetadata), PipelineError> {
    let format =
        image::guess_format(bytes).map_err(|e| PipelineError::Decode(e.to_string()))?;
    let format_name = match format {
        ImageFormat::Png => "PNG",
        ImageFormat::Jpeg => "JPEG",
        ImageFormat::Gif => "GIF",
        other => return Err(PipelineError::UnsupportedFormat(format!("{other:?}"))),
    };

    let decoded = image::load_from_memory_with_format(bytes, format)
        .map_err(|e| PipelineError::Decode(e.to_string()))?;
    let mode = color_mode_name(decoded.color());

    let rgb = decoded.to_rgb8();
    let (width, height) = rgb.dimensions();

    let mut data = Vec::with_capacity(width as usize * height as usize * 3);
    for px in rgb.pixels() {
        data.extend_from_slice(&[px[2], px[1], px[0]]);
    }
    let buffer = PixelBuffer::from_raw(width, height, data)
        .map_err(|e| PipelineError::Decode(e.to_string()))?;

    tracing::debug!(width, height, format = format_name, mode, "Decoded upload");

    let metadata = ImageMetadata {
        format: format_name.to_string(),
        size: (width, height),
        mode: mode.to_string(),
    };
    Ok((buffer, metadata))
}

fn color_mode_name(color: ColorType) -> &'static str {
    match color {
        ColorType::L8 | ColorType::L16 => "L",
        ColorType::La8 | ColorType::La16 => "LA",
        ColorType::Rgb8 | ColorType::Rgb16 | ColorType::Rgb32F => "RGB",
        ColorType::Rgba8 | ColorType::Rgba16 | ColorType::Rgba32F => "RGBA",
        _ => "RGB",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn png_bytes(width: u32, height: u32, rgb: [u8; 3]) -> Vec<u8> {
        let img = image::RgbImage::from_pixel(width, height, image::Rgb(rgb));
        let mut bytes = Vec::new();
        img.write_to(&mut Cursor::new(&mut bytes), ImageFormat::Png)
            .unwrap();
        bytes
    }

    #[test]
    fn extension_allow_list() {
        assert!(extension_allowed("photo.png"));
        assert!(extension_allowed("photo.JPG"));
        assert!(extension_allowed("archive.tar.jpeg"));
        assert!(!extension_allowed("photo.bmp"));
        assert!(!extension_allowed("noextension"));
    }

    #[test]
    fn decodes_png_into_bgr() {
        // Solid red PNG: BGR buffer must read [0, 0, 255].
        let bytes = png_bytes(4, 3, [255, 0, 0]);
        let (buffer, metadata) = decode_upload(&bytes).unwrap();
        assert_eq!((buffer.width(), buffer.height()), (4, 3));
        assert_eq!(buffer.pixel(2, 1), [0, 0, 255]);
        assert_eq!(metadata.format, "PNG");
        assert_eq!(metadata.size, (4, 3));
        assert_eq!(metadata.mode, "RGB");
    }

    #[test]
    fn rejects_non_image_bytes() {
        let err = decode_upload(b"this is not an image at all").unwrap_err();
        assert!(matches!(err, PipelineError::Decode(_)), "{err}");
    }

    #[test]
    fn rejects_unsupported_container() {
        // A valid BMP sniffs fine but is not on the allow-list.
        let img = image::RgbImage::from_pixel(2, 2, image::Rgb([1, 2, 3]));
        let mut bytes = Vec::new();
        img.write_to(&mut Cursor::new(&mut bytes), ImageFormat::Bmp)
            .unwrap();
        let err = decode_upload(&bytes).unwrap_err();
        assert!(matches!(err, PipelineError::UnsupportedFormat(_)), "{err}");
    }
}
