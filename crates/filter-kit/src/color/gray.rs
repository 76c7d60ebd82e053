//! BGR <-> grayscale conversion.

use crate::buffer::PixelBuffer;

/// Rec. 601 luma weights, the convention used by 8-bit imaging pipelines.
const LUMA_R: f32 = 0.299;
const LUMA_G: f32 = 0.587;
const LUMA_B: f32 = 0.114;

/// Collapse a BGR buffer to a single luma plane (row-major, one byte per
/// pixel).
pub fn bgr_to_gray(src: &PixelBuffer) -> Vec<u8> {
    src.data()
        .chunks_exact(3)
        .map(|px| luma(px[0], px[1], px[2]))
        .collect()
}

/// Luma of one BGR pixel.
#[inline]
pub fn luma(b: u8, g: u8, r: u8) -> u8 {
    (LUMA_R * r as f32 + LUMA_G * g as f32 + LUMA_B * b as f32)
        .round()
        .clamp(0.0, 255.0) as u8
}

/// Re-expand a luma plane to a 3-channel buffer by replicating the value
/// into all channels.
///
/// Panics if `plane.len() != width * height`; callers always pass planes
/// produced from a buffer with these dimensions.
pub fn gray_to_bgr(plane: &[u8], width: u32, height: u32) -> PixelBuffer {
    assert_eq!(plane.len(), width as usize * height as usize);
    let mut data = Vec::with_capacity(plane.len() * 3);
    for &v in plane {
        data.extend_from_slice(&[v, v, v]);
    }
    PixelBuffer::from_raw(width, height, data).expect("plane length checked above")
}
