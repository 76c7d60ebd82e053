//! Pencil-sketch effect via the classic dodge-blend construction.

use crate::buffer::{clamp_u8, PixelBuffer};
use crate::color::{bgr_to_gray, gray_to_bgr};
use crate::kernel::gaussian_blur_plane;

const BLUR_KSIZE: usize = 21;

/// Grayscale, invert, blur the inversion with a 21x21 Gaussian, invert the
/// blur, then divide the original grayscale by it with a 256 scale factor.
///
/// The division saturates: a zero divisor (blurred inversion fully black,
/// meaning the neighborhood is pure white) maps to white.
pub fn sketch_effect(src: &PixelBuffer) -> PixelBuffer {
    let gray = bgr_to_gray(src);
    let inverted: Vec<u8> = gray.iter().map(|&v| 255 - v).collect();
    let blurred = gaussian_blur_plane(&inverted, src.width(), src.height(), BLUR_KSIZE, 0.0);

    let plane: Vec<u8> = gray
        .iter()
        .zip(&blurred)
        .map(|(&g, &b)| {
            let divisor = 255 - b;
            if divisor == 0 {
                255
            } else {
                clamp_u8(g as f32 * 256.0 / divisor as f32)
            }
        })
        .collect();

    gray_to_bgr(&plane, src.width(), src.height())
}
