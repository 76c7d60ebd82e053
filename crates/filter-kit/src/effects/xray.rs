//! X-ray effect: inverted grayscale.

use crate::buffer::PixelBuffer;
use crate::color::{bgr_to_gray, gray_to_bgr};

/// Grayscale the image, invert every value (255 - v), and re-expand to
/// three channels.
pub fn xray(src: &PixelBuffer) -> PixelBuffer {
    let mut plane = bgr_to_gray(src);
    for v in &mut plane {
        *v = 255 - *v;
    }
    gray_to_bgr(&plane, src.width(), src.height())
}
