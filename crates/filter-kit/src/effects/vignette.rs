//! Vignette: darken toward the corners with a separable Gaussian mask.

use crate::buffer::{clamp_u8, PixelBuffer};
use crate::kernel::gaussian_kernel_1d;

/// Build the vignette mask for an image of the given size.
///
/// One 1-D Gaussian per axis (sigma = half the axis length), outer product,
/// normalized so the peak is exactly 1.0, then raised to `intensity`.
/// Returned row-major, one f32 per pixel.
///
/// Intensity 1.0 is the standard falloff; values toward 0 flatten the mask
/// and negative values invert it (brighter corners) -- degenerate but
/// accepted.
pub fn vignette_mask(width: u32, height: u32, intensity: f32) -> Vec<f32> {
    let kx = centered_gaussian(width as usize);
    let ky = centered_gaussian(height as usize);

    let peak = kx.iter().cloned().fold(f32::MIN, f32::max)
        * ky.iter().cloned().fold(f32::MIN, f32::max);

    let mut mask = Vec::with_capacity(width as usize * height as usize);
    for &y in &ky {
        for &x in &kx {
            mask.push((x * y / peak).powf(intensity));
        }
    }
    mask
}

// Gaussian column with sigma = len / 2, the wide bell used for vignetting
// (most of the frame stays bright, falloff concentrates near the edges).
fn centered_gaussian(len: usize) -> Vec<f32> {
    // gaussian_kernel_1d wants an odd length; sample one extra point and
    // drop it for even sizes so the bell stays centered.
    let odd = if len % 2 == 0 { len + 1 } else { len };
    let mut k = gaussian_kernel_1d(odd, len as f32 / 2.0);
    k.truncate(len);
    k
}

/// Multiply every channel elementwise by the vignette mask.
pub fn vignette(src: &PixelBuffer, intensity: f32) -> PixelBuffer {
    let mask = vignette_mask(src.width(), src.height(), intensity);
    let w = src.width() as usize;
    PixelBuffer::from_fn(src.width(), src.height(), |x, y| {
        let m = mask[y as usize * w + x as usize];
        let [b, g, r] = src.pixel(x, y);
        [
            clamp_u8(b as f32 * m),
            clamp_u8(g as f32 * m),
            clamp_u8(r as f32 * m),
        ]
    })
}
