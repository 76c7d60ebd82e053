//! Kernel-based filters: sharpen and emboss.

use crate::buffer::PixelBuffer;
use crate::kernel::convolve3x3;

/// Sharpen via a 3x3 kernel: center 9, eight neighbors -1, every
/// coefficient scaled by `intensity`. Results clamp to 0..=255.
pub fn sharpen(src: &PixelBuffer, intensity: f32) -> PixelBuffer {
    let n = -intensity;
    let kernel = [
        [n, n, n],
        [n, 9.0 * intensity, n],
        [n, n, n],
    ];
    convolve3x3(src, &kernel, 0.0)
}

/// Emboss via a diagonal gradient kernel plus a +128 mid-gray offset.
///
/// The offset is added to the float accumulator before the single final
/// clamp, so extreme strengths saturate rather than wrap.
pub fn emboss(src: &PixelBuffer, strength: f32) -> PixelBuffer {
    let s = strength;
    let kernel = [
        [-2.0 * s, -s, 0.0],
        [-s, 1.0, s],
        [0.0, s, 2.0 * s],
    ];
    convolve3x3(src, &kernel, 128.0)
}
