//! Convolution primitives shared by the kernel-based filters.

use crate::buffer::{clamp_u8, PixelBuffer};

/// Apply a 3x3 kernel to every channel independently, adding `offset` to
/// each accumulated sample before the final clamp to 0..=255.
///
/// Border pixels use clamp-to-edge sampling. Accumulation happens in f32,
/// so an offset can never wrap -- out-of-range results saturate.
pub fn convolve3x3(src: &PixelBuffer, kernel: &[[f32; 3]; 3], offset: f32) -> PixelBuffer {
    let (w, h) = (src.width() as i64, src.height() as i64);
    PixelBuffer::from_fn(src.width(), src.height(), |x, y| {
        let mut acc = [offset; 3];
        for (ky, row) in kernel.iter().enumerate() {
            for (kx, &weight) in row.iter().enumerate() {
                let sx = (x as i64 + kx as i64 - 1).clamp(0, w - 1) as u32;
                let sy = (y as i64 + ky as i64 - 1).clamp(0, h - 1) as u32;
                let px = src.pixel(sx, sy);
                for c in 0..3 {
                    acc[c] += weight * px[c] as f32;
                }
            }
        }
        [clamp_u8(acc[0]), clamp_u8(acc[1]), clamp_u8(acc[2])]
    })
}

/// Build a normalized 1-D Gaussian kernel of the given odd length.
///
/// When `sigma` is not positive it is derived from the kernel size with the
/// usual heuristic `0.3 * ((len - 1) * 0.5 - 1) + 0.8`.
pub fn gaussian_kernel_1d(len: usize, sigma: f32) -> Vec<f32> {
    debug_assert!(len % 2 == 1, "gaussian kernel length must be odd");
    let sigma = if sigma > 0.0 {
        sigma
    } else {
        0.3 * ((len as f32 - 1.0) * 0.5 - 1.0) + 0.8
    };
    let half = (len / 2) as f32;
    let mut kernel: Vec<f32> = (0..len)
        .map(|i| {
            let d = i as f32 - half;
            (-d * d / (2.0 * sigma * sigma)).exp()
        })
        .collect();
    let sum: f32 = kernel.iter().sum();
    for v in &mut kernel {
        *v /= sum;
    }
    kernel
}

/// Separable Gaussian blur of a single plane (two 1-D passes).
///
/// Border pixels use clamp-to-edge sampling.
pub fn gaussian_blur_plane(plane: &[u8], width: u32, height: u32, ksize: usize, sigma: f32) -> Vec<u8> {
    let kernel = gaussian_kernel_1d(ksize, sigma);
    let half = (ksize / 2) as i64;
    let (w, h) = (width as i64, height as i64);

    // Horizontal pass into f32 to keep precision for the second pass.
    let mut temp = vec![0.0f32; plane.len()];
    for y in 0..h {
        for x in 0..w {
            let mut sum = 0.0;
            for (i, &kv) in kernel.iter().enumerate() {
                let sx = (x + i as i64 - half).clamp(0, w - 1);
                sum += plane[(y * w + sx) as usize] as f32 * kv;
            }
            temp[(y * w + x) as usize] = sum;
        }
    }

    // Vertical pass.
    let mut out = vec![0u8; plane.len()];
    for y in 0..h {
        for x in 0..w {
            let mut sum = 0.0;
            for (i, &kv) in kernel.iter().enumerate() {
                let sy = (y + i as i64 - half).clamp(0, h - 1);
                sum += temp[(sy * w + x) as usize] * kv;
            }
            out[(y * w + x) as usize] = clamp_u8(sum);
        }
    }
    out
}
