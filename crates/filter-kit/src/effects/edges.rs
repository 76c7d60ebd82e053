//! Two-threshold edge detection (Canny-style).
//!
//! Pipeline: grayscale -> 5x5 Gaussian smoothing -> Sobel gradients ->
//! non-maximum suppression -> double threshold with hysteresis. Pixels with
//! gradient magnitude >= `threshold2` are strong edges; pixels >=
//! `threshold1` are weak and survive only when 8-connected to a strong
//! edge. Output is binary (0 or 255) replicated into all three channels.

use crate::buffer::PixelBuffer;
use crate::color::{bgr_to_gray, gray_to_bgr};
use crate::kernel::gaussian_blur_plane;

const SOBEL_X: [[i32; 3]; 3] = [[-1, 0, 1], [-2, 0, 2], [-1, 0, 1]];
const SOBEL_Y: [[i32; 3]; 3] = [[-1, -2, -1], [0, 0, 0], [1, 2, 1]];

/// Detect edges with the given weak/strong gradient thresholds.
///
/// The documented convention is `threshold1 <= threshold2`. Swapped values
/// are passed through unvalidated: the strong set then swallows the weak
/// set and hysteresis has nothing extra to keep. Garbage in, garbage out.
pub fn edge_detection(src: &PixelBuffer, threshold1: f32, threshold2: f32) -> PixelBuffer {
    let (w, h) = (src.width() as usize, src.height() as usize);
    let gray = bgr_to_gray(src);
    let smoothed = gaussian_blur_plane(&gray, src.width(), src.height(), 5, 1.4);

    // Sobel gradient magnitude and direction.
    let mut mag = vec![0.0f32; w * h];
    let mut dir = vec![0.0f32; w * h];
    for y in 0..h {
        for x in 0..w {
            let mut gx = 0i32;
            let mut gy = 0i32;
            for ky in 0..3 {
                for kx in 0..3 {
                    let sx = (x as i64 + kx as i64 - 1).clamp(0, w as i64 - 1) as usize;
                    let sy = (y as i64 + ky as i64 - 1).clamp(0, h as i64 - 1) as usize;
                    let v = smoothed[sy * w + sx] as i32;
                    gx += v * SOBEL_X[ky][kx];
                    gy += v * SOBEL_Y[ky][kx];
                }
            }
            mag[y * w + x] = ((gx * gx + gy * gy) as f32).sqrt();
            dir[y * w + x] = (gy as f32).atan2(gx as f32);
        }
    }

    // Non-maximum suppression: keep only local maxima along the gradient
    // direction, quantized to 4 axes.
    let mut thin = vec![0.0f32; w * h];
    for y in 0..h {
        for x in 0..w {
            let m = mag[y * w + x];
            let angle = dir[y * w + x].to_degrees().rem_euclid(180.0);
            let (dx, dy): (i64, i64) = if !(22.5..157.5).contains(&angle) {
                (1, 0)
            } else if angle < 67.5 {
                (1, 1)
            } else if angle < 112.5 {
                (0, 1)
            } else {
                (1, -1)
            };
            let sample = |ox: i64, oy: i64| -> f32 {
                let sx = x as i64 + ox;
                let sy = y as i64 + oy;
                if sx < 0 || sy < 0 || sx >= w as i64 || sy >= h as i64 {
                    0.0
                } else {
                    mag[sy as usize * w + sx as usize]
                }
            };
            if m >= sample(dx, dy) && m >= sample(-dx, -dy) {
                thin[y * w + x] = m;
            }
        }
    }

    // Double threshold + hysteresis: flood weak pixels reachable from
    // strong ones over 8-connectivity.
    const NONE: u8 = 0;
    const WEAK: u8 = 1;
    const STRONG: u8 = 2;
    let mut class: Vec<u8> = thin
        .iter()
        .map(|&m| {
            if m >= threshold2 {
                STRONG
            } else if m >= threshold1 {
                WEAK
            } else {
                NONE
            }
        })
        .collect();

    let mut out = vec![0u8; w * h];
    let mut stack: Vec<usize> = Vec::new();
    for i in 0..class.len() {
        if class[i] == STRONG {
            out[i] = 255;
            stack.push(i);
        }
    }
    while let Some(i) = stack.pop() {
        let (x, y) = ((i % w) as i64, (i / w) as i64);
        for oy in -1..=1i64 {
            for ox in -1..=1i64 {
                let (nx, ny) = (x + ox, y + oy);
                if nx < 0 || ny < 0 || nx >= w as i64 || ny >= h as i64 {
                    continue;
                }
                let n = ny as usize * w + nx as usize;
                if class[n] == WEAK {
                    class[n] = STRONG;
                    out[n] = 255;
                    stack.push(n);
                }
            }
        }
    }

    gray_to_bgr(&out, src.width(), src.height())
}
