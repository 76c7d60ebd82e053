//! Noise reduction via non-local means on the LAB planes.
//!
//! Each plane is denoised independently: for every pixel, similar patches
//! inside a 21x21 search window are averaged, weighted by patch similarity.
//! Filter strength is fixed at 10 for both luminance and color; the only
//! caller-facing knob is the template (patch) window size.

use crate::buffer::PixelBuffer;
use crate::color::{bgr_to_lab, lab_to_bgr};

const SEARCH_WINDOW: usize = 21;
const H_LUMA: f32 = 10.0;
const H_COLOR: f32 = 10.0;

/// Effective template window for a given strength: truncated to an
/// integer, floored at 1, and forced odd (even values round up).
///
/// Strengths 6.0 and 7.0 both yield 7.
pub fn template_window(strength: f32) -> usize {
    let mut t = strength as i64;
    if t < 1 {
        t = 1;
    }
    if t % 2 == 0 {
        t += 1;
    }
    t as usize
}

/// Denoise the image with patch window `template_window(strength)`.
pub fn noise_reduction(src: &PixelBuffer, strength: f32) -> PixelBuffer {
    let template = template_window(strength);
    let (w, h) = (src.width() as usize, src.height() as usize);

    let mut lab = bgr_to_lab(src);
    lab.l = nl_means_plane(&lab.l, w, h, template, H_LUMA);
    lab.a = nl_means_plane(&lab.a, w, h, template, H_COLOR);
    lab.b = nl_means_plane(&lab.b, w, h, template, H_COLOR);
    lab_to_bgr(&lab)
}

fn nl_means_plane(
    plane: &[u8],
    width: usize,
    height: usize,
    template: usize,
    strength: f32,
) -> Vec<u8> {
    let half_t = (template / 2) as i64;
    let half_s = (SEARCH_WINDOW / 2) as i64;
    let patch_len = (template * template) as f32;
    let inv_h2 = 1.0 / (strength * strength);

    let sample = |x: i64, y: i64| -> f32 {
        let cx = x.clamp(0, width as i64 - 1) as usize;
        let cy = y.clamp(0, height as i64 - 1) as usize;
        plane[cy * width + cx] as f32
    };

    let mut out = vec![0u8; plane.len()];
    for y in 0..height as i64 {
        for x in 0..width as i64 {
            let mut weight_sum = 0.0f32;
            let mut value_sum = 0.0f32;

            for sy in (y - half_s).max(0)..=(y + half_s).min(height as i64 - 1) {
                for sx in (x - half_s).max(0)..=(x + half_s).min(width as i64 - 1) {
                    // Mean squared distance between the two patches.
                    let mut dist = 0.0f32;
                    for ty in -half_t..=half_t {
                        for tx in -half_t..=half_t {
                            let d = sample(x + tx, y + ty) - sample(sx + tx, sy + ty);
                            dist += d * d;
                        }
                    }
                    let weight = (-(dist / patch_len) * inv_h2).exp();
                    weight_sum += weight;
                    value_sum += weight * plane[sy as usize * width + sx as usize] as f32;
                }
            }

            out[y as usize * width + x as usize] =
                (value_sum / weight_sum).round().clamp(0.0, 255.0) as u8;
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn template_window_is_always_odd() {
        assert_eq!(template_window(6.0), 7);
        assert_eq!(template_window(7.0), 7);
        assert_eq!(template_window(7.9), 7);
        assert_eq!(template_window(2.0), 3);
        assert_eq!(template_window(0.0), 1);
        assert_eq!(template_window(-5.0), 1);
    }

    #[test]
    fn flat_image_is_a_fixed_point() {
        let src = PixelBuffer::filled(12, 12, [60, 120, 180]);
        let out = noise_reduction(&src, 3.0);
        for (a, b) in src.data().iter().zip(out.data()) {
            assert!((*a as i16 - *b as i16).abs() <= 3);
        }
    }

    #[test]
    fn reduces_variance_of_speckled_image() {
        // Deterministic speckle on a gray background.
        let src = PixelBuffer::from_fn(16, 16, |x, y| {
            let noise = ((x * 7 + y * 13) % 5) as i16 * 8 - 16;
            let v = (128i16 + noise).clamp(0, 255) as u8;
            [v, v, v]
        });
        let out = noise_reduction(&src, 3.0);

        let variance = |buf: &PixelBuffer| {
            let vals: Vec<f64> = buf.data().iter().step_by(3).map(|&v| v as f64).collect();
            let mean = vals.iter().sum::<f64>() / vals.len() as f64;
            vals.iter().map(|v| (v - mean) * (v - mean)).sum::<f64>() / vals.len() as f64
        };
        assert!(variance(&out) < variance(&src));
    }
}
