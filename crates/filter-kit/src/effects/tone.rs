//! HSV-domain adjustments: saturation, hue, vibrance.

use crate::buffer::PixelBuffer;
use crate::color::{bgr_to_hsv, hsv_to_bgr};

/// Multiply every pixel's saturation by `factor`, clamped to 0..=255.
/// Hue and value are untouched.
pub fn adjust_saturation(src: &PixelBuffer, factor: f32) -> PixelBuffer {
    let mut planes = bgr_to_hsv(src);
    for s in &mut planes.s {
        *s = (*s * factor).clamp(0.0, 255.0);
    }
    hsv_to_bgr(&planes)
}

/// Rotate every pixel's hue by `shift` turns of the 180-unit hue wheel.
///
/// `shift = 0.5` rotates half the wheel; the addition wraps modularly, so
/// no clamping is needed and any finite shift is valid.
pub fn adjust_hue(src: &PixelBuffer, shift: f32) -> PixelBuffer {
    let mut planes = bgr_to_hsv(src);
    for h in &mut planes.h {
        *h = (*h + shift * 180.0).rem_euclid(180.0);
    }
    hsv_to_bgr(&planes)
}

/// Boost saturation only where it already exceeds the image mean.
///
/// Muted pixels (at or below the mean) pass through unchanged, which keeps
/// skin tones and neutrals stable while punching up already-colorful areas.
pub fn vibrance(src: &PixelBuffer, factor: f32) -> PixelBuffer {
    let mut planes = bgr_to_hsv(src);
    let mean = planes.s.iter().sum::<f32>() / planes.s.len() as f32;
    for s in &mut planes.s {
        if *s > mean {
            *s = (*s * factor).clamp(0.0, 255.0);
        }
    }
    hsv_to_bgr(&planes)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: &PixelBuffer, b: &PixelBuffer, tol: i16) -> bool {
        a.data()
            .iter()
            .zip(b.data())
            .all(|(&x, &y)| (x as i16 - y as i16).abs() <= tol)
    }

    #[test]
    fn saturation_zero_desaturates_to_gray() {
        let src = PixelBuffer::filled(4, 4, [20, 80, 220]);
        let out = adjust_saturation(&src, 0.0);
        let [b, g, r] = out.pixel(1, 1);
        assert_eq!(b, g);
        assert_eq!(g, r);
    }

    #[test]
    fn saturation_clamp_holds_at_extreme_factors() {
        let src = PixelBuffer::filled(4, 4, [10, 120, 250]);
        let out = adjust_saturation(&src, 1000.0);
        assert_eq!((out.width(), out.height()), (4, 4));
    }

    #[test]
    fn hue_shift_zero_is_a_roundtrip() {
        let src = PixelBuffer::from_fn(6, 6, |x, y| [(x * 40) as u8, (y * 40) as u8, 123]);
        let out = adjust_hue(&src, 0.0);
        assert!(close(&src, &out, 1), "shift=0 must match HSV roundtrip");
    }

    #[test]
    fn hue_shift_full_turn_wraps_to_identity() {
        let src = PixelBuffer::filled(4, 4, [30, 190, 90]);
        assert!(close(&adjust_hue(&src, 1.0), &adjust_hue(&src, 0.0), 1));
    }

    #[test]
    fn vibrance_leaves_uniform_images_unchanged() {
        // Every pixel sits exactly at the mean, so nothing crosses it.
        let src = PixelBuffer::filled(5, 5, [60, 100, 180]);
        let out = vibrance(&src, 2.0);
        assert!(close(&src, &out, 1));
    }

    #[test]
    fn vibrance_boosts_only_above_mean() {
        // Left half muted, right half saturated.
        let src = PixelBuffer::from_fn(8, 2, |x, _| {
            if x < 4 {
                [120, 120, 130]
            } else {
                [0, 20, 250]
            }
        });
        let out = vibrance(&src, 1.5);
        let muted_before = bgr_to_hsv(&src).s[0];
        let muted_after = bgr_to_hsv(&out).s[0];
        assert!((muted_before - muted_after).abs() <= 2.0);
        let hot_before = bgr_to_hsv(&src).s[7];
        let hot_after = bgr_to_hsv(&out).s[7];
        assert!(hot_after > hot_before);
    }
}
