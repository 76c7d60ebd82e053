//! BGR <-> HSV conversion.
//!
//! Uses the 8-bit convention: hue is halved into 0..=179 so it fits a byte,
//! saturation and value span 0..=255. Planes are kept as `f32` so filters
//! can scale saturation without compounding quantization error, and are
//! only rounded back to bytes on the way out.

use crate::buffer::{clamp_u8, PixelBuffer};

/// An image split into hue / saturation / value planes.
///
/// `h` is in 0..=179 (degrees halved), `s` and `v` in 0..=255.
#[derive(Debug, Clone)]
pub struct HsvPlanes {
    pub width: u32,
    pub height: u32,
    pub h: Vec<f32>,
    pub s: Vec<f32>,
    pub v: Vec<f32>,
}

/// Convert one BGR pixel to (h, s, v).
#[inline]
pub fn pixel_to_hsv(b: u8, g: u8, r: u8) -> (f32, f32, f32) {
    let (bf, gf, rf) = (b as f32, g as f32, r as f32);
    let max = rf.max(gf).max(bf);
    let min = rf.min(gf).min(bf);
    let delta = max - min;

    let v = max;
    let s = if max > 0.0 { delta / max * 255.0 } else { 0.0 };

    let mut h = if delta == 0.0 {
        0.0
    } else if max == rf {
        60.0 * (gf - bf) / delta
    } else if max == gf {
        120.0 + 60.0 * (bf - rf) / delta
    } else {
        240.0 + 60.0 * (rf - gf) / delta
    };
    if h < 0.0 {
        h += 360.0;
    }

    (h / 2.0, s, v)
}

/// Convert (h, s, v) back to one BGR pixel. Hue outside 0..=179 wraps.
#[inline]
pub fn hsv_to_pixel(h: f32, s: f32, v: f32) -> [u8; 3] {
    let h_deg = (h.rem_euclid(180.0)) * 2.0;
    let s = (s / 255.0).clamp(0.0, 1.0);
    let v = (v / 255.0).clamp(0.0, 1.0);

    let c = v * s;
    let x = c * (1.0 - ((h_deg / 60.0) % 2.0 - 1.0).abs());
    let m = v - c;

    let (r1, g1, b1) = match (h_deg / 60.0) as u32 {
        0 => (c, x, 0.0),
        1 => (x, c, 0.0),
        2 => (0.0, c, x),
        3 => (0.0, x, c),
        4 => (x, 0.0, c),
        _ => (c, 0.0, x),
    };

    [
        clamp_u8((b1 + m) * 255.0),
        clamp_u8((g1 + m) * 255.0),
        clamp_u8((r1 + m) * 255.0),
    ]
}

/// Split a BGR buffer into HSV planes.
pub fn bgr_to_hsv(src: &PixelBuffer) -> HsvPlanes {
    let count = src.pixel_count();
    let mut h = Vec::with_capacity(count);
    let mut s = Vec::with_capacity(count);
    let mut v = Vec::with_capacity(count);

    for px in src.data().chunks_exact(3) {
        let (ph, ps, pv) = pixel_to_hsv(px[0], px[1], px[2]);
        h.push(ph);
        s.push(ps);
        v.push(pv);
    }

    HsvPlanes {
        width: src.width(),
        height: src.height(),
        h,
        s,
        v,
    }
}

/// Recombine HSV planes into a BGR buffer.
pub fn hsv_to_bgr(planes: &HsvPlanes) -> PixelBuffer {
    let mut data = Vec::with_capacity(planes.h.len() * 3);
    for i in 0..planes.h.len() {
        data.extend_from_slice(&hsv_to_pixel(planes.h[i], planes.s[i], planes.v[i]));
    }
    PixelBuffer::from_raw(planes.width, planes.height, data)
        .expect("planes carry the dimensions they were split from")
}
