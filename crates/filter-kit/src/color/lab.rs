//! BGR <-> LAB conversion.
//!
//! CIE L*a*b* with D65 white point, packed into the 8-bit convention:
//! L scaled from 0..100 to 0..=255, a and b offset by +128. Planes are kept
//! as bytes because both consumers (histogram equalization and non-local
//! means) operate on 8-bit histograms and patches.

use crate::buffer::{clamp_u8, PixelBuffer};

/// An image split into L / a / b planes, 8-bit scaled.
#[derive(Debug, Clone)]
pub struct LabPlanes {
    pub width: u32,
    pub height: u32,
    pub l: Vec<u8>,
    pub a: Vec<u8>,
    pub b: Vec<u8>,
}

// D65 white point normalization.
const XN: f32 = 0.950456;
const ZN: f32 = 1.088754;
// CIE threshold between the cube-root and linear segments.
const EPSILON: f32 = 0.008856;
const KAPPA: f32 = 903.3;

#[inline]
fn f_cbrt(t: f32) -> f32 {
    if t > EPSILON {
        t.cbrt()
    } else {
        7.787 * t + 16.0 / 116.0
    }
}

/// Convert one BGR pixel to 8-bit (L, a, b).
#[inline]
pub fn pixel_to_lab(b: u8, g: u8, r: u8) -> (u8, u8, u8) {
    let rf = r as f32 / 255.0;
    let gf = g as f32 / 255.0;
    let bf = b as f32 / 255.0;

    let x = (0.412453 * rf + 0.357580 * gf + 0.180423 * bf) / XN;
    let y = 0.212671 * rf + 0.715160 * gf + 0.072169 * bf;
    let z = (0.019334 * rf + 0.119193 * gf + 0.950227 * bf) / ZN;

    let l = if y > EPSILON {
        116.0 * y.cbrt() - 16.0
    } else {
        KAPPA * y
    };
    let a = 500.0 * (f_cbrt(x) - f_cbrt(y));
    let bb = 200.0 * (f_cbrt(y) - f_cbrt(z));

    (
        clamp_u8(l * 255.0 / 100.0),
        clamp_u8(a + 128.0),
        clamp_u8(bb + 128.0),
    )
}

/// Convert 8-bit (L, a, b) back to one BGR pixel.
#[inline]
pub fn lab_to_pixel(l: u8, a: u8, b: u8) -> [u8; 3] {
    let lf = l as f32 * 100.0 / 255.0;
    let af = a as f32 - 128.0;
    let bf = b as f32 - 128.0;

    let fy = (lf + 16.0) / 116.0;
    let fx = fy + af / 500.0;
    let fz = fy - bf / 200.0;

    let y = if lf > KAPPA * EPSILON {
        fy * fy * fy
    } else {
        lf / KAPPA
    };
    let inv_f = |f: f32| {
        let f3 = f * f * f;
        if f3 > EPSILON {
            f3
        } else {
            (f - 16.0 / 116.0) / 7.787
        }
    };
    let x = inv_f(fx) * XN;
    let z = inv_f(fz) * ZN;

    let rf = 3.240479 * x - 1.537150 * y - 0.498535 * z;
    let gf = -0.969256 * x + 1.875992 * y + 0.041556 * z;
    let bl = 0.055648 * x - 0.204043 * y + 1.057311 * z;

    [
        clamp_u8(bl * 255.0),
        clamp_u8(gf * 255.0),
        clamp_u8(rf * 255.0),
    ]
}

/// Split a BGR buffer into LAB planes.
pub fn bgr_to_lab(src: &PixelBuffer) -> LabPlanes {
    let count = src.pixel_count();
    let mut l = Vec::with_capacity(count);
    let mut a = Vec::with_capacity(count);
    let mut b = Vec::with_capacity(count);

    for px in src.data().chunks_exact(3) {
        let (pl, pa, pb) = pixel_to_lab(px[0], px[1], px[2]);
        l.push(pl);
        a.push(pa);
        b.push(pb);
    }

    LabPlanes {
        width: src.width(),
        height: src.height(),
        l,
        a,
        b,
    }
}

/// Recombine LAB planes into a BGR buffer.
pub fn lab_to_bgr(planes: &LabPlanes) -> PixelBuffer {
    let mut data = Vec::with_capacity(planes.l.len() * 3);
    for i in 0..planes.l.len() {
        data.extend_from_slice(&lab_to_pixel(planes.l[i], planes.a[i], planes.b[i]));
    }
    PixelBuffer::from_raw(planes.width, planes.height, data)
        .expect("planes carry the dimensions they were split from")
}
