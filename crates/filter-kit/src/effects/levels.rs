//! Levels adjustment: CLAHE on the LAB lightness channel.
//!
//! Contrast-limited adaptive histogram equalization, clip limit 3.0 over an
//! 8x8 tile grid. Only lightness is equalized; the a/b chroma planes pass
//! through untouched so colors do not drift.

use crate::buffer::PixelBuffer;
use crate::color::{bgr_to_lab, lab_to_bgr};

const CLIP_LIMIT: f32 = 3.0;
const TILES_X: usize = 8;
const TILES_Y: usize = 8;

/// Equalize local contrast in the lightness channel.
pub fn adjust_levels(src: &PixelBuffer) -> PixelBuffer {
    let mut lab = bgr_to_lab(src);
    lab.l = clahe_plane(
        &lab.l,
        lab.width as usize,
        lab.height as usize,
        CLIP_LIMIT,
        TILES_X,
        TILES_Y,
    );
    lab_to_bgr(&lab)
}

/// CLAHE over a single 8-bit plane.
///
/// Each tile gets a clipped, redistributed histogram turned into an
/// equalization LUT; pixels are mapped through a bilinear blend of the four
/// nearest tile LUTs so tile seams stay invisible.
fn clahe_plane(
    plane: &[u8],
    width: usize,
    height: usize,
    clip_limit: f32,
    tiles_x: usize,
    tiles_y: usize,
) -> Vec<u8> {
    // Images smaller than the grid collapse to fewer (never zero) tiles.
    let tiles_x = tiles_x.min(width).max(1);
    let tiles_y = tiles_y.min(height).max(1);
    let tile_w = width.div_ceil(tiles_x);
    let tile_h = height.div_ceil(tiles_y);

    // One 256-entry LUT per tile.
    let mut luts = vec![[0u8; 256]; tiles_x * tiles_y];
    for ty in 0..tiles_y {
        for tx in 0..tiles_x {
            let x0 = tx * tile_w;
            let y0 = ty * tile_h;
            let x1 = (x0 + tile_w).min(width);
            let y1 = (y0 + tile_h).min(height);

            let mut hist = [0u32; 256];
            for y in y0..y1 {
                for x in x0..x1 {
                    hist[plane[y * width + x] as usize] += 1;
                }
            }
            let area = ((x1 - x0) * (y1 - y0)) as u32;

            // Clip and redistribute the excess uniformly.
            let clip = ((clip_limit * area as f32 / 256.0) as u32).max(1);
            let mut excess = 0u32;
            for bin in hist.iter_mut() {
                if *bin > clip {
                    excess += *bin - clip;
                    *bin = clip;
                }
            }
            let bonus = excess / 256;
            let mut remainder = excess % 256;
            for bin in hist.iter_mut() {
                *bin += bonus;
                if remainder > 0 {
                    *bin += 1;
                    remainder -= 1;
                }
            }

            // Equalization LUT from the cumulative histogram.
            let lut = &mut luts[ty * tiles_x + tx];
            let mut cdf = 0u32;
            for (i, &bin) in hist.iter().enumerate() {
                cdf += bin;
                lut[i] = ((cdf as f32 * 255.0 / area as f32).round()).clamp(0.0, 255.0) as u8;
            }
        }
    }

    // Bilinear interpolation between tile LUTs, anchored at tile centers.
    let mut out = vec![0u8; plane.len()];
    for y in 0..height {
        let gy = (y as f32 + 0.5) / tile_h as f32 - 0.5;
        let ty0 = gy.floor().clamp(0.0, (tiles_y - 1) as f32) as usize;
        let ty1 = (ty0 + 1).min(tiles_y - 1);
        let fy = (gy - ty0 as f32).clamp(0.0, 1.0);

        for x in 0..width {
            let gx = (x as f32 + 0.5) / tile_w as f32 - 0.5;
            let tx0 = gx.floor().clamp(0.0, (tiles_x - 1) as f32) as usize;
            let tx1 = (tx0 + 1).min(tiles_x - 1);
            let fx = (gx - tx0 as f32).clamp(0.0, 1.0);

            let v = plane[y * width + x] as usize;
            let tl = luts[ty0 * tiles_x + tx0][v] as f32;
            let tr = luts[ty0 * tiles_x + tx1][v] as f32;
            let bl = luts[ty1 * tiles_x + tx0][v] as f32;
            let br = luts[ty1 * tiles_x + tx1][v] as f32;

            let top = tl + (tr - tl) * fx;
            let bottom = bl + (br - bl) * fx;
            out[y * width + x] = (top + (bottom - top) * fy).round().clamp(0.0, 255.0) as u8;
        }
    }
    out
}
