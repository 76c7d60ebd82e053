//! Sepia tone via an intensity-blended color mixing matrix.

use crate::buffer::{clamp_u8, PixelBuffer};

/// The canonical sepia mixing matrix, rows producing (R, G, B) from
/// (R, G, B).
const SEPIA: [[f32; 3]; 3] = [
    [0.393, 0.769, 0.189],
    [0.349, 0.686, 0.168],
    [0.272, 0.534, 0.131],
];

const IDENTITY: [[f32; 3]; 3] = [
    [1.0, 0.0, 0.0],
    [0.0, 1.0, 0.0],
    [0.0, 0.0, 1.0],
];

/// Mixing matrix for a given intensity: a linear blend from identity
/// (intensity 0) to the canonical sepia matrix (intensity 1).
pub fn sepia_matrix(intensity: f32) -> [[f32; 3]; 3] {
    let mut m = [[0.0f32; 3]; 3];
    for row in 0..3 {
        for col in 0..3 {
            m[row][col] =
                IDENTITY[row][col] * (1.0 - intensity) + SEPIA[row][col] * intensity;
        }
    }
    m
}

/// Apply the blended sepia matrix to every pixel; each output channel is
/// the matrix-vector product of the RGB triple, rounded and clamped.
pub fn sepia(src: &PixelBuffer, intensity: f32) -> PixelBuffer {
    let m = sepia_matrix(intensity);
    src.map_pixels(|[b, g, r]| {
        let rgb = [r as f32, g as f32, b as f32];
        let mix = |row: &[f32; 3]| row[0] * rgb[0] + row[1] * rgb[1] + row[2] * rgb[2];
        [clamp_u8(mix(&m[2])), clamp_u8(mix(&m[1])), clamp_u8(mix(&m[0]))]
    })
}
