//! The filter battery: twelve independent transforms.

mod convolve;
mod denoise;
mod edges;
mod levels;
mod sepia;
mod sketch;
mod tone;
mod vignette;
mod xray;

pub use convolve::{emboss, sharpen};
pub use denoise::{noise_reduction, template_window};
pub use edges::edge_detection;
pub use levels::adjust_levels;
pub use sepia::{sepia, sepia_matrix};
pub use sketch::sketch_effect;
pub use tone::{adjust_hue, adjust_saturation, vibrance};
pub use vignette::{vignette, vignette_mask};
pub use xray::xray;

use crate::buffer::PixelBuffer;
use crate::options::FilterOptions;

/// One of the twelve filters, addressable by name.
///
/// The order of [`Effect::ALL`] is the presentation order of the result
/// set; it carries no computational meaning -- every filter reads the same
/// source buffer independently.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    Xray,
    Sharpen,
    Emboss,
    Saturation,
    Edges,
    Hue,
    Levels,
    Sketch,
    Sepia,
    Vibrance,
    Vignette,
    NoiseReduction,
}

impl Effect {
    /// All twelve filters in presentation order.
    pub const ALL: [Effect; 12] = [
        Effect::Xray,
        Effect::Sharpen,
        Effect::Emboss,
        Effect::Saturation,
        Effect::Edges,
        Effect::Hue,
        Effect::Levels,
        Effect::Sketch,
        Effect::Sepia,
        Effect::Vibrance,
        Effect::Vignette,
        Effect::NoiseReduction,
    ];

    /// The result-set key for this filter.
    pub fn name(self) -> &'static str {
        match self {
            Effect::Xray => "xray",
            Effect::Sharpen => "sharpen",
            Effect::Emboss => "emboss",
            Effect::Saturation => "saturation",
            Effect::Edges => "edges",
            Effect::Hue => "hue",
            Effect::Levels => "levels",
            Effect::Sketch => "sketch",
            Effect::Sepia => "sepia",
            Effect::Vibrance => "vibrance",
            Effect::Vignette => "vignette",
            Effect::NoiseReduction => "noise_reduction",
        }
    }

    /// Run this filter against a shared source buffer.
    pub fn apply(self, src: &PixelBuffer, opts: &FilterOptions) -> PixelBuffer {
        match self {
            Effect::Xray => xray(src),
            Effect::Sharpen => sharpen(src, opts.sharpen_intensity),
            Effect::Emboss => emboss(src, opts.emboss_strength),
            Effect::Saturation => adjust_saturation(src, opts.saturation_factor),
            Effect::Edges => edge_detection(src, opts.edge_threshold1, opts.edge_threshold2),
            Effect::Hue => adjust_hue(src, opts.hue_shift),
            Effect::Levels => adjust_levels(src),
            Effect::Sketch => sketch_effect(src),
            Effect::Sepia => sepia(src, opts.sepia_intensity),
            Effect::Vibrance => vibrance(src, opts.vibrance_factor),
            Effect::Vignette => vignette(src, opts.vignette_intensity),
            Effect::NoiseReduction => noise_reduction(src, opts.noise_reduction_strength),
        }
    }
}
