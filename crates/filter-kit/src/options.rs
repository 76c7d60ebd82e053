//! Per-filter scalar parameters.

/// Scalar parameters for the parameterized filters, one field per knob.
///
/// Every field has a sensible default and no enforced range: extreme values
/// degrade the picture gracefully through the per-filter clamping rules
/// rather than erroring. Parse text into numbers *before* building this
/// struct -- that is the caller's boundary, not this crate's.
///
/// # Example
///
/// ```
/// use filter_kit::FilterOptions;
///
/// let opts = FilterOptions::default()
///     .sharpen_intensity(2.0)
///     .vignette_intensity(0.8);
/// assert_eq!(opts.sepia_intensity, 0.5);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct FilterOptions {
    /// Sharpen kernel scale. 1.0 = standard 3x3 sharpen.
    pub sharpen_intensity: f32,
    /// Emboss gradient scale. 1.0 = standard diagonal emboss.
    pub emboss_strength: f32,
    /// Saturation multiplier. 1.0 = unchanged, 1.5 = 50% boost.
    pub saturation_factor: f32,
    /// Weak-edge gradient threshold.
    pub edge_threshold1: f32,
    /// Strong-edge gradient threshold. Expected >= `edge_threshold1`;
    /// swapped values are passed through as-is (garbage in, garbage out).
    pub edge_threshold2: f32,
    /// Hue rotation as a fraction of the 180-unit hue wheel.
    pub hue_shift: f32,
    /// Sepia matrix blend: 0.0 = identity, 1.0 = full sepia matrix.
    pub sepia_intensity: f32,
    /// Saturation multiplier applied only above the image's mean saturation.
    pub vibrance_factor: f32,
    /// Exponent applied to the peak-normalized vignette mask.
    pub vignette_intensity: f32,
    /// Non-local-means template window; coerced to the nearest odd integer.
    pub noise_reduction_strength: f32,
}

impl Default for FilterOptions {
    fn default() -> Self {
        Self {
            sharpen_intensity: 1.0,
            emboss_strength: 1.0,
            saturation_factor: 1.5,
            edge_threshold1: 100.0,
            edge_threshold2: 200.0,
            hue_shift: 0.5,
            sepia_intensity: 0.5,
            vibrance_factor: 1.5,
            vignette_intensity: 1.0,
            noise_reduction_strength: 7.0,
        }
    }
}

impl FilterOptions {
    pub fn sharpen_intensity(mut self, v: f32) -> Self {
        self.sharpen_intensity = v;
        self
    }

    pub fn emboss_strength(mut self, v: f32) -> Self {
        self.emboss_strength = v;
        self
    }

    pub fn saturation_factor(mut self, v: f32) -> Self {
        self.saturation_factor = v;
        self
    }

    pub fn edge_thresholds(mut self, t1: f32, t2: f32) -> Self {
        self.edge_threshold1 = t1;
        self.edge_threshold2 = t2;
        self
    }

    pub fn hue_shift(mut self, v: f32) -> Self {
        self.hue_shift = v;
        self
    }

    pub fn sepia_intensity(mut self, v: f32) -> Self {
        self.sepia_intensity = v;
        self
    }

    pub fn vibrance_factor(mut self, v: f32) -> Self {
        self.vibrance_factor = v;
        self
    }

    pub fn vignette_intensity(mut self, v: f32) -> Self {
        self.vignette_intensity = v;
        self
    }

    pub fn noise_reduction_strength(mut self, v: f32) -> Self {
        self.noise_reduction_strength = v;
        self
    }
}
