//! Color space conversions.
//!
//! Three representations besides BGR, each isolating a property some filter
//! needs to adjust independently:
//!
//! - grayscale: single luma plane (x-ray, edges, sketch)
//! - HSV: hue 0..=179, saturation/value 0..=255 (saturation, hue, vibrance)
//! - LAB: lightness/chroma, 8-bit scaled (levels, noise reduction)
//!
//! All conversions preserve dimensions and round-trip within rounding error.

pub mod gray;
pub mod hsv;
pub mod lab;

pub use gray::{bgr_to_gray, gray_to_bgr};
pub use hsv::{bgr_to_hsv, hsv_to_bgr, HsvPlanes};
pub use lab::{bgr_to_lab, lab_to_bgr, LabPlanes};
