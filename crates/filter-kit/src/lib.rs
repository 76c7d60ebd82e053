//! filter-kit: pure pixel-buffer transforms
//!
//! This library implements the filter battery behind the darkroom service:
//! twelve independent, deterministic transforms over an in-memory BGR image.
//! It has no I/O and no codec knowledge -- decoding bytes into a
//! [`PixelBuffer`] and encoding results back out are the caller's concern.
//!
//! # Quick Start
//!
//! ```
//! use filter_kit::{Effect, FilterOptions, PixelBuffer};
//!
//! let src = PixelBuffer::filled(64, 64, [30, 60, 200]);
//! let opts = FilterOptions::default();
//!
//! for effect in Effect::ALL {
//!     let out = effect.apply(&src, &opts);
//!     assert_eq!((out.width(), out.height()), (64, 64));
//! }
//! ```
//!
//! # Design
//!
//! - Every filter takes a shared `&PixelBuffer` and returns a new owned
//!   buffer of the same dimensions. Filters never see each other's output,
//!   so a caller may fan them out across threads freely.
//! - Arithmetic that can leave the 0..=255 range is clamped (or, for hue,
//!   wrapped) as documented per filter. No finite parameter value causes an
//!   error; degenerate parameters produce degenerate pictures, not panics.
//! - Color-space conversions follow the 8-bit conventions common in imaging
//!   pipelines: hue 0..=179, saturation/value 0..=255, LAB lightness scaled
//!   to 0..=255 with a/b offset by 128.

pub mod buffer;
pub mod color;
pub mod effects;
pub mod error;
pub mod kernel;
pub mod options;


pub use buffer::PixelBuffer;
pub use effects::Effect;
pub use error::FilterError;
pub use options::FilterOptions;
