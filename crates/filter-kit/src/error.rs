use thiserror::Error;

/// Errors raised when constructing a [`crate::PixelBuffer`] from raw bytes.
///
/// Filters themselves are infallible: a buffer that exists is guaranteed to
/// be a well-formed 3-channel BGR image, so shape violations are rejected
/// once, at construction.
#[derive(Debug, Error)]
pub enum FilterError {
    #[error("image dimensions must be at least 1x1, got {width}x{height}")]
    EmptyImage { width: u32, height: u32 },

    #[error("pixel data length {len} does not match {width}x{height} BGR ({expected} bytes)")]
    LengthMismatch {
        width: u32,
        height: u32,
        len: usize,
        expected: usize,
    },
}
