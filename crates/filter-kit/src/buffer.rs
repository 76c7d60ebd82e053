//! In-memory BGR image buffer.

use crate::error::FilterError;

/// A decoded raster image: 3 channels, 8 bits each, BGR order, row-major.
///
/// `PixelBuffer` is the only currency the filters deal in. Dimensions are
/// fixed at construction and every transform in this crate produces an
/// output with the same width and height as its input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelBuffer {
    width: u32,
    height: u32,
    data: Vec<u8>,
}

impl PixelBuffer {
    /// Create a buffer from raw interleaved BGR bytes.
    ///
    /// Returns an error if either dimension is zero or if `data` is not
    /// exactly `width * height * 3` bytes long.
    pub fn from_raw(width: u32, height: u32, data: Vec<u8>) -> Result<Self, FilterError> {
        if width == 0 || height == 0 {
            return Err(FilterError::EmptyImage { width, height });
        }
        let expected = width as usize * height as usize * 3;
        if data.len() != expected {
            return Err(FilterError::LengthMismatch {
                width,
                height,
                len: data.len(),
                expected,
            });
        }
        Ok(Self {
            width,
            height,
            data,
        })
    }

    /// Create a buffer with every pixel set to the given BGR triple.
    pub fn filled(width: u32, height: u32, bgr: [u8; 3]) -> Self {
        let count = width.max(1) as usize * height.max(1) as usize;
        let mut data = Vec::with_capacity(count * 3);
        for _ in 0..count {
            data.extend_from_slice(&bgr);
        }
        Self {
            width: width.max(1),
            height: height.max(1),
            data,
        }
    }

    /// Build a buffer by evaluating `f(x, y)` for every pixel.
    ///
    /// Zero dimensions are bumped to 1, like [`PixelBuffer::filled`], so the
    /// generated data always matches the stored width and height.
    pub fn from_fn(width: u32, height: u32, mut f: impl FnMut(u32, u32) -> [u8; 3]) -> Self {
        let (width, height) = (width.max(1), height.max(1));
        let mut data = Vec::with_capacity(width as usize * height as usize * 3);
        for y in 0..height {
            for x in 0..width {
                data.extend_from_slice(&f(x, y));
            }
        }
        Self {
            width,
            height,
            data,
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Number of pixels (width * height).
    pub fn pixel_count(&self) -> usize {
        self.width as usize * self.height as usize
    }

    /// Raw interleaved BGR bytes, row-major.
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// Consume the buffer and return its raw bytes.
    pub fn into_raw(self) -> Vec<u8> {
        self.data
    }

    #[inline]
    fn offset(&self, x: u32, y: u32) -> usize {
        (y as usize * self.width as usize + x as usize) * 3
    }

    /// BGR triple at (x, y). Panics if out of bounds, like slice indexing.
    #[inline]
    pub fn pixel(&self, x: u32, y: u32) -> [u8; 3] {
        let i = self.offset(x, y);
        [self.data[i], self.data[i + 1], self.data[i + 2]]
    }

    #[inline]
    pub fn set_pixel(&mut self, x: u32, y: u32, bgr: [u8; 3]) {
        let i = self.offset(x, y);
        self.data[i..i + 3].copy_from_slice(&bgr);
    }

    /// Map every BGR triple through `f`, producing a new buffer.
    pub fn map_pixels(&self, mut f: impl FnMut([u8; 3]) -> [u8; 3]) -> Self {
        let mut data = Vec::with_capacity(self.data.len());
        for px in self.data.chunks_exact(3) {
            data.extend_from_slice(&f([px[0], px[1], px[2]]));
        }
        Self {
            width: self.width,
            height: self.height,
            data,
        }
    }
}

/// Round and clamp a float sample to the 0..=255 byte range.
#[inline]
pub fn clamp_u8(v: f32) -> u8 {
    v.round().clamp(0.0, 255.0) as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_raw_rejects_zero_dimensions() {
        assert!(matches!(
            PixelBuffer::from_raw(0, 4, vec![]),
            Err(FilterError::EmptyImage { .. })
        ));
    }

    #[test]
    fn from_raw_rejects_wrong_length() {
        assert!(matches!(
            PixelBuffer::from_raw(2, 2, vec![0u8; 11]),
            Err(FilterError::LengthMismatch { expected: 12, .. })
        ));
    }

    #[test]
    fn from_fn_with_zero_dimension_stays_well_formed() {
        // Dimensions and data must agree even for degenerate inputs.
        let buf = PixelBuffer::from_fn(0, 3, |_, _| [1, 2, 3]);
        assert_eq!((buf.width(), buf.height()), (1, 3));
        assert_eq!(buf.data().len(), buf.pixel_count() * 3);
        assert_eq!(buf.pixel(0, 0), [1, 2, 3]);
        assert_eq!(buf.pixel(0, 2), [1, 2, 3]);
    }

    #[test]
    fn from_fn_evaluates_every_coordinate() {
        let buf = PixelBuffer::from_fn(3, 2, |x, y| [x as u8, y as u8, 0]);
        assert_eq!(buf.pixel(2, 1), [2, 1, 0]);
        assert_eq!(buf.data().len(), 3 * 2 * 3);
    }

    #[test]
    fn pixel_roundtrip() {
        let mut buf = PixelBuffer::filled(3, 2, [1, 2, 3]);
        buf.set_pixel(2, 1, [9, 8, 7]);
        assert_eq!(buf.pixel(2, 1), [9, 8, 7]);
        assert_eq!(buf.pixel(0, 0), [1, 2, 3]);
    }

    #[test]
    fn map_pixels_preserves_dimensions() {
        let buf = PixelBuffer::filled(5, 4, [10, 20, 30]);
        let out = buf.map_pixels(|[b, g, r]| [r, g, b]);
        assert_eq!((out.width(), out.height()), (5, 4));
        assert_eq!(out.pixel(4, 3), [30, 20, 10]);
    }

    #[test]
    fn clamp_u8_saturates() {
        assert_eq!(clamp_u8(-3.0), 0);
        assert_eq!(clamp_u8(254.6), 255);
        assert_eq!(clamp_u8(300.0), 255);
    }
}
