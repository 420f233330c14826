//! The immutable pixel grid every engine operates on.

use crate::color::Pixel;

use super::error::RasterError;

/// Maximum channel value reported by every raster.
pub const MAX_VALUE: u16 = 255;

/// A `height x width` grid of [`Pixel`]s stored row-major.
///
/// Rasters never change after construction. Every transform returns a new
/// raster and leaves its input untouched, so a raster can be shared
/// (for example behind an `Arc`) and read by any number of transforms.
///
/// # Example
///
/// ```
/// use pixelworks_core::{Pixel, Raster};
///
/// let raster = Raster::from_rows(vec![
///     vec![Pixel::new(1, 2, 3), Pixel::new(4, 5, 6)],
/// ])
/// .unwrap();
///
/// assert_eq!(raster.height(), 1);
/// assert_eq!(raster.width(), 2);
/// assert_eq!(raster.horizontal_flip().pixel(0, 0), Pixel::new(4, 5, 6));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Raster {
    height: usize,
    width: usize,
    pixels: Vec<Pixel>,
}

impl Raster {
    /// Build a raster from a flat row-major pixel buffer.
    ///
    /// Fails when either dimension is zero or when the buffer length is not
    /// `height * width`.
    pub fn new(height: usize, width: usize, pixels: Vec<Pixel>) -> Result<Self, RasterError> {
        if height == 0 || width == 0 {
            return Err(RasterError::Empty);
        }
        let expected = height * width;
        if pixels.len() != expected {
            return Err(RasterError::LengthMismatch {
                expected,
                actual: pixels.len(),
            });
        }
        Ok(Self {
            height,
            width,
            pixels,
        })
    }

    /// Build a raster from nested rows.
    ///
    /// Every row must have the length of the first row.
    pub fn from_rows(rows: Vec<Vec<Pixel>>) -> Result<Self, RasterError> {
        let height = rows.len();
        let width = rows.first().map_or(0, Vec::len);
        if height == 0 || width == 0 {
            return Err(RasterError::Empty);
        }

        let mut pixels = Vec::with_capacity(height * width);
        for (row, values) in rows.into_iter().enumerate() {
            if values.len() != width {
                return Err(RasterError::RaggedRows {
                    row,
                    expected: width,
                    actual: values.len(),
                });
            }
            pixels.extend(values);
        }
        Self::new(height, width, pixels)
    }

    /// A raster with every pixel set to `pixel`.
    pub fn filled(height: usize, width: usize, pixel: Pixel) -> Result<Self, RasterError> {
        Self::new(height, width, vec![pixel; height * width])
    }

    /// Build a raster by evaluating `f(row, col)` for every position.
    pub fn from_fn<F>(height: usize, width: usize, mut f: F) -> Result<Self, RasterError>
    where
        F: FnMut(usize, usize) -> Pixel,
    {
        let mut pixels = Vec::with_capacity(height * width);
        for i in 0..height {
            for j in 0..width {
                pixels.push(f(i, j));
            }
        }
        Self::new(height, width, pixels)
    }

    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    /// Always [`MAX_VALUE`].
    #[inline]
    pub fn max_value(&self) -> u16 {
        MAX_VALUE
    }

    /// `(height, width)`.
    #[inline]
    pub fn dimensions(&self) -> (usize, usize) {
        (self.height, self.width)
    }

    /// All pixels, row-major.
    #[inline]
    pub fn pixels(&self) -> &[Pixel] {
        &self.pixels
    }

    /// Iterate over rows as slices.
    pub fn rows(&self) -> impl DoubleEndedIterator<Item = &[Pixel]> + ExactSizeIterator {
        self.pixels.chunks_exact(self.width)
    }

    /// Checked pixel access.
    pub fn get(&self, row: usize, col: usize) -> Result<Pixel, RasterError> {
        if row >= self.height || col >= self.width {
            return Err(RasterError::OutOfBounds {
                row,
                col,
                height: self.height,
                width: self.width,
            });
        }
        Ok(self.pixels[row * self.width + col])
    }

    /// Pixel at `(row, col)`.
    ///
    /// # Panics
    ///
    /// Panics when the index is outside the raster. Out-of-range indexing is
    /// a programming error and is never clamped.
    #[inline]
    pub fn pixel(&self, row: usize, col: usize) -> Pixel {
        match self.get(row, col) {
            Ok(pixel) => pixel,
            Err(err) => panic!("{}", err),
        }
    }

    /// Mirror left to right.
    pub fn horizontal_flip(&self) -> Raster {
        let mut pixels = Vec::with_capacity(self.pixels.len());
        for row in self.rows() {
            pixels.extend(row.iter().rev());
        }
        self.derive(pixels)
    }

    /// Mirror top to bottom.
    pub fn vertical_flip(&self) -> Raster {
        let mut pixels = Vec::with_capacity(self.pixels.len());
        for row in self.rows().rev() {
            pixels.extend_from_slice(row);
        }
        self.derive(pixels)
    }

    /// Apply `f` to every pixel independently of its position.
    pub fn apply_transform<F>(&self, f: F) -> Raster
    where
        F: Fn(Pixel) -> Pixel,
    {
        self.derive(self.pixels.iter().map(|&p| f(p)).collect())
    }

    /// Flat `[R, G, B, R, G, B, ...]` buffer, row-major.
    ///
    /// This is the hand-off format for preview renderers. The buffer has
    /// length `width * height * 3`.
    pub fn to_rgb_bytes(&self) -> Vec<u8> {
        let mut rgb = Vec::with_capacity(self.pixels.len() * 3);
        for pixel in &self.pixels {
            rgb.extend_from_slice(&pixel.to_bytes());
        }
        rgb
    }

    /// Same-size raster over a new buffer.
    pub(crate) fn derive(&self, pixels: Vec<Pixel>) -> Raster {
        debug_assert_eq!(pixels.len(), self.pixels.len());
        Raster {
            height: self.height,
            width: self.width,
            pixels,
        }
    }
}
