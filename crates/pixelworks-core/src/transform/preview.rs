//! Split-preview compositing.
//!
//! A split preview shows a transform on the left part of the image and the
//! untouched original on the right, so a user can compare both in one frame.

use std::fmt;

use crate::raster::{Raster, RasterError};

/// Error type for split-preview configuration.
#[derive(Debug, Clone, PartialEq)]
pub enum PreviewError {
    /// Width percentage outside `[0, 100]` (or NaN)
    PercentOutOfRange(f64),
}

impl fmt::Display for PreviewError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PreviewError::PercentOutOfRange(percent) => write!(
                f,
                "invalid value of width percentage {}: it should be between 0 to 100",
                percent
            ),
        }
    }
}

impl std::error::Error for PreviewError {}

/// A validated split position, in percent of the image width.
///
/// Columns `0..floor(width * percent / 100)` come from the transformed image,
/// the remaining columns from the original. At 0% the result equals the
/// original, at 100% it equals the transformed image.
///
/// The cut column itself belongs to the original: 50% of a 4-wide image
/// transforms columns 0 and 1 only.
///
/// # Example
///
/// ```
/// use pixelworks_core::{Pixel, Raster, SplitPreview};
///
/// let original = Raster::filled(1, 4, Pixel::BLACK).unwrap();
/// let transformed = Raster::filled(1, 4, Pixel::WHITE).unwrap();
///
/// let half = SplitPreview::new(50.0).unwrap();
/// let out = half.composite(&original, &transformed).unwrap();
/// assert_eq!(out.pixel(0, 1), Pixel::WHITE);
/// assert_eq!(out.pixel(0, 2), Pixel::BLACK);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SplitPreview {
    percent: f64,
}

impl SplitPreview {
    /// Validate a width percentage.
    pub fn new(percent: f64) -> Result<Self, PreviewError> {
        if !(0.0..=100.0).contains(&percent) {
            return Err(PreviewError::PercentOutOfRange(percent));
        }
        Ok(Self { percent })
    }

    #[inline]
    pub fn percent(&self) -> f64 {
        self.percent
    }

    /// Number of leading columns taken from the transformed image.
    pub fn cut_column(&self, width: usize) -> usize {
        let cut = (width as f64 * (self.percent / 100.0)).floor() as usize;
        cut.min(width)
    }

    /// Blend `transformed` into `original` column-wise.
    ///
    /// Both rasters must have the same dimensions.
    pub fn composite(&self, original: &Raster, transformed: &Raster) -> Result<Raster, RasterError> {
        if original.dimensions() != transformed.dimensions() {
            return Err(RasterError::DimensionMismatch {
                expected: original.dimensions(),
                actual: transformed.dimensions(),
            });
        }

        let cut = self.cut_column(original.width());
        let mut pixels = Vec::with_capacity(original.pixels().len());
        for (left, right) in transformed.rows().zip(original.rows()) {
            pixels.extend_from_slice(&left[..cut]);
            pixels.extend_from_slice(&right[cut..]);
        }
        Ok(original.derive(pixels))
    }
}
