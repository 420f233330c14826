//! Error types for raster construction and indexing.

use std::fmt;

/// Error type for raster shape problems.
///
/// Returned when a raster cannot be built from the supplied pixels, when a
/// pixel index falls outside the grid, or when several rasters that must
/// share a size do not.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RasterError {
    /// Height or width is zero
    Empty,
    /// A row does not have the same length as the first row
    RaggedRows {
        /// Index of the offending row
        row: usize,
        /// Width established by the first row
        expected: usize,
        /// Length of the offending row
        actual: usize,
    },
    /// Flat pixel buffer length does not equal `height * width`
    LengthMismatch {
        /// `height * width`
        expected: usize,
        /// Number of pixels supplied
        actual: usize,
    },
    /// Pixel index outside `[0, height) x [0, width)`
    OutOfBounds {
        row: usize,
        col: usize,
        height: usize,
        width: usize,
    },
    /// Rasters that must share dimensions do not
    DimensionMismatch {
        /// `(height, width)` of the reference raster
        expected: (usize, usize),
        /// `(height, width)` of the mismatching raster
        actual: (usize, usize),
    },
}

impl fmt::Display for RasterError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RasterError::Empty => {
                write!(f, "raster must have at least one row and one column")
            }
            RasterError::RaggedRows {
                row,
                expected,
                actual,
            } => write!(
                f,
                "row {} has {} pixels, expected {}",
                row, actual, expected
            ),
            RasterError::LengthMismatch { expected, actual } => write!(
                f,
                "pixel buffer holds {} pixels, expected {}",
                actual, expected
            ),
            RasterError::OutOfBounds {
                row,
                col,
                height,
                width,
            } => write!(
                f,
                "pixel index ({}, {}) out of bounds for {}x{} raster",
                row, col, height, width
            ),
            RasterError::DimensionMismatch { expected, actual } => write!(
                f,
                "images do not have the same dimension: {}x{} vs {}x{}",
                expected.0, expected.1, actual.0, actual.1
            ),
        }
    }
}

impl std::error::Error for RasterError {}
