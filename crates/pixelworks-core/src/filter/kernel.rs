//! Convolution kernel definitions.
//!
//! A [`Kernel`] is a square table of weights with odd side length, so that it
//! has a well-defined centre cell. The two built-in tables are part of the
//! external contract: golden images depend on them bit for bit.

use std::fmt;

/// Gaussian-like 3x3 low-pass kernel. Weights sum to 1.
///
/// ```text
///    1/16  1/8  1/16
///    1/8   1/4  1/8
///    1/16  1/8  1/16
/// ```
pub const BLUR_WEIGHTS: [[f64; 3]; 3] = [
    [0.0625, 0.125, 0.0625],
    [0.125, 0.25, 0.125],
    [0.0625, 0.125, 0.0625],
];

/// 5x5 high-pass kernel: strong centre, positive inner ring, negative border.
///
/// ```text
///   -1/8 -1/8 -1/8 -1/8 -1/8
///   -1/8  1/4  1/4  1/4 -1/8
///   -1/8  1/4   1   1/4 -1/8
///   -1/8  1/4  1/4  1/4 -1/8
///   -1/8 -1/8 -1/8 -1/8 -1/8
/// ```
pub const SHARPEN_WEIGHTS: [[f64; 5]; 5] = [
    [-0.125, -0.125, -0.125, -0.125, -0.125],
    [-0.125, 0.25, 0.25, 0.25, -0.125],
    [-0.125, 0.25, 1.00, 0.25, -0.125],
    [-0.125, 0.25, 0.25, 0.25, -0.125],
    [-0.125, -0.125, -0.125, -0.125, -0.125],
];

/// Error type for kernel validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KernelError {
    /// No rows supplied
    Empty,
    /// Side length is even, so there is no centre cell
    EvenSize(usize),
    /// A row length differs from the number of rows
    NotSquare {
        /// Index of the offending row
        row: usize,
        /// Number of rows
        expected: usize,
        /// Length of the offending row
        actual: usize,
    },
}

impl fmt::Display for KernelError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            KernelError::Empty => write!(f, "kernel cannot be empty"),
            KernelError::EvenSize(size) => write!(
                f,
                "invalid kernel of size {}: provide a kernel with odd dimensions (ex: 3*3, 5*5)",
                size
            ),
            KernelError::NotSquare {
                row,
                expected,
                actual,
            } => write!(
                f,
                "invalid kernel: row {} has {} weights, expected {}",
                row, actual, expected
            ),
        }
    }
}

impl std::error::Error for KernelError {}

/// An immutable, square, odd-sized weight table.
///
/// # Example
///
/// ```
/// use pixelworks_core::{Kernel, KernelError};
///
/// let blur = Kernel::blur();
/// assert_eq!(blur.size(), 3);
/// assert_eq!(blur.weight(1, 1), 0.25);
///
/// assert_eq!(Kernel::new(vec![vec![1.0; 2]; 2]), Err(KernelError::EvenSize(2)));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Kernel {
    size: usize,
    /// Row-major, `size * size` entries.
    weights: Vec<f64>,
}

impl Kernel {
    /// Validate and build a kernel from rows of weights.
    pub fn new(rows: Vec<Vec<f64>>) -> Result<Self, KernelError> {
        let size = rows.len();
        if size == 0 {
            return Err(KernelError::Empty);
        }
        if size % 2 == 0 {
            return Err(KernelError::EvenSize(size));
        }

        let mut weights = Vec::with_capacity(size * size);
        for (row, values) in rows.into_iter().enumerate() {
            if values.len() != size {
                return Err(KernelError::NotSquare {
                    row,
                    expected: size,
                    actual: values.len(),
                });
            }
            weights.extend(values);
        }
        Ok(Self { size, weights })
    }

    /// The built-in blur kernel ([`BLUR_WEIGHTS`]).
    pub fn blur() -> Self {
        Self::from_table(&BLUR_WEIGHTS)
    }

    /// The built-in sharpen kernel ([`SHARPEN_WEIGHTS`]).
    pub fn sharpen() -> Self {
        Self::from_table(&SHARPEN_WEIGHTS)
    }

    // Const tables are square and odd by construction.
    fn from_table<const N: usize>(table: &[[f64; N]; N]) -> Self {
        debug_assert!(N % 2 == 1);
        Self {
            size: N,
            weights: table.iter().flatten().copied().collect(),
        }
    }

    /// Side length.
    #[inline]
    pub fn size(&self) -> usize {
        self.size
    }

    /// Distance from the centre cell to the edge, `size / 2`.
    #[inline]
    pub fn radius(&self) -> usize {
        self.size / 2
    }

    /// Weight at row `x`, column `y`.
    #[inline]
    pub fn weight(&self, x: usize, y: usize) -> f64 {
        self.weights[x * self.size + y]
    }

    /// Sum of all weights.
    pub fn sum(&self) -> f64 {
        self.weights.iter().sum()
    }
}
