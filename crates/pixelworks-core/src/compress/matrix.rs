//! Square real-valued working matrix for the wavelet transform.

use crate::color::{Channel, CHANNEL_MAX};
use crate::raster::Raster;

/// Smallest power of two that is `>= n` (and at least 1).
pub fn padded_size(n: usize) -> usize {
    n.max(1).next_power_of_two()
}

/// An `S x S` matrix of `f64`, row-major.
///
/// One channel of a raster is copied into the top-left corner; the padding
/// cells start at zero.
#[derive(Debug, Clone, PartialEq)]
pub struct SquareMatrix {
    size: usize,
    data: Vec<f64>,
}

impl SquareMatrix {
    /// All-zero matrix.
    pub fn zeros(size: usize) -> Self {
        Self {
            size,
            data: vec![0.0; size * size],
        }
    }

    /// Copy `channel` of `raster` into a zero-padded matrix whose side is
    /// the next power of two of `max(height, width)`.
    pub fn padded_from(raster: &Raster, channel: Channel) -> Self {
        let size = padded_size(raster.height().max(raster.width()));
        let mut matrix = Self::zeros(size);
        for (i, row) in raster.rows().enumerate() {
            for (j, pixel) in row.iter().enumerate() {
                matrix.set(i, j, pixel.channel(channel) as f64);
            }
        }
        matrix
    }

    #[inline]
    pub fn size(&self) -> usize {
        self.size
    }

    #[inline]
    pub fn get(&self, i: usize, j: usize) -> f64 {
        self.data[i * self.size + j]
    }

    #[inline]
    pub fn set(&mut self, i: usize, j: usize, value: f64) {
        self.data[i * self.size + j] = value;
    }

    /// All cells, row-major.
    #[inline]
    pub fn values(&self) -> &[f64] {
        &self.data
    }

    /// Mutable access to all cells.
    #[inline]
    pub fn values_mut(&mut self) -> &mut [f64] {
        &mut self.data
    }

    /// First `len` entries of row `i`.
    pub fn row_prefix(&self, i: usize, len: usize) -> Vec<f64> {
        let start = i * self.size;
        self.data[start..start + len].to_vec()
    }

    /// Overwrite the first entries of row `i`.
    pub fn set_row_prefix(&mut self, i: usize, values: &[f64]) {
        let start = i * self.size;
        self.data[start..start + values.len()].copy_from_slice(values);
    }

    /// First `len` entries of column `j`.
    pub fn column_prefix(&self, j: usize, len: usize) -> Vec<f64> {
        (0..len).map(|i| self.get(i, j)).collect()
    }

    /// Overwrite the first entries of column `j`.
    pub fn set_column_prefix(&mut self, j: usize, values: &[f64]) {
        for (i, &value) in values.iter().enumerate() {
            self.set(i, j, value);
        }
    }

    /// Channel values of the top-left `height x width` block, truncated
    /// toward zero and clamped into `0..=255`.
    pub fn unpad(&self, height: usize, width: usize) -> Vec<i32> {
        let mut out = Vec::with_capacity(height * width);
        for i in 0..height {
            for j in 0..width {
                out.push((self.get(i, j) as i32).clamp(0, CHANNEL_MAX));
            }
        }
        out
    }
}
