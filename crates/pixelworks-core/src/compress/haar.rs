//! Orthonormal Haar wavelet, 1D and 2D.
//!
//! The 1D step turns each adjacent pair `(a, b)` into an average
//! `(a + b) / sqrt(2)` (first half of the output) and a difference
//! `(a - b) / sqrt(2)` (second half). The 2D transform repeats the step on
//! rows and then columns while halving the active size, which leaves the
//! recursive decomposition in the top-left corner.
//!
//! ```text
//! forward, c = S, S/2, ..., 2:      inverse, c = 2, 4, ..., S:
//!   rows[0..S]   first c entries      cols[0..S]   first c entries
//!   cols[0..S]   first c entries      rows[0..S]   first c entries
//! ```
//!
//! Every row and every column is visited in every round, not only the ones
//! inside the active block. The inverse mirrors that order exactly, so the
//! round trip reconstructs the input up to floating-point error.

use std::f64::consts::SQRT_2;

use super::matrix::SquareMatrix;

/// One forward Haar step over an even-length sequence.
pub fn forward_1d(s: &[f64]) -> Vec<f64> {
    debug_assert!(s.len() % 2 == 0);
    let half = s.len() / 2;
    let mut out = vec![0.0; s.len()];
    for (k, pair) in s.chunks_exact(2).enumerate() {
        let (a, b) = (pair[0], pair[1]);
        out[k] = (a + b) / SQRT_2;
        out[half + k] = (a - b) / SQRT_2;
    }
    out
}

/// Inverse of [`forward_1d`].
pub fn inverse_1d(s: &[f64]) -> Vec<f64> {
    debug_assert!(s.len() % 2 == 0);
    let (avg, diff) = s.split_at(s.len() / 2);
    let mut out = Vec::with_capacity(s.len());
    for (&a, &b) in avg.iter().zip(diff) {
        out.push((a + b) / SQRT_2);
        out.push((a - b) / SQRT_2);
    }
    out
}

/// In-place forward 2D transform. `m.size()` must be a power of two.
pub fn forward_2d(m: &mut SquareMatrix) {
    let s = m.size();
    let mut c = s;
    while c > 1 {
        for i in 0..s {
            let row = forward_1d(&m.row_prefix(i, c));
            m.set_row_prefix(i, &row);
        }
        for j in 0..s {
            let column = forward_1d(&m.column_prefix(j, c));
            m.set_column_prefix(j, &column);
        }
        c /= 2;
    }
}

/// In-place inverse 2D transform, undoing [`forward_2d`].
pub fn inverse_2d(m: &mut SquareMatrix) {
    let s = m.size();
    let mut c = 2;
    while c <= s {
        for j in 0..s {
            let column = inverse_1d(&m.column_prefix(j, c));
            m.set_column_prefix(j, &column);
        }
        for i in 0..s {
            let row = inverse_1d(&m.row_prefix(i, c));
            m.set_row_prefix(i, &row);
        }
        c *= 2;
    }
}
