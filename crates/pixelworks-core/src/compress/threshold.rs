//! Coefficient thresholding.
//!
//! The cut-off is a percentile over the *distinct* non-zero magnitudes of
//! the transformed matrix, not over all coefficients. A magnitude that
//! appears a thousand times counts once.

use super::matrix::SquareMatrix;

/// Sorted, deduplicated absolute values of every non-zero coefficient.
pub fn distinct_magnitudes(m: &SquareMatrix) -> Vec<f64> {
    let mut magnitudes: Vec<f64> = m
        .values()
        .iter()
        .filter(|&&v| v != 0.0)
        .map(|v| v.abs())
        .collect();
    magnitudes.sort_by(f64::total_cmp);
    magnitudes.dedup();
    magnitudes
}

/// Threshold for `fraction` (in `[0, 1]`) of the sorted distinct magnitudes.
///
/// With `n = (len * fraction) as usize`, returns 0 when `n < 1` (nothing is
/// suppressed) and otherwise the `n`-th smallest magnitude. The product is
/// truncated after the float multiply, so a fraction whose decimal form is
/// not exact can land one rank lower (`100 * 0.29` gives rank 28).
pub fn find_threshold(sorted: &[f64], fraction: f64) -> f64 {
    let n = (sorted.len() as f64 * fraction) as usize;
    if n < 1 {
        return 0.0;
    }
    sorted[n.min(sorted.len()) - 1]
}

/// Zero every coefficient whose magnitude is strictly below `threshold`.
pub fn suppress_below(m: &mut SquareMatrix, threshold: f64) {
    for value in m.values_mut() {
        if value.abs() < threshold {
            *value = 0.0;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn matrix(values: &[f64]) -> SquareMatrix {
        let size = (values.len() as f64).sqrt() as usize;
        let mut m = SquareMatrix::zeros(size);
        m.values_mut().copy_from_slice(values);
        m
    }

    #[test]
    fn test_distinct_magnitudes_dedups_and_drops_zero() {
        let m = matrix(&[3.0, -3.0, 0.0, 1.5]);
        assert_eq!(distinct_magnitudes(&m), vec![1.5, 3.0]);
    }

    #[test]
    fn test_threshold_counts_distinct_values_only() {
        // many repeats of 1.0 still occupy a single rank
        let m = matrix(&[1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 2.0, 3.0]);
        let sorted = distinct_magnitudes(&m);
        assert_eq!(sorted, vec![1.0, 2.0, 3.0]);
        assert_eq!(find_threshold(&sorted, 0.7), 2.0);
    }

    #[test]
    fn test_threshold_below_one_rank_is_zero() {
        let sorted = vec![1.0, 2.0, 3.0];
        assert_eq!(find_threshold(&sorted, 0.0), 0.0);
        assert_eq!(find_threshold(&sorted, 0.3), 0.0);
        assert_eq!(find_threshold(&sorted, 0.34), 1.0);
        assert_eq!(find_threshold(&sorted, 1.0), 3.0);
        assert_eq!(find_threshold(&[], 1.0), 0.0);
    }

    #[test]
    fn test_threshold_rank_truncates_float_product() {
        let sorted: Vec<f64> = (1..=100).map(f64::from).collect();
        assert_eq!(find_threshold(&sorted, 29.0 / 100.0), 28.0);
        assert_eq!(find_threshold(&sorted, 0.5), 50.0);
    }

    #[test]
    fn test_suppress_is_strict() {
        let mut m = matrix(&[1.0, -2.0, 2.0, -3.0]);
        suppress_below(&mut m, 2.0);
        assert_eq!(m.values(), &[0.0, -2.0, 2.0, -3.0]);
    }
}
