//! Lossy Haar-wavelet compression.
//!
//! Each channel is processed independently:
//!
//! ```text
//! channel (H x W)
//!     |  pad with zeros to S x S, S = next power of two of max(H, W)
//!     v
//! forward 2D Haar
//!     |  threshold = percentile over distinct |coefficient| values
//!     |  zero every coefficient with |c| < threshold
//!     v
//! inverse 2D Haar
//!     |  crop to H x W, truncate toward zero, clamp to 0..=255
//!     v
//! channel (H x W)
//! ```
//!
//! Higher percentages discard more of the low-magnitude detail. At 0% the
//! threshold is zero and the output matches the input up to truncation of
//! floating-point error; at 100% only the largest magnitudes survive and the
//! image degenerates to flat blocks.

pub mod haar;
mod matrix;
pub mod threshold;

use std::fmt;

use crate::color::{Channel, Pixel};
use crate::raster::Raster;

pub use matrix::{padded_size, SquareMatrix};

/// Error type for compression parameters.
#[derive(Debug, Clone, PartialEq)]
pub enum CompressError {
    /// Percentage outside `[0, 100]` (or NaN)
    PercentOutOfRange(f64),
}

impl fmt::Display for CompressError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CompressError::PercentOutOfRange(percent) => write!(
                f,
                "compression percentage must be between 0 and 100, got {}",
                percent
            ),
        }
    }
}

impl std::error::Error for CompressError {}

/// Compress `raster`, discarding `percentage` percent of the distinct
/// coefficient magnitudes in every channel.
///
/// # Example
///
/// ```
/// use pixelworks_core::{compress, Pixel, Raster};
///
/// let raster = Raster::from_fn(3, 5, |i, j| Pixel::grey((i * 40 + j * 10) as i32)).unwrap();
/// let out = compress(&raster, 60.0).unwrap();
/// assert_eq!(out.dimensions(), raster.dimensions());
///
/// assert!(compress(&raster, 101.0).is_err());
/// ```
pub fn compress(raster: &Raster, percentage: f64) -> Result<Raster, CompressError> {
    if !(0.0..=100.0).contains(&percentage) {
        return Err(CompressError::PercentOutOfRange(percentage));
    }
    let fraction = percentage / 100.0;
    let (height, width) = raster.dimensions();

    let [red, green, blue] =
        Channel::ALL.map(|channel| compress_channel(raster, channel, fraction, height, width));

    let pixels = red
        .into_iter()
        .zip(green)
        .zip(blue)
        .map(|((r, g), b)| Pixel::new(r, g, b))
        .collect();
    Ok(raster.derive(pixels))
}

fn compress_channel(
    raster: &Raster,
    channel: Channel,
    fraction: f64,
    height: usize,
    width: usize,
) -> Vec<i32> {
    let mut m = SquareMatrix::padded_from(raster, channel);
    haar::forward_2d(&mut m);

    let magnitudes = threshold::distinct_magnitudes(&m);
    let cutoff = threshold::find_threshold(&magnitudes, fraction);
    threshold::suppress_below(&mut m, cutoff);

    haar::inverse_2d(&mut m);
    m.unpad(height, width)
}
