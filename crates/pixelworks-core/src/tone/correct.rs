//! Histogram-peak color correction.

use crate::raster::Raster;
use crate::transform::PixelTransform;

use super::histogram::Histogram;

/// Offsets that move every channel peak onto the average peak.
///
/// `avg = (peak_r + peak_g + peak_b) / 3` in integer arithmetic, and each
/// channel is shifted by `avg - peak`.
pub fn correction_shift(histogram: &Histogram) -> PixelTransform {
    let [red, green, blue] = histogram.peaks().map(|peak| peak as i32);
    let avg = (red + green + blue) / 3;
    PixelTransform::Shift {
        red: avg - red,
        green: avg - green,
        blue: avg - blue,
    }
}

/// Align the red, green and blue histogram peaks of `raster`.
///
/// # Example
///
/// ```
/// use pixelworks_core::{color_correct, Pixel, Raster};
///
/// let raster = Raster::filled(2, 2, Pixel::new(100, 130, 160)).unwrap();
/// assert_eq!(color_correct(&raster).pixel(0, 0), Pixel::grey(130));
/// ```
pub fn color_correct(raster: &Raster) -> Raster {
    correction_shift(&Histogram::of(raster)).apply_to(raster)
}
