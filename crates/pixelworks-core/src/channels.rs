//! RGB split and combine.
//!
//! Splitting produces three single-channel rasters in the `Component` style
//! (the other two channels zeroed). Combining reads only the matching
//! channel of each input, so it inverts a split exactly.

use crate::color::{Channel, Pixel};
use crate::raster::{Raster, RasterError};
use crate::transform::PixelTransform;

/// Split `raster` into its red, green and blue components.
pub fn rgb_split(raster: &Raster) -> [Raster; 3] {
    Channel::ALL.map(|channel| PixelTransform::Component(channel).apply_to(raster))
}

/// Build one raster from the red channel of `red`, the green channel of
/// `green` and the blue channel of `blue`.
///
/// All three inputs must have the same dimensions.
///
/// # Example
///
/// ```
/// use pixelworks_core::{rgb_combine, rgb_split, Pixel, Raster};
///
/// let raster = Raster::filled(2, 2, Pixel::new(10, 20, 30)).unwrap();
/// let [r, g, b] = rgb_split(&raster);
/// assert_eq!(g.pixel(0, 0), Pixel::new(0, 20, 0));
/// assert_eq!(rgb_combine(&r, &g, &b).unwrap(), raster);
/// ```
pub fn rgb_combine(red: &Raster, green: &Raster, blue: &Raster) -> Result<Raster, RasterError> {
    for other in [green, blue] {
        if other.dimensions() != red.dimensions() {
            return Err(RasterError::DimensionMismatch {
                expected: red.dimensions(),
                actual: other.dimensions(),
            });
        }
    }

    let pixels = red
        .pixels()
        .iter()
        .zip(green.pixels())
        .zip(blue.pixels())
        .map(|((r, g), b)| Pixel::new(r.r(), g.g(), b.b()))
        .collect();
    Ok(red.derive(pixels))
}
