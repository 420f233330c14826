//! 2D correlation of a raster with a [`Kernel`].

use crate::color::Pixel;
use crate::raster::Raster;

use super::kernel::Kernel;

/// Filter `raster` with `kernel`.
///
/// Each output channel is `sum(kernel[x][y] * source[i + x - r][j + y - r])`
/// with `r = kernel.radius()`. Neighbours outside the raster contribute
/// nothing, so edge pixels see a partial neighbourhood rather than a padded
/// one. Results are rounded to the nearest integer and clamped.
///
/// # Example
///
/// ```
/// use pixelworks_core::{convolve, Kernel, Pixel, Raster};
///
/// let flat = Raster::filled(3, 3, Pixel::grey(160)).unwrap();
/// let blurred = convolve(&flat, &Kernel::blur());
///
/// // interior pixel sees the whole kernel
/// assert_eq!(blurred.pixel(1, 1), Pixel::grey(160));
/// // corner sees 4 of 9 cells: 0.25 + 2 * 0.125 + 0.0625 = 0.5625
/// assert_eq!(blurred.pixel(0, 0), Pixel::grey(90));
/// ```
pub fn convolve(raster: &Raster, kernel: &Kernel) -> Raster {
    let height = raster.height() as isize;
    let width = raster.width() as isize;
    let radius = kernel.radius() as isize;
    let size = kernel.size();
    let source = raster.pixels();

    let mut pixels = Vec::with_capacity(source.len());
    for i in 0..height {
        for j in 0..width {
            let mut acc = [0.0f64; 3];
            for x in 0..size {
                let k = i + x as isize - radius;
                if k < 0 || k >= height {
                    continue;
                }
                for y in 0..size {
                    let l = j + y as isize - radius;
                    if l < 0 || l >= width {
                        continue;
                    }
                    let weight = kernel.weight(x, y);
                    let p = source[(k * width + l) as usize];
                    acc[0] += p.r() as f64 * weight;
                    acc[1] += p.g() as f64 * weight;
                    acc[2] += p.b() as f64 * weight;
                }
            }
            pixels.push(Pixel::new(
                round_channel(acc[0]),
                round_channel(acc[1]),
                round_channel(acc[2]),
            ));
        }
    }
    raster.derive(pixels)
}

#[inline]
fn round_channel(value: f64) -> i32 {
    value.round() as i32
}
