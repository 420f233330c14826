//! Line chart rendering of a [`Histogram`].

use crate::color::{Channel, Pixel};
use crate::raster::{Raster, RasterError};
use crate::tone::{Histogram, BINS};

/// Grid line color.
pub const GRID_COLOR: Pixel = Pixel::from_bytes([128, 128, 128]);

/// Line colors in drawing order.
pub const LINE_COLORS: [(Channel, Pixel); 3] = [
    (Channel::Red, Pixel::from_bytes([255, 0, 0])),
    (Channel::Green, Pixel::from_bytes([0, 255, 0])),
    (Channel::Blue, Pixel::from_bytes([0, 0, 255])),
];

/// Square chart of the three channel histograms.
///
/// The chart has a white background and grey grid lines every
/// `grid_spacing` pixels in both directions. The red, green and blue
/// frequency curves are drawn on top, in that order, as vertical segments
/// joining consecutive bins. All three curves share one vertical scale: the
/// highest frequency over every channel reaches the top row.
///
/// # Example
///
/// ```
/// use pixelworks_core::{Histogram, HistogramChart, Pixel, Raster};
///
/// let raster = Raster::filled(4, 4, Pixel::new(0, 0, 255)).unwrap();
/// let chart = HistogramChart::default().render(&Histogram::of(&raster)).unwrap();
///
/// assert_eq!(chart.dimensions(), (256, 256));
/// assert_eq!(chart.pixel(0, 255), Pixel::new(0, 0, 255));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HistogramChart {
    /// Side length in pixels
    pub size: usize,
    /// Distance between grid lines; 0 disables the grid
    pub grid_spacing: usize,
}

impl Default for HistogramChart {
    fn default() -> Self {
        Self {
            size: 256,
            grid_spacing: 10,
        }
    }
}

impl HistogramChart {
    pub fn new(size: usize, grid_spacing: usize) -> Self {
        Self { size, grid_spacing }
    }

    /// Draw `histogram` into a new `size x size` raster.
    ///
    /// Fails only when `size` is zero.
    pub fn render(&self, histogram: &Histogram) -> Result<Raster, RasterError> {
        let size = self.size;
        if size == 0 {
            return Err(RasterError::Empty);
        }
        let mut canvas = vec![Pixel::WHITE; size * size];

        if self.grid_spacing > 0 {
            for line in (0..size).step_by(self.grid_spacing) {
                for k in 0..size {
                    canvas[k * size + line] = GRID_COLOR;
                    canvas[line * size + k] = GRID_COLOR;
                }
            }
        }

        let max = histogram.max_frequency().max(1);
        for (channel, color) in LINE_COLORS {
            let bins = histogram.channel(channel);
            let mut last_y = size;
            for (value, &frequency) in bins.iter().enumerate() {
                let x = value * size / BINS;
                let y = size - (frequency as u128 * size as u128 / max as u128) as usize;
                let (top, bottom) = (last_y.min(y), last_y.max(y));
                for row in top..=bottom.min(size - 1) {
                    canvas[row * size + x] = color;
                }
                last_y = y;
            }
        }

        Raster::new(size, size, canvas)
    }
}
