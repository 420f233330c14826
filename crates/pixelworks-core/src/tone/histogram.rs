//! Per-channel value frequencies.

use std::ops::RangeInclusive;

use crate::color::Channel;
use crate::raster::Raster;

/// Channel values considered when looking for a histogram peak.
///
/// Values near pure black and pure white are ignored so that clipped
/// shadows or highlights do not dominate color correction.
pub const PEAK_RANGE: RangeInclusive<usize> = 10..=245;

/// Number of bins per channel.
pub const BINS: usize = 256;

/// Frequency of every channel value `0..=255`, separately for red, green
/// and blue.
///
/// # Example
///
/// ```
/// use pixelworks_core::{Channel, Histogram, Pixel, Raster};
///
/// let raster = Raster::from_rows(vec![
///     vec![Pixel::new(40, 0, 0), Pixel::new(40, 0, 200)],
/// ])
/// .unwrap();
/// let histogram = Histogram::of(&raster);
///
/// assert_eq!(histogram.red()[40], 2);
/// assert_eq!(histogram.max_frequency(), 2);
/// assert_eq!(histogram.peak(Channel::Red), 40);
/// // blue 0 sits outside the peak window, so 200 wins
/// assert_eq!(histogram.peak(Channel::Blue), 200);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Histogram {
    bins: [[u64; BINS]; 3],
}

impl Histogram {
    /// Count every pixel of `raster`.
    pub fn of(raster: &Raster) -> Self {
        let mut bins = [[0u64; BINS]; 3];
        for p in raster.pixels() {
            bins[0][p.r() as usize] += 1;
            bins[1][p.g() as usize] += 1;
            bins[2][p.b() as usize] += 1;
        }
        Self { bins }
    }

    #[inline]
    pub fn red(&self) -> &[u64; BINS] {
        &self.bins[0]
    }

    #[inline]
    pub fn green(&self) -> &[u64; BINS] {
        &self.bins[1]
    }

    #[inline]
    pub fn blue(&self) -> &[u64; BINS] {
        &self.bins[2]
    }

    /// Bins of one channel.
    #[inline]
    pub fn channel(&self, channel: Channel) -> &[u64; BINS] {
        &self.bins[channel.index()]
    }

    /// Highest frequency over all three channels.
    pub fn max_frequency(&self) -> u64 {
        self.bins
            .iter()
            .flat_map(|bins| bins.iter().copied())
            .max()
            .unwrap_or(0)
    }

    /// Most frequent value of `channel` inside [`PEAK_RANGE`].
    ///
    /// Ties go to the lowest value. Returns 0 when every bin in the window
    /// is empty.
    pub fn peak(&self, channel: Channel) -> usize {
        let bins = self.channel(channel);
        let mut peak = 0;
        let mut peak_count = 0;
        for value in PEAK_RANGE {
            if bins[value] > peak_count {
                peak_count = bins[value];
                peak = value;
            }
        }
        peak
    }

    /// Peaks of red, green and blue.
    pub fn peaks(&self) -> [usize; 3] {
        Channel::ALL.map(|channel| self.peak(channel))
    }
}
