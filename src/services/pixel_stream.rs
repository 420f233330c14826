use std::fmt;

use pixelworks_core::{Pixel, Raster};

use crate::error::ProcessError;

/// Decoded image at the load/save boundary.
///
/// External codecs hand images in and out in this shape: a header of
/// width, height and maximum channel value, then row-major `R G B`
/// samples. Values are kept as read so that invalid input can be reported
/// instead of silently wrapping.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelStream {
    pub width: i64,
    pub height: i64,
    pub max_value: i64,
    pub samples: Vec<i64>,
}

impl PixelStream {
    /// Read whitespace-separated integers: `width height max` followed by
    /// the samples.
    pub fn parse(input: &str) -> Result<Self, ProcessError> {
        let mut values = input.split_whitespace().map(|token| {
            token
                .parse::<i64>()
                .map_err(|_| ProcessError::InvalidStream(format!("not an integer: {}", token)))
        });

        let mut header = [0i64; 3];
        for (slot, name) in header.iter_mut().zip(["width", "height", "max value"]) {
            *slot = values
                .next()
                .ok_or_else(|| ProcessError::InvalidStream(format!("missing {}", name)))??;
        }
        let samples = values.collect::<Result<Vec<_>, _>>()?;

        Ok(Self {
            width: header[0],
            height: header[1],
            max_value: header[2],
            samples,
        })
    }

    /// Validate the stream and build a raster.
    ///
    /// Negative values anywhere, zero dimensions and payloads shorter than
    /// `width * height * 3` are rejected. Trailing samples are ignored.
    /// Samples above 255 clamp like any other channel value.
    pub fn to_raster(&self) -> Result<Raster, ProcessError> {
        if self.width < 0 || self.height < 0 || self.max_value < 0 {
            return Err(ProcessError::InvalidStream(format!(
                "negative header value in {} {} {}",
                self.width, self.height, self.max_value
            )));
        }
        if self.width == 0 || self.height == 0 {
            return Err(ProcessError::InvalidStream(format!(
                "empty image {}x{}",
                self.width, self.height
            )));
        }

        let (width, height) = (self.width as usize, self.height as usize);
        let expected = width
            .checked_mul(height)
            .and_then(|n| n.checked_mul(3))
            .ok_or_else(|| {
                ProcessError::InvalidStream(format!("image too large: {}x{}", width, height))
            })?;
        if self.samples.len() < expected {
            return Err(ProcessError::InvalidStream(format!(
                "expected {} samples, found {}",
                expected,
                self.samples.len()
            )));
        }
        if let Some(position) = self.samples[..expected].iter().position(|&s| s < 0) {
            return Err(ProcessError::InvalidStream(format!(
                "negative sample {} at position {}",
                self.samples[position], position
            )));
        }

        let pixels = self.samples[..expected]
            .chunks_exact(3)
            .map(|rgb| Pixel::new(channel(rgb[0]), channel(rgb[1]), channel(rgb[2])))
            .collect();
        Ok(Raster::new(height, width, pixels)?)
    }

    /// Stream for a raster. The max value is always 255.
    pub fn from_raster(raster: &Raster) -> Self {
        Self {
            width: raster.width() as i64,
            height: raster.height() as i64,
            max_value: i64::from(raster.max_value()),
            samples: raster
                .pixels()
                .iter()
                .flat_map(|p| [p.r(), p.g(), p.b()])
                .map(i64::from)
                .collect(),
        }
    }
}

#[inline]
fn channel(sample: i64) -> i32 {
    sample.min(i64::from(i32::MAX)) as i32
}

impl fmt::Display for PixelStream {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{} {}", self.width, self.height)?;
        writeln!(f, "{}", self.max_value)?;
        for sample in &self.samples {
            writeln!(f, "{}", sample)?;
        }
        Ok(())
    }
}
