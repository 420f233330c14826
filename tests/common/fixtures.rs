//! Test fixtures and constants.

use pixelworks::engine::{Pixel, Raster};
use pixelworks::services::PixelStream;

/// Image names used across scenarios
pub mod names {
    /// The 2x2 reference image
    pub const SQUARE: &str = "square";

    /// A wider gradient with odd dimensions
    pub const GRADIENT: &str = "gradient";
}

/// 2x2 reference image in stream form.
pub const SQUARE_STREAM: &str = "2 2\n255\n10 20 30\n40 50 60\n70 80 90\n100 110 120\n";

/// Engine configuration with one extra kernel and a small chart.
pub const CONFIG_YAML: &str = r#"
histogram:
  size: 64
  grid_spacing: 8
kernels:
  edge:
    - [0, -1, 0]
    - [-1, 4, -1]
    - [0, -1, 0]
  identity:
    - [0, 0, 0]
    - [0, 1, 0]
    - [0, 0, 0]
"#;

pub fn square_stream() -> PixelStream {
    PixelStream::parse(SQUARE_STREAM).unwrap()
}

pub fn square() -> Raster {
    square_stream().to_raster().unwrap()
}

/// `height x width` gradient covering most of the channel range
pub fn gradient(height: usize, width: usize) -> Raster {
    Raster::from_fn(height, width, |i, j| {
        Pixel::new(
            (j * 255 / width.max(1)) as i32,
            (i * 255 / height.max(1)) as i32,
            ((i * 31 + j * 17) % 256) as i32,
        )
    })
    .unwrap()
}

/// Build a raster from rows of `(r, g, b)` tuples
pub fn raster(rows: &[&[(i32, i32, i32)]]) -> Raster {
    Raster::from_rows(
        rows.iter()
            .map(|row| row.iter().map(|&(r, g, b)| Pixel::new(r, g, b)).collect())
            .collect(),
    )
    .unwrap()
}
