//! Output adapters.
//!
//! Rasters leave the engine in two shapes:
//!
//! - **Flat RGB** ([`Raster::to_rgb_bytes`](crate::Raster::to_rgb_bytes)):
//!   `[R, G, B, ...]` bytes for preview surfaces
//! - **Histogram chart** ([`HistogramChart`]): a rendered line chart of the
//!   channel frequencies, itself a [`Raster`](crate::Raster) that can be
//!   stored and saved like any other image

mod histogram_chart;

pub use histogram_chart::{HistogramChart, GRID_COLOR, LINE_COLORS};
