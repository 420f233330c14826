//! Raster grid and its shape errors.
//!
//! [`Raster`] is the unit every engine consumes and produces. It is
//! immutable: flips and transforms build a new buffer and return a new
//! raster.

mod error;
mod raster;

pub use error::RasterError;
pub use raster::{Raster, MAX_VALUE};
