//! Unified error type for the pixelworks-core public API.
//!
//! [`CoreError`] wraps every error type of the crate into a single enum
//! for convenient `?` propagation in application code.

use std::fmt;

use crate::compress::CompressError;
use crate::filter::KernelError;
use crate::raster::RasterError;
use crate::tone::ToneError;
use crate::transform::PreviewError;

/// Unified error type for the pixelworks-core public API.
///
/// # Example
///
/// ```
/// use pixelworks_core::{compress, CoreError, LevelsCurve, Pixel, Raster};
///
/// fn adjust(raster: &Raster) -> Result<Raster, CoreError> {
///     let curve = LevelsCurve::new(10, 120, 240)?;
///     Ok(compress(&curve.apply_to(raster), 50.0)?)
/// }
///
/// let raster = Raster::filled(2, 2, Pixel::grey(90)).unwrap();
/// assert!(adjust(&raster).is_ok());
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum CoreError {
    /// Raster shape or indexing error
    Raster(RasterError),
    /// Kernel validation error
    Kernel(KernelError),
    /// Split-preview percentage error
    Preview(PreviewError),
    /// Compression percentage error
    Compress(CompressError),
    /// Levels validation error
    Tone(ToneError),
}

impl fmt::Display for CoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CoreError::Raster(err) => write!(f, "{}", err),
            CoreError::Kernel(err) => write!(f, "{}", err),
            CoreError::Preview(err) => write!(f, "{}", err),
            CoreError::Compress(err) => write!(f, "{}", err),
            CoreError::Tone(err) => write!(f, "{}", err),
        }
    }
}

impl std::error::Error for CoreError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CoreError::Raster(err) => Some(err),
            CoreError::Kernel(err) => Some(err),
            CoreError::Preview(err) => Some(err),
            CoreError::Compress(err) => Some(err),
            CoreError::Tone(err) => Some(err),
        }
    }
}

impl From<RasterError> for CoreError {
    fn from(err: RasterError) -> Self {
        CoreError::Raster(err)
    }
}

impl From<KernelError> for CoreError {
    fn from(err: KernelError) -> Self {
        CoreError::Kernel(err)
    }
}

impl From<PreviewError> for CoreError {
    fn from(err: PreviewError) -> Self {
        CoreError::Preview(err)
    }
}

impl From<CompressError> for CoreError {
    fn from(err: CompressError) -> Self {
        CoreError::Compress(err)
    }
}

impl From<ToneError> for CoreError {
    fn from(err: ToneError) -> Self {
        CoreError::Tone(err)
    }
}
