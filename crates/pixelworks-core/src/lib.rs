#![allow(clippy::module_inception, clippy::needless_range_loop)]

//! pixelworks-core: the pixel engine behind pixelworks
//!
//! Every operation takes an immutable [`Raster`] and returns a new one.
//! Nothing here knows about image names, files or commands; that layer
//! lives in the `pixelworks` crate.
//!
//! # Quick Start
//!
//! ```
//! use pixelworks_core::{convolve, Kernel, Pixel, PixelTransform, Raster, SplitPreview};
//!
//! let raster = Raster::from_fn(4, 8, |i, j| Pixel::new((j * 30) as i32, (i * 60) as i32, 90)).unwrap();
//!
//! let sepia = PixelTransform::Sepia.apply_to(&raster);
//! let blurred = convolve(&raster, &Kernel::blur());
//!
//! // sepia on the left half, untouched on the right
//! let preview = SplitPreview::new(50.0).unwrap().composite(&raster, &sepia).unwrap();
//! assert_eq!(preview.pixel(0, 7), raster.pixel(0, 7));
//! assert_eq!(blurred.dimensions(), (4, 8));
//! ```
//!
//! # Engines
//!
//! | Engine | Entry point | Notes |
//! |--------|-------------|-------|
//! | Pointwise | [`PixelTransform`] | channel isolation, luma / intensity / value, sepia, brighten |
//! | Convolution | [`convolve`] with [`Kernel`] | edges see a partial neighbourhood |
//! | Compression | [`compress`] | per-channel Haar wavelet with magnitude thresholding |
//! | Tone | [`Histogram`], [`color_correct`], [`LevelsCurve`] | peaks are searched in `10..=245` |
//! | Channels | [`rgb_split`], [`rgb_combine`] | combine inverts split |
//! | Output | [`Raster::to_rgb_bytes`], [`HistogramChart`] | hand-off to preview and chart consumers |
//!
//! # Pixel Invariant
//!
//! A [`Pixel`] stores `u8` channels. Every constructor takes `i32` and
//! clamps, so intermediate arithmetic may overshoot and the result is
//! still valid. Float results are converted with an explicit policy per
//! engine:
//!
//! ```text
//! luma, sepia, convolution   round to nearest
//! levels, compression        truncate toward zero
//! then                       clamp to 0..=255
//! ```
//!
//! # Split Preview
//!
//! Any raster-to-raster result can be shown against its source with
//! [`SplitPreview`]. Columns `j < floor(W * p / 100)` come from the
//! transformed image, the rest from the original.
//!
//! # Errors
//!
//! Each module has its own error enum. [`CoreError`] wraps all of them for
//! `?` propagation.

pub mod api;
pub mod channels;
pub mod color;
pub mod compress;
pub mod filter;
pub mod output;
pub mod raster;
pub mod tone;
pub mod transform;


pub use api::CoreError;
pub use channels::{rgb_combine, rgb_split};
pub use color::{Channel, Pixel, CHANNEL_MAX};
pub use compress::{compress, CompressError};
pub use filter::{convolve, Kernel, KernelError};
pub use output::HistogramChart;
pub use raster::{Raster, RasterError, MAX_VALUE};
pub use tone::{color_correct, Histogram, LevelsCurve, ToneError, PEAK_RANGE};
pub use transform::{PixelTransform, PreviewError, SplitPreview};
