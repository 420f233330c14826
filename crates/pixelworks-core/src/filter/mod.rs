//! Convolution filter engine.
//!
//! [`convolve`] correlates a raster with a square odd-sized [`Kernel`].
//! [`Kernel::blur`] and [`Kernel::sharpen`] are the two built-in tables.

mod convolve;
mod kernel;

pub use convolve::convolve;
pub use kernel::{Kernel, KernelError, BLUR_WEIGHTS, SHARPEN_WEIGHTS};
