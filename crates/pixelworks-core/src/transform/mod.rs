//! Pointwise transform engine.
//!
//! [`PixelTransform`] covers channel isolation, the three greyscale
//! reductions, sepia, brightness and per-channel shifts. [`SplitPreview`]
//! composites any result back onto its source for side-by-side display.

mod pointwise;
mod preview;

pub use pointwise::{PixelTransform, LUMA_WEIGHTS, SEPIA_MATRIX};
pub use preview::{PreviewError, SplitPreview};
