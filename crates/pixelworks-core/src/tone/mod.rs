//! Histogram and tone engine.
//!
//! - [`Histogram`] counts channel values and locates peaks.
//! - [`color_correct`] shifts each channel so the three peaks line up.
//! - [`LevelsCurve`] remaps values through a black / mid / white quadratic.

mod correct;
mod histogram;
mod levels;

pub use correct::{color_correct, correction_shift};
pub use histogram::{Histogram, BINS, PEAK_RANGE};
pub use levels::{LevelsCurve, ToneError};
