//! Black / mid / white levels adjustment.
//!
//! The curve is the quadratic `y = a x^2 + b x + c` passing through
//! `(black, 0)`, `(mid, 128)` and `(white, 255)`. The coefficients come
//! from the closed-form Cramer solution:
//!
//! ```text
//! A  = b^2 (m - w) - b (m^2 - w^2) + w m^2 - m w^2
//! Aa = -b (128 - 255) + 128 w - 255 m
//! Ab = b^2 (128 - 255) + 255 m^2 - 128 w^2
//! Ac = b^2 (255 m - 128 w) - b (255 m^2 - 128 w^2)
//! a = Aa / A,  b = Ab / A,  c = Ac / A
//! ```
//!
//! Outputs are truncated toward zero and then clamped. When two of the
//! points coincide `A` is zero and the coefficients are not finite; the
//! saturating float cast turns NaN into 0 and infinities into the channel
//! bounds.

use std::fmt;

use crate::color::{Pixel, CHANNEL_MAX};
use crate::raster::Raster;

/// Error type for levels parameters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ToneError {
    /// A level lies outside `0..=255`
    LevelOutOfRange {
        /// `"black"`, `"mid"` or `"white"`
        name: &'static str,
        value: i32,
    },
    /// The levels are not in ascending order
    NotAscending { black: i32, mid: i32, white: i32 },
}

impl fmt::Display for ToneError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ToneError::LevelOutOfRange { name, value } => write!(
                f,
                "invalid {} level {}: levels must be between 0 and 255",
                name, value
            ),
            ToneError::NotAscending { black, mid, white } => write!(
                f,
                "invalid levels {} {} {}: expected black <= mid <= white",
                black, mid, white
            ),
        }
    }
}

impl std::error::Error for ToneError {}

/// A validated levels curve.
///
/// # Example
///
/// ```
/// use pixelworks_core::LevelsCurve;
///
/// let identity = LevelsCurve::new(0, 128, 255).unwrap();
/// assert_eq!(identity.map(77), 77);
///
/// let curve = LevelsCurve::new(20, 100, 255).unwrap();
/// assert_eq!(curve.map(20), 0);
/// assert_eq!(curve.lut()[5], 0);
///
/// assert!(LevelsCurve::new(100, 50, 200).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LevelsCurve {
    black: i32,
    mid: i32,
    white: i32,
    a: f64,
    b: f64,
    c: f64,
}

impl LevelsCurve {
    /// Validate the three levels and solve for the curve.
    pub fn new(black: i32, mid: i32, white: i32) -> Result<Self, ToneError> {
        for (name, value) in [("black", black), ("mid", mid), ("white", white)] {
            if !(0..=CHANNEL_MAX).contains(&value) {
                return Err(ToneError::LevelOutOfRange { name, value });
            }
        }
        if black > mid || mid > white {
            return Err(ToneError::NotAscending { black, mid, white });
        }

        let (b, m, w) = (black as f64, mid as f64, white as f64);
        let det = b * b * (m - w) - b * (m * m - w * w) + w * m * m - m * w * w;
        let det_a = -b * (128.0 - 255.0) + 128.0 * w - 255.0 * m;
        let det_b = b * b * (128.0 - 255.0) + 255.0 * m * m - 128.0 * w * w;
        let det_c = b * b * (255.0 * m - 128.0 * w) - b * (255.0 * m * m - 128.0 * w * w);

        Ok(Self {
            black,
            mid,
            white,
            a: det_a / det,
            b: det_b / det,
            c: det_c / det,
        })
    }

    /// `(black, mid, white)`.
    pub fn levels(&self) -> (i32, i32, i32) {
        (self.black, self.mid, self.white)
    }

    /// `(a, b, c)` of `a x^2 + b x + c`.
    pub fn coefficients(&self) -> (f64, f64, f64) {
        (self.a, self.b, self.c)
    }

    /// Curve value for one channel value, truncated toward zero.
    ///
    /// The result is not clamped; [`Pixel::new`] does that.
    pub fn map(&self, value: i32) -> i32 {
        let x = value as f64;
        (self.a * x * x + self.b * x + self.c) as i32
    }

    /// Clamped curve output for every channel value.
    pub fn lut(&self) -> [u8; 256] {
        let mut table = [0u8; 256];
        for (value, out) in table.iter_mut().enumerate() {
            *out = self.map(value as i32).clamp(0, CHANNEL_MAX) as u8;
        }
        table
    }

    /// Apply the curve to every channel of `raster`.
    pub fn apply_to(&self, raster: &Raster) -> Raster {
        let table = self.lut();
        raster.apply_transform(|p| {
            let [r, g, b] = p.to_bytes();
            Pixel::from_bytes([table[r as usize], table[g as usize], table[b as usize]])
        })
    }
}
