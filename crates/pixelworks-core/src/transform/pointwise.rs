//! Per-pixel color transforms.
//!
//! Each [`PixelTransform`] maps one input pixel to one output pixel with no
//! knowledge of its position or neighbours. [`Raster::apply_transform`]
//! lifts the mapping to a whole image.

use crate::color::{Channel, Pixel};
use crate::raster::Raster;

/// Rec. 709 luma weights for `[R, G, B]`.
pub const LUMA_WEIGHTS: [f64; 3] = [0.2126, 0.7152, 0.0722];

/// Sepia tone matrix. Row `k` produces output channel `k` from `[R, G, B]`.
pub const SEPIA_MATRIX: [[f64; 3]; 3] = [
    [0.393, 0.769, 0.189],
    [0.349, 0.686, 0.168],
    [0.272, 0.534, 0.131],
];

/// A built-in per-pixel mapping.
///
/// # Example
///
/// ```
/// use pixelworks_core::{Channel, Pixel, PixelTransform};
///
/// let p = Pixel::new(10, 20, 30);
/// assert_eq!(PixelTransform::Component(Channel::Green).apply(p), Pixel::new(0, 20, 0));
/// assert_eq!(PixelTransform::Value.apply(p), Pixel::grey(30));
/// assert_eq!(PixelTransform::Brighten(250).apply(p), Pixel::new(255, 255, 255));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PixelTransform {
    /// Keep one channel, zero the other two.
    Component(Channel),
    /// `round(0.2126 R + 0.7152 G + 0.0722 B)` on all channels.
    Luma,
    /// `floor((R + G + B) / 3)` on all channels.
    Intensity,
    /// `max(R, G, B)` on all channels.
    Value,
    /// [`SEPIA_MATRIX`] applied per output channel, capped at 255.
    Sepia,
    /// Add the same increment to every channel. Negative darkens.
    Brighten(i32),
    /// Add a separate offset to each channel.
    Shift { red: i32, green: i32, blue: i32 },
}

impl PixelTransform {
    /// Map a single pixel.
    pub fn apply(self, p: Pixel) -> Pixel {
        match self {
            PixelTransform::Component(Channel::Red) => Pixel::new(p.r(), 0, 0),
            PixelTransform::Component(Channel::Green) => Pixel::new(0, p.g(), 0),
            PixelTransform::Component(Channel::Blue) => Pixel::new(0, 0, p.b()),
            PixelTransform::Luma => {
                let luma = weighted_sum(&LUMA_WEIGHTS, p).round() as i32;
                Pixel::grey(luma)
            }
            PixelTransform::Intensity => Pixel::grey((p.r() + p.g() + p.b()) / 3),
            PixelTransform::Value => Pixel::grey(p.r().max(p.g()).max(p.b())),
            PixelTransform::Sepia => Pixel::new(
                sepia_channel(&SEPIA_MATRIX[0], p),
                sepia_channel(&SEPIA_MATRIX[1], p),
                sepia_channel(&SEPIA_MATRIX[2], p),
            ),
            PixelTransform::Brighten(increment) => Pixel::new(
                p.r().saturating_add(increment),
                p.g().saturating_add(increment),
                p.b().saturating_add(increment),
            ),
            PixelTransform::Shift { red, green, blue } => Pixel::new(
                p.r().saturating_add(red),
                p.g().saturating_add(green),
                p.b().saturating_add(blue),
            ),
        }
    }

    /// Map every pixel of `raster`.
    pub fn apply_to(self, raster: &Raster) -> Raster {
        raster.apply_transform(|p| self.apply(p))
    }
}

#[inline]
fn weighted_sum(weights: &[f64; 3], p: Pixel) -> f64 {
    weights[0] * p.r() as f64 + weights[1] * p.g() as f64 + weights[2] * p.b() as f64
}

#[inline]
fn sepia_channel(row: &[f64; 3], p: Pixel) -> i32 {
    (weighted_sum(row, p).round() as i32).min(255)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_component_isolation() {
        let p = Pixel::new(10, 20, 30);
        assert_eq!(PixelTransform::Component(Channel::Red).apply(p), Pixel::new(10, 0, 0));
        assert_eq!(PixelTransform::Component(Channel::Blue).apply(p), Pixel::new(0, 0, 30));
    }

    #[test]
    fn test_luma_rounds_to_nearest() {
        // 0.2126*100 + 0.7152*150 + 0.0722*200 = 142.98
        let p = Pixel::new(100, 150, 200);
        assert_eq!(PixelTransform::Luma.apply(p), Pixel::grey(143));
    }

    #[test]
    fn test_intensity_floors() {
        assert_eq!(PixelTransform::Intensity.apply(Pixel::new(1, 1, 2)), Pixel::grey(1));
        assert_eq!(PixelTransform::Intensity.apply(Pixel::new(10, 20, 30)), Pixel::grey(20));
    }

    #[test]
    fn test_value_takes_max() {
        assert_eq!(PixelTransform::Value.apply(Pixel::new(7, 99, 42)), Pixel::grey(99));
    }

    #[test]
    fn test_sepia_matrix() {
        // r: 0.393*50 + 0.769*100 + 0.189*150 = 124.9  -> 125
        // g: 0.349*50 + 0.686*100 + 0.168*150 = 111.25 -> 111
        // b: 0.272*50 + 0.534*100 + 0.131*150 = 86.65  -> 87
        let p = Pixel::new(50, 100, 150);
        assert_eq!(PixelTransform::Sepia.apply(p), Pixel::new(125, 111, 87));
    }

    #[test]
    fn test_sepia_caps_at_255() {
        assert_eq!(PixelTransform::Sepia.apply(Pixel::WHITE), Pixel::new(255, 255, 239));
    }

    #[test]
    fn test_brighten_saturates_both_ways() {
        let p = Pixel::new(10, 128, 250);
        assert_eq!(PixelTransform::Brighten(10).apply(p), Pixel::new(20, 138, 255));
        assert_eq!(PixelTransform::Brighten(-20).apply(p), Pixel::new(0, 108, 230));
        assert_eq!(PixelTransform::Brighten(i32::MAX).apply(p), Pixel::WHITE);
        assert_eq!(PixelTransform::Brighten(i32::MIN).apply(p), Pixel::BLACK);
    }

    #[test]
    fn test_shift_per_channel() {
        let shift = PixelTransform::Shift {
            red: -5,
            green: 0,
            blue: 5,
        };
        assert_eq!(shift.apply(Pixel::new(10, 10, 10)), Pixel::new(5, 10, 15));
    }
}
