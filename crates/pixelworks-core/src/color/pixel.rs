//! Clamped RGB pixel value type.
//!
//! A [`Pixel`] always holds channels inside `0..=255`. Construction clamps
//! out-of-range input instead of failing, so arithmetic on channels can
//! overshoot freely and rely on the constructor for saturation.

/// Largest value a channel can hold.
pub const CHANNEL_MAX: i32 = 255;

/// One of the three color channels of a [`Pixel`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Channel {
    Red,
    Green,
    Blue,
}

impl Channel {
    /// All channels in storage order.
    pub const ALL: [Channel; 3] = [Channel::Red, Channel::Green, Channel::Blue];

    /// Position of the channel in `[R, G, B]` order.
    #[inline]
    pub fn index(self) -> usize {
        match self {
            Channel::Red => 0,
            Channel::Green => 1,
            Channel::Blue => 2,
        }
    }
}

/// An immutable 8-bit RGB color.
///
/// Channels are stored as `u8`, which makes the `0..=255` invariant
/// structural: there is no way to observe an out-of-range channel.
/// Equality and hashing compare the three channels.
///
/// # Example
///
/// ```
/// use pixelworks_core::Pixel;
///
/// let p = Pixel::new(-5, 300, 10);
/// assert_eq!(p, Pixel::new(0, 255, 10));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Pixel {
    r: u8,
    g: u8,
    b: u8,
}

impl Pixel {
    /// Pure black.
    pub const BLACK: Pixel = Pixel { r: 0, g: 0, b: 0 };

    /// Pure white.
    pub const WHITE: Pixel = Pixel {
        r: 255,
        g: 255,
        b: 255,
    };

    /// Create a pixel, clamping each channel into `0..=255`.
    #[inline]
    pub fn new(r: i32, g: i32, b: i32) -> Self {
        Self {
            r: clamp_channel(r),
            g: clamp_channel(g),
            b: clamp_channel(b),
        }
    }

    /// Create a grey pixel with all three channels set to `value`.
    #[inline]
    pub fn grey(value: i32) -> Self {
        Self::new(value, value, value)
    }

    /// Create a pixel from raw bytes.
    #[inline]
    pub const fn from_bytes(bytes: [u8; 3]) -> Self {
        Self {
            r: bytes[0],
            g: bytes[1],
            b: bytes[2],
        }
    }

    #[inline]
    pub fn r(self) -> i32 {
        self.r as i32
    }

    #[inline]
    pub fn g(self) -> i32 {
        self.g as i32
    }

    #[inline]
    pub fn b(self) -> i32 {
        self.b as i32
    }

    /// Value of a single channel.
    #[inline]
    pub fn channel(self, channel: Channel) -> i32 {
        match channel {
            Channel::Red => self.r(),
            Channel::Green => self.g(),
            Channel::Blue => self.b(),
        }
    }

    /// Copy of this pixel with the red channel replaced (clamped).
    #[inline]
    pub fn with_red(self, value: i32) -> Self {
        Self {
            r: clamp_channel(value),
            ..self
        }
    }

    /// Copy of this pixel with the green channel replaced (clamped).
    #[inline]
    pub fn with_green(self, value: i32) -> Self {
        Self {
            g: clamp_channel(value),
            ..self
        }
    }

    /// Copy of this pixel with the blue channel replaced (clamped).
    #[inline]
    pub fn with_blue(self, value: i32) -> Self {
        Self {
            b: clamp_channel(value),
            ..self
        }
    }

    /// Channels as `[R, G, B]` bytes.
    #[inline]
    pub fn to_bytes(self) -> [u8; 3] {
        [self.r, self.g, self.b]
    }
}

#[inline]
fn clamp_channel(value: i32) -> u8 {
    value.clamp(0, CHANNEL_MAX) as u8
}
