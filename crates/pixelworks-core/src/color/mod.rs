//! Pixel value type and channel selector.
//!
//! # Example
//!
//! ```
//! use pixelworks_core::{Channel, Pixel};
//!
//! let p = Pixel::new(12, 300, -4);
//! assert_eq!(p.channel(Channel::Green), 255);
//! assert_eq!(p.channel(Channel::Blue), 0);
//! ```

mod pixel;

pub use pixel::{Channel, Pixel, CHANNEL_MAX};
