//! Assertion helpers for tests.

use pixelworks::engine::{Channel, Raster};
use pretty_assertions::assert_eq;

/// Assert two rasters have the same dimensions
pub fn assert_same_dimensions(actual: &Raster, expected: &Raster) {
    assert_eq!(
        actual.dimensions(),
        expected.dimensions(),
        "Expected dimensions {:?}, got {:?}",
        expected.dimensions(),
        actual.dimensions()
    );
}

/// Assert every channel of every pixel differs by at most `tolerance`
pub fn assert_close(actual: &Raster, expected: &Raster, tolerance: i32) {
    assert_same_dimensions(actual, expected);
    for (index, (a, e)) in actual.pixels().iter().zip(expected.pixels()).enumerate() {
        for channel in Channel::ALL {
            let diff = (a.channel(channel) - e.channel(channel)).abs();
            assert!(
                diff <= tolerance,
                "Pixel {} channel {:?}: got {}, expected {} (tolerance {})",
                index,
                channel,
                a.channel(channel),
                e.channel(channel),
                tolerance
            );
        }
    }
}

/// Assert the raster holds a single color
pub fn assert_uniform(raster: &Raster) {
    let first = raster.pixel(0, 0);
    assert!(
        raster.pixels().iter().all(|&p| p == first),
        "Expected uniform raster of {:?}",
        first
    );
}
