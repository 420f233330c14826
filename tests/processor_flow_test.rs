//! End-to-end session tests covering complete editing scenarios.

mod common;

use common::{fixtures, fixtures::names, TestSession};
use pixelworks::engine::{Histogram, Pixel, PixelTransform};
use pixelworks::services::{HistogramReport, PixelStream};
use pretty_assertions::assert_eq;

#[test]
fn test_brighten_reference_image() {
    let mut session = TestSession::new();
    session.run("brighten", &["50", names::SQUARE, "bright"]);

    let expected = fixtures::raster(&[
        &[(60, 70, 80), (90, 100, 110)],
        &[(120, 130, 140), (150, 160, 170)],
    ]);
    assert_eq!(*session.image("bright"), expected);
    // the source is untouched
    assert_eq!(*session.image(names::SQUARE), fixtures::square());
}

#[test]
fn test_split_then_combine_reproduces_reference() {
    let mut session = TestSession::new();
    session.run("rgb-split", &[names::SQUARE, "r", "g", "b"]);
    assert_eq!(session.image("g").pixel(1, 1), Pixel::new(0, 110, 0));

    session.run("rgb-combine", &["joined", "r", "g", "b"]);
    assert_eq!(*session.image("joined"), *session.image(names::SQUARE));
}

#[test]
fn test_flip_twice_is_identity() {
    let mut session = TestSession::new();
    session.run("horizontal-flip", &[names::GRADIENT, "h"]);
    session.run("horizontal-flip", &["h", "hh"]);
    session.run("vertical-flip", &[names::GRADIENT, "v"]);
    session.run("vertical-flip", &["v", "vv"]);

    let original = session.image(names::GRADIENT);
    assert_eq!(*session.image("hh"), *original);
    assert_eq!(*session.image("vv"), *original);
    assert_ne!(*session.image("h"), *original);
}

#[test]
fn test_chained_operations_overwrite_in_place() {
    let mut session = TestSession::new();
    session.run("sepia", &[names::GRADIENT, "work"]);
    session.run("blur", &["work", "work"]);
    session.run("sharpen", &["work", "work"]);

    let work = session.image("work");
    common::assert_same_dimensions(&work, &session.image(names::GRADIENT));
    assert_eq!(
        session.names(),
        vec![names::GRADIENT.to_string(), names::SQUARE.to_string(), "work".to_string()]
    );
}

#[test]
fn test_split_preview_extremes() {
    let mut session = TestSession::new();
    session.run("luma-component", &[names::GRADIENT, "none", "split", "0"]);
    session.run("luma-component", &[names::GRADIENT, "all", "split", "100"]);
    session.run("luma-component", &[names::GRADIENT, "full"]);

    assert_eq!(*session.image("none"), *session.image(names::GRADIENT));
    assert_eq!(*session.image("all"), *session.image("full"));
}

#[test]
fn test_levels_identity_and_split() {
    let mut session = TestSession::new();
    session.run("levels-adjust", &["0", "128", "255", names::GRADIENT, "same"]);
    assert_eq!(*session.image("same"), *session.image(names::GRADIENT));

    session.run(
        "levels-adjust",
        &["40", "100", "220", names::GRADIENT, "left", "split", "50"],
    );
    let left = session.image("left");
    let original = session.image(names::GRADIENT);
    // 7 columns at 50% -> columns 0..3 adjusted, 3.. original
    for i in 0..left.height() {
        for j in 3..left.width() {
            assert_eq!(left.pixel(i, j), original.pixel(i, j));
        }
    }
}

#[test]
fn test_compress_extremes() {
    let mut session = TestSession::new();
    session.run("compress", &["0", names::GRADIENT, "lossless"]);
    session.run("compress", &["100", names::SQUARE, "flat"]);

    common::assert_close(&session.image("lossless"), &session.image(names::GRADIENT), 1);
    common::assert_uniform(&session.image("flat"));
}

#[test]
fn test_color_correct_aligns_peaks() {
    let mut session = TestSession::new();
    session.processor.insert(
        "tinted",
        fixtures::raster(&[
            &[(100, 120, 140), (100, 120, 140), (0, 0, 0)],
            &[(100, 120, 140), (30, 90, 200), (255, 255, 255)],
        ]),
    );
    session.run("color-correct", &["tinted", "fixed"]);

    let peaks = session.processor.histogram("fixed").unwrap().peaks();
    assert_eq!(peaks, [120, 120, 120]);
    assert_eq!(session.image("fixed").pixel(1, 1), Pixel::new(50, 90, 180));
}

#[test]
fn test_convolve_with_configured_kernel() {
    let mut session = TestSession::configured();
    session.run("convolve", &["identity", names::GRADIENT, "same"]);
    assert_eq!(*session.image("same"), *session.image(names::GRADIENT));

    session.run("convolve", &["edge", names::SQUARE, "edges", "split", "50"]);
    let edges = session.image("edges");
    assert_eq!(edges.pixel(0, 1), session.image(names::SQUARE).pixel(0, 1));
}

#[test]
fn test_histogram_chart_uses_configured_size() {
    let mut session = TestSession::configured();
    session.run("histogram", &[names::SQUARE, "chart"]);
    assert_eq!(session.image("chart").dimensions(), (64, 64));

    let mut default_session = TestSession::new();
    default_session.run("histogram", &[names::SQUARE, "chart"]);
    assert_eq!(default_session.image("chart").dimensions(), (256, 256));
}

#[test]
fn test_save_and_reload() {
    let mut session = TestSession::new();
    session.run("value-component", &[names::SQUARE, "value"]);

    let stream = session.processor.save("value").unwrap();
    assert_eq!(
        stream.to_string(),
        "2 2\n255\n30\n30\n30\n60\n60\n60\n90\n90\n90\n120\n120\n120\n"
    );

    let reparsed = PixelStream::parse(&stream.to_string()).unwrap();
    session.processor.load("reloaded", &reparsed).unwrap();
    assert_eq!(*session.image("reloaded"), *session.image("value"));
}

#[test]
fn test_histogram_report_export() {
    let session = TestSession::new();
    let histogram = session.processor.histogram(names::SQUARE).unwrap();
    let report = HistogramReport::from(&histogram);

    assert_eq!(report.red[10], 1);
    assert_eq!(report.blue[120], 1);
    // ties resolve to the lowest value
    assert_eq!(report.peaks.red, 10);
    assert!(report.to_json().unwrap().starts_with("{\"red\":["));
}

#[test]
fn test_processor_matches_engine() {
    let mut session = TestSession::new();
    session.run("intensity-component", &[names::GRADIENT, "grey"]);
    let direct = PixelTransform::Intensity.apply_to(&session.image(names::GRADIENT));
    assert_eq!(*session.image("grey"), direct);
    assert_eq!(
        Histogram::of(&session.image("grey")),
        session.processor.histogram("grey").unwrap()
    );
}
