//! Test session factory for integration tests.

use std::sync::{Arc, Once};

use pixelworks::engine::Raster;
use pixelworks::error::ProcessError;
use pixelworks::models::EngineConfig;
use pixelworks::services::ImageProcessor;

use super::fixtures;

static TRACING: Once = Once::new();

/// Install a subscriber once per test binary (`RUST_LOG=pixelworks=debug`)
pub fn init_tracing() {
    TRACING.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| "pixelworks=warn".into()),
            )
            .with_test_writer()
            .try_init();
    });
}

/// Image processor with the reference images loaded
pub struct TestSession {
    pub processor: ImageProcessor,
}

impl TestSession {
    /// Session with default configuration and the 2x2 reference image
    pub fn new() -> Self {
        Self::with_config(EngineConfig::default())
    }

    /// Session using the fixture YAML configuration
    pub fn configured() -> Self {
        Self::with_config(EngineConfig::from_yaml_str(fixtures::CONFIG_YAML).unwrap())
    }

    pub fn with_config(config: EngineConfig) -> Self {
        init_tracing();
        let mut processor = ImageProcessor::new(config);
        processor
            .load(fixtures::names::SQUARE, &fixtures::square_stream())
            .unwrap();
        processor.insert(fixtures::names::GRADIENT, fixtures::gradient(5, 7));
        Self { processor }
    }

    /// Run a command and panic with the error message on failure
    pub fn run(&mut self, command: &str, args: &[&str]) {
        if let Err(e) = self.processor.run(command, args) {
            panic!("{} {:?} failed: {}", command, args, e);
        }
    }

    /// Run a command that must fail
    pub fn run_err(&mut self, command: &str, args: &[&str]) -> ProcessError {
        match self.processor.run(command, args) {
            Ok(()) => panic!("{} {:?} unexpectedly succeeded", command, args),
            Err(e) => e,
        }
    }

    /// Fetch a stored image
    pub fn image(&self, name: &str) -> Arc<Raster> {
        self.processor.store().get(name).unwrap()
    }

    /// Sorted names of every stored image
    pub fn names(&self) -> Vec<String> {
        self.processor
            .store()
            .names()
            .into_iter()
            .map(String::from)
            .collect()
    }
}
