//! Pixelworks
//!
//! Named-image editing sessions over the `pixelworks-core` engine.
//! This library exposes modules for integration testing.

pub mod error;
pub mod models;
pub mod services;

pub use pixelworks_core as engine;
