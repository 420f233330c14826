//! Public API surface: the unified [`CoreError`].

mod error;

pub use error::CoreError;
