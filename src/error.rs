use std::path::PathBuf;

use pixelworks_core::{CompressError, CoreError, KernelError, PreviewError, RasterError, ToneError};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ProcessError {
    #[error("Invalid number of Arguments for command: {command} required Args: {required}")]
    InvalidArgCount { command: String, required: usize },

    #[error("Unknown command: {0}")]
    UnknownCommand(String),

    #[error("Invalid {field}: {value}")]
    InvalidNumber { field: &'static str, value: String },

    #[error("Out of range: {0}")]
    OutOfRange(String),

    #[error("Invalid args for Split view for {0}")]
    InvalidSplit(String),

    #[error("Image Not Found: {0}")]
    ImageNotFound(String),

    #[error("Invalid pixel stream: {0}")]
    InvalidStream(String),

    #[error("Unknown kernel: {0}")]
    UnknownKernel(String),

    #[error(transparent)]
    Core(#[from] CoreError),
}

impl From<RasterError> for ProcessError {
    fn from(e: RasterError) -> Self {
        ProcessError::Core(e.into())
    }
}

impl From<PreviewError> for ProcessError {
    fn from(e: PreviewError) -> Self {
        ProcessError::Core(e.into())
    }
}

impl From<CompressError> for ProcessError {
    fn from(e: CompressError) -> Self {
        ProcessError::Core(e.into())
    }
}

impl From<ToneError> for ProcessError {
    fn from(e: ToneError) -> Self {
        ProcessError::Core(e.into())
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Config parse error: {0}")]
    Parse(#[from] serde_yaml::Error),

    #[error("Invalid kernel '{name}': {source}")]
    Kernel { name: String, source: KernelError },

    #[error("Kernel '{0}' is built in and cannot be redefined")]
    ReservedKernel(String),

    #[error("Invalid histogram size: {0}")]
    HistogramSize(usize),
}
