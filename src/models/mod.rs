pub mod command;
pub mod config;
pub mod request;

pub use command::{Command, SPLIT_ARGS, SPLIT_TOKEN};
pub use config::{EngineConfig, HistogramConfig, BUILTIN_KERNELS};
pub use request::{Operation, OperationRequest};
