//! Logging utilities.
//!
//! Centralizes logger initialization and the shader-build diagnostic logger.
//! Code logs through the `log` facade; `env_logger` is the only backend.

mod init;

pub use init::{init_logging, log_build_failure, LoggingConfig, DEFAULT_FILTER};
