//! Logging utilities.
//!
//! Engine code logs through the `log` facade only; this module installs the
//! `env_logger` backend for binaries.

mod init;

pub use init::{LoggingConfig, init_logging};
