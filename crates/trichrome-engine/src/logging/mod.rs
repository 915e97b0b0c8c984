//! Logging utilities.
//!
//! Centralizes logger initialization. Components log through the standard
//! `log` facade; this module only decides where those records go.

mod init;

pub use init::{init_logging, LoggingConfig};
