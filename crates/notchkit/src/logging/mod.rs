//! Logging utilities.
//!
//! The library itself only emits through the `log` facade. Hosts without a
//! logger of their own can install `env_logger` with [`init_logging`].

mod init;

pub use init::{init_logging, LoggingConfig};
