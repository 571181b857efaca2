//! bedside-cli library root.
//!
//! Re-exports internal modules so that integration tests can drive the
//! commands and the config file without spawning the binary.

pub mod cli;
pub mod commands;
pub mod config;
pub mod logging;
