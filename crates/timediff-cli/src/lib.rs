//! timediff CLI library.
//!
//! This crate reads documents, resolves configuration, and renders the
//! results computed by `timediff-core`.

mod cli;
pub mod commands;
pub mod config;

pub use cli::{Cli, Commands};
pub use config::{Config, ConfigError};
