//! Configuration management
//!
//! This module holds the driver settings: the log level and an optional bound
//! on puzzle searches. Settings come from defaults, then `LEDGER_*` environment
//! variables, then an optional TOML file.

pub mod settings;

pub use settings::{Config, GLOBAL_CONFIG};
