//! Command-line interface
//!
//! This module contains the CLI commands and argument parsing
//! for the ledger driver.

pub mod commands;

pub use commands::{Command, Opt, DEFAULT_CERTIFICATE};
