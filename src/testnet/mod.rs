//! Test helpers for building ledgers in unit tests
//!
//! This module is only compiled for tests.

pub mod test_utils;

pub use test_utils::*;
