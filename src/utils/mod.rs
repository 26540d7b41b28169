//! Utility functions and helpers
//!
//! This module contains the hashing helpers, the canonical JSON encoding
//! and the wall-clock timestamp used throughout the ledger.

pub mod crypto;
pub mod serialization;

pub use crypto::{current_timestamp, sha256_digest, sha256_hex, SHA256_HEX_LEN};

pub use serialization::{canonical_json, canonical_string};
