//! Error handling for the ledger
//!
//! This module provides the error type shared by every ledger operation.

use std::fmt;

/// Result type alias for ledger operations
pub type Result<T> = std::result::Result<T, LedgerError>;

/// Error types for ledger operations
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LedgerError {
    /// Malformed private or public key material
    InvalidKey(String),
    /// The ledger has no blocks (unreachable while construction invariants hold)
    EmptyLedger,
    /// A puzzle solution that does not satisfy the difficulty predicate
    InvalidProof { previous: u64, candidate: u64 },
    /// Block linkage or index validation errors
    InvalidBlock(String),
    /// Cryptographic operation errors
    Crypto(String),
    /// Mining errors (cancelled or timed out searches)
    Mining(String),
    /// Serialization/deserialization errors
    Serialization(String),
    /// Configuration errors
    Config(String),
    /// File I/O errors
    Io(String),
}

impl fmt::Display for LedgerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LedgerError::InvalidKey(msg) => write!(f, "Invalid key: {msg}"),
            LedgerError::EmptyLedger => write!(f, "Ledger has no blocks"),
            LedgerError::InvalidProof {
                previous,
                candidate,
            } => {
                write!(
                    f,
                    "Invalid proof: {candidate} does not solve the puzzle for {previous}"
                )
            }
            LedgerError::InvalidBlock(msg) => write!(f, "Invalid block: {msg}"),
            LedgerError::Crypto(msg) => write!(f, "Cryptographic error: {msg}"),
            LedgerError::Mining(msg) => write!(f, "Mining error: {msg}"),
            LedgerError::Serialization(msg) => write!(f, "Serialization error: {msg}"),
            LedgerError::Config(msg) => write!(f, "Configuration error: {msg}"),
            LedgerError::Io(msg) => write!(f, "I/O error: {msg}"),
        }
    }
}

impl std::error::Error for LedgerError {}

impl From<std::io::Error> for LedgerError {
    fn from(err: std::io::Error) -> Self {
        LedgerError::Io(err.to_string())
    }
}

impl From<serde_json::Error> for LedgerError {
    fn from(err: serde_json::Error) -> Self {
        LedgerError::Serialization(err.to_string())
    }
}

impl From<toml::de::Error> for LedgerError {
    fn from(err: toml::de::Error) -> Self {
        LedgerError::Config(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_messages() {
        assert_eq!(LedgerError::EmptyLedger.to_string(), "Ledger has no blocks");
        assert_eq!(
            LedgerError::InvalidKey("bad scalar".to_string()).to_string(),
            "Invalid key: bad scalar"
        );
        assert_eq!(
            LedgerError::InvalidProof {
                previous: 100,
                candidate: 7
            }
            .to_string(),
            "Invalid proof: 7 does not solve the puzzle for 100"
        );
    }

    #[test]
    fn test_io_error_conversion() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "missing");
        let err: LedgerError = io.into();
        assert!(matches!(err, LedgerError::Io(msg) if msg.contains("missing")));
    }
}
