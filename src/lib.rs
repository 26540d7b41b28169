//! # Cert Ledger - an append-only certificate ledger
//!
//! Records (issuer, recipient, certificate text) wait in a memory pool until a
//! block is sealed. Every block links to the digest of the one before it, and
//! each block's puzzle solution must solve a small proof-of-work puzzle set by
//! the previous solution. Certificates are signed and verified with ECDSA secp256k1,
//! independently of the ledger.
//!
//! ## How the code is organized
//! - `core/`: records, blocks, the canonical hasher, proof-of-work and the ledger
//! - `storage/`: the memory pool of pending records
//! - `signing/`: key pairs, signing and verification
//! - `config/`: driver settings (environment and TOML file)
//! - `utils/`: SHA-256 helpers, canonical JSON, timestamps
//! - `cli/`: command-line interface for the driver binary
//!
//! ## Typical flow
//! 1. `Ledger::new()` creates the genesis block (index 1, solution 100)
//! 2. `Ledger::append_record` queues a certificate
//! 3. `ProofOfWork::find_solution(last_block.get_puzzle_solution())`
//! 4. `Ledger::seal_block(solution)` drains the pool into a new block
//! 5. `signing::sign` / `signing::verify` over the certificate text
//!
//! Nothing is persisted; a ledger lives as long as its owner.

pub mod cli;
pub mod config;
pub mod core;
pub mod error;
pub mod signing;
pub mod storage;
pub mod utils;

#[cfg(test)]
pub mod testnet;

// Re-export commonly used types for convenience
pub use cli::{Command, Opt};
pub use config::{Config, GLOBAL_CONFIG};
pub use core::{
    canonical_encoding, digest, Block, Ledger, ProofOfWork, Transaction, DIFFICULTY_PREFIX,
    GENESIS_INDEX, GENESIS_PREVIOUS_DIGEST, GENESIS_PUZZLE_SOLUTION,
};
pub use error::{LedgerError, Result};
pub use signing::{
    sign, verify, verify_strict, KeyPair, PUBLIC_KEY_LEN, SECRET_KEY_LEN, SIGNATURE_LEN,
};
pub use storage::MemoryPool;
pub use utils::{canonical_json, current_timestamp, sha256_digest, sha256_hex};
