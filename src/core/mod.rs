//! Core ledger functionality
//!
//! This module contains the fundamental ledger components: records, blocks,
//! the canonical block hasher, the proof-of-work puzzle and the ledger itself.

pub mod block;
pub mod hasher;
pub mod ledger;
pub mod proof_of_work;
pub mod transaction;

pub use block::{Block, GENESIS_INDEX, GENESIS_PREVIOUS_DIGEST, GENESIS_PUZZLE_SOLUTION};
pub use hasher::{canonical_encoding, digest};
pub use ledger::Ledger;
pub use proof_of_work::{ProofOfWork, DIFFICULTY_PREFIX};
pub use transaction::Transaction;
