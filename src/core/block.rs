use crate::core::{hasher, Transaction};
use crate::utils::current_timestamp;
use log::info;
use serde::{Deserialize, Serialize};

/// Index carried by the first block of every ledger
pub const GENESIS_INDEX: u64 = 1;
/// Sentinel stored in the genesis block in place of a computed digest
pub const GENESIS_PREVIOUS_DIGEST: &str = "1";
/// Puzzle solution the genesis block starts the chain with
pub const GENESIS_PUZZLE_SOLUTION: u64 = 100;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Block {
    index: u64,
    timestamp: f64,
    #[serde(rename = "transactions")]
    records: Vec<Transaction>,
    #[serde(rename = "proof")]
    puzzle_solution: u64,
    #[serde(rename = "previous_hash")]
    previous_digest: String,
}

impl Block {
    /// Build a block stamped with the current time. Linkage is the caller's concern.
    pub fn new_block(
        index: u64,
        records: Vec<Transaction>,
        puzzle_solution: u64,
        previous_digest: String,
    ) -> Block {
        Block {
            index,
            timestamp: current_timestamp(),
            records,
            puzzle_solution,
            previous_digest,
        }
    }

    pub fn generate_genesis_block() -> Block {
        info!("Creating genesis block with puzzle solution {GENESIS_PUZZLE_SOLUTION}");
        Block::new_block(
            GENESIS_INDEX,
            Vec::new(),
            GENESIS_PUZZLE_SOLUTION,
            GENESIS_PREVIOUS_DIGEST.to_string(),
        )
    }

    /// Create a test block with custom timestamp (for testing only)
    #[cfg(test)]
    pub fn new_test_block(
        index: u64,
        timestamp: f64,
        records: Vec<Transaction>,
        puzzle_solution: u64,
        previous_digest: &str,
    ) -> Block {
        Block {
            index,
            timestamp,
            records,
            puzzle_solution,
            previous_digest: previous_digest.to_string(),
        }
    }

    pub fn get_index(&self) -> u64 {
        self.index
    }

    pub fn get_timestamp(&self) -> f64 {
        self.timestamp
    }

    pub fn get_records(&self) -> &[Transaction] {
        self.records.as_slice()
    }

    pub fn get_puzzle_solution(&self) -> u64 {
        self.puzzle_solution
    }

    pub fn get_previous_digest(&self) -> &str {
        self.previous_digest.as_str()
    }

    pub fn is_genesis(&self) -> bool {
        self.index == GENESIS_INDEX
    }

    pub fn digest(&self) -> String {
        hasher::digest(self)
    }
}
