// This is the ledger itself - an in-memory, append-only list of blocks plus the
// pool of records waiting for the next block.
// Blocks and pool share one lock so sealing (digest, drain, append) is a single step.

use crate::core::{
    hasher, Block, ProofOfWork, Transaction, GENESIS_INDEX, GENESIS_PREVIOUS_DIGEST,
};
use crate::error::{LedgerError, Result};
use crate::storage::MemoryPool;
use log::{error, info};
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

struct LedgerState {
    blocks: Vec<Block>, // Never empty once constructed, genesis first
    pending: MemoryPool, // Records for the next sealed block
}

impl LedgerState {
    fn last_block(&self) -> Result<&Block> {
        self.blocks.last().ok_or(LedgerError::EmptyLedger)
    }

    // I build the next block from whatever is pending; the caller holds the write lock
    fn seal(&mut self, solution: u64) -> Result<Block> {
        let previous_digest = hasher::digest(self.last_block()?);
        let index = self.blocks.len() as u64 + 1;
        let records = self.pending.drain();

        let block = Block::new_block(index, records, solution, previous_digest);
        info!(
            "Sealed block {} with {} records (solution: {}, digest: {})",
            index,
            block.get_records().len(),
            solution,
            block.digest()
        );
        self.blocks.push(block.clone());
        Ok(block)
    }
}

pub struct Ledger {
    state: RwLock<LedgerState>,
}

impl Default for Ledger {
    fn default() -> Self {
        Self::new()
    }
}

impl Ledger {
    // When I start a new ledger it always gets the genesis block first
    pub fn new() -> Ledger {
        Ledger {
            state: RwLock::new(LedgerState {
                blocks: vec![Block::generate_genesis_block()],
                pending: MemoryPool::new(),
            }),
        }
    }

    // A poisoned lock still holds consistent data: every mutation finishes before the guard drops
    fn read_state(&self) -> RwLockReadGuard<'_, LedgerState> {
        self.state.read().unwrap_or_else(|poisoned| {
            error!("Ledger lock was poisoned; continuing with the last consistent state");
            poisoned.into_inner()
        })
    }

    fn write_state(&self) -> RwLockWriteGuard<'_, LedgerState> {
        self.state.write().unwrap_or_else(|poisoned| {
            error!("Ledger lock was poisoned; continuing with the last consistent state");
            poisoned.into_inner()
        })
    }

    /// Queue a record for the next block.
    ///
    /// Returns the index the next sealed block will take. The value is only
    /// advisory: more records may arrive, or another caller may seal first.
    pub fn append_record(&self, sender: &str, recipient: &str, payload: &str) -> u64 {
        let mut state = self.write_state();
        state
            .pending
            .add(Transaction::new(sender, recipient, payload));
        state
            .blocks
            .last()
            .map_or(GENESIS_INDEX, |block| block.get_index() + 1)
    }

    /// Seal every pending record into a new block.
    ///
    /// `solution` is stored as given; it is not checked against the puzzle.
    /// Use [`Ledger::seal_block_strict`] to reject invalid solutions.
    pub fn seal_block(&self, solution: u64) -> Result<Block> {
        self.write_state().seal(solution)
    }

    /// Seal only if `solution` solves the puzzle for the current last block
    pub fn seal_block_strict(&self, solution: u64) -> Result<Block> {
        let mut state = self.write_state();
        let previous = state.last_block()?.get_puzzle_solution();
        if !ProofOfWork::is_valid(previous, solution) {
            return Err(LedgerError::InvalidProof {
                previous,
                candidate: solution,
            });
        }
        state.seal(solution)
    }

    // When I just want the next block mined and sealed in one call
    pub fn mine_block(&self) -> Result<Block> {
        let previous = self.last_block()?.get_puzzle_solution();
        // The search runs without the lock so records can keep arriving meanwhile
        let solution = ProofOfWork::find_solution(previous);
        self.seal_block_strict(solution)
    }

    pub fn last_block(&self) -> Result<Block> {
        self.read_state().last_block().cloned()
    }

    pub fn blocks(&self) -> Vec<Block> {
        self.read_state().blocks.clone()
    }

    pub fn len(&self) -> usize {
        self.read_state().blocks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.read_state().blocks.is_empty()
    }

    pub fn pending_records(&self) -> Vec<Transaction> {
        self.read_state().pending.get_all().to_vec()
    }

    pub fn pending_len(&self) -> usize {
        self.read_state().pending.len()
    }

    /// Check genesis, index continuity and previous-digest linkage
    pub fn validate_chain(&self) -> Result<()> {
        Self::validate_blocks(&self.read_state().blocks)
    }

    /// Check that every sealed solution solves the puzzle for its predecessor
    pub fn validate_proofs(&self) -> Result<()> {
        Self::validate_block_proofs(&self.read_state().blocks)
    }

    pub fn is_chain_valid(&self) -> bool {
        let state = self.read_state();
        Self::validate_blocks(&state.blocks).is_ok()
            && Self::validate_block_proofs(&state.blocks).is_ok()
    }

    pub fn validate_blocks(blocks: &[Block]) -> Result<()> {
        let genesis = blocks.first().ok_or(LedgerError::EmptyLedger)?;
        if genesis.get_index() != GENESIS_INDEX {
            return Err(LedgerError::InvalidBlock(format!(
                "Genesis block has index {}, expected {GENESIS_INDEX}",
                genesis.get_index()
            )));
        }
        if genesis.get_previous_digest() != GENESIS_PREVIOUS_DIGEST {
            return Err(LedgerError::InvalidBlock(format!(
                "Genesis block links to {}, expected the sentinel {GENESIS_PREVIOUS_DIGEST}",
                genesis.get_previous_digest()
            )));
        }

        for (position, pair) in blocks.windows(2).enumerate() {
            let (previous, current) = (&pair[0], &pair[1]);
            let expected_index = position as u64 + 2;
            if current.get_index() != expected_index {
                return Err(LedgerError::InvalidBlock(format!(
                    "Block at position {expected_index} has index {}",
                    current.get_index()
                )));
            }

            let expected_digest = hasher::digest(previous);
            if current.get_previous_digest() != expected_digest {
                return Err(LedgerError::InvalidBlock(format!(
                    "Block {} links to {}, but block {} hashes to {}",
                    current.get_index(),
                    current.get_previous_digest(),
                    previous.get_index(),
                    expected_digest
                )));
            }
        }
        Ok(())
    }

    pub fn validate_block_proofs(blocks: &[Block]) -> Result<()> {
        for pair in blocks.windows(2) {
            let (previous, current) = (&pair[0], &pair[1]);
            if !ProofOfWork::is_valid(previous.get_puzzle_solution(), current.get_puzzle_solution())
            {
                return Err(LedgerError::InvalidProof {
                    previous: previous.get_puzzle_solution(),
                    candidate: current.get_puzzle_solution(),
                });
            }
        }
        Ok(())
    }
}
