//! Test utilities for ledger testing

use crate::core::{Block, Ledger, ProofOfWork};

/// Certificate text the original demo issues
pub const CERTIFICATE: &str = "Bachelor's Degree Certificate";
pub const ISSUER: &str = "UniversityXYZ";
pub const STUDENT: &str = "Student123";

/// Create a ledger with `count` pending certificate records
pub fn ledger_with_records(count: usize) -> Ledger {
    let ledger = Ledger::new();
    for n in 0..count {
        ledger.append_record(ISSUER, &format!("{STUDENT}-{n}"), CERTIFICATE);
    }
    ledger
}

/// Solve the puzzle for the last block and seal whatever is pending
pub fn seal_next(ledger: &Ledger) -> Block {
    let previous = ledger
        .last_block()
        .expect("Test ledger always has a last block")
        .get_puzzle_solution();
    let solution = ProofOfWork::find_solution(previous);
    ledger
        .seal_block_strict(solution)
        .expect("Solution from find_solution must be accepted")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ledger_with_records() {
        let ledger = ledger_with_records(3);
        assert_eq!(ledger.pending_len(), 3);
        assert_eq!(ledger.len(), 1);
    }

    #[test]
    fn test_seal_next_extends_chain() {
        let ledger = ledger_with_records(1);
        let block = seal_next(&ledger);
        assert_eq!(block.get_index(), 2);
        assert!(ledger.is_chain_valid());
    }
}
