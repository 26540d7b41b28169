use crate::error::{LedgerError, Result};
use crate::utils::sha256_hex;
use log::{debug, info, warn};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{mpsc, Arc};
use std::thread;
use std::time::Duration;

/// Leading hex digits a valid guess digest must carry. Fixed, never adjusted.
pub const DIFFICULTY_PREFIX: &str = "0000";

/// Brute-force puzzle relating each block's solution to the previous one.
///
/// A candidate `p'` solves the puzzle for `p` when
/// `sha256(format!("{p}{p'}"))` starts with [`DIFFICULTY_PREFIX`].
pub struct ProofOfWork;

impl ProofOfWork {
    /// Validate a claimed solution against the previous one
    pub fn is_valid(previous_solution: u64, candidate: u64) -> bool {
        let guess = format!("{previous_solution}{candidate}");
        sha256_hex(guess.as_bytes()).starts_with(DIFFICULTY_PREFIX)
    }

    /// Smallest non-negative solution for `previous_solution`.
    ///
    /// The search has no upper bound; use [`ProofOfWork::find_solution_cancellable`]
    /// or [`ProofOfWork::find_solution_with_timeout`] when the caller needs one.
    pub fn find_solution(previous_solution: u64) -> u64 {
        debug!("Searching for a solution after {previous_solution}");
        let mut candidate = 0;
        while !Self::is_valid(previous_solution, candidate) {
            candidate += 1;
        }
        info!(
            "Found solution {candidate} for {previous_solution} after {} attempts",
            candidate + 1
        );
        candidate
    }

    /// Same search as [`ProofOfWork::find_solution`], abandoned once `cancel` is raised.
    ///
    /// The flag is checked before every candidate, so a flag raised before the call
    /// returns `None` without hashing anything.
    pub fn find_solution_cancellable(previous_solution: u64, cancel: &AtomicBool) -> Option<u64> {
        debug!("Searching for a solution after {previous_solution} (cancellable)");
        let mut candidate = 0;
        loop {
            if cancel.load(Ordering::Relaxed) {
                warn!("Search for a solution after {previous_solution} cancelled at {candidate}");
                return None;
            }
            if Self::is_valid(previous_solution, candidate) {
                info!(
                    "Found solution {candidate} for {previous_solution} after {} attempts",
                    candidate + 1
                );
                return Some(candidate);
            }
            candidate += 1;
        }
    }

    /// Run the search on a worker thread and give up after `timeout`
    pub fn find_solution_with_timeout(previous_solution: u64, timeout: Duration) -> Result<u64> {
        let cancel = Arc::new(AtomicBool::new(false));
        let (sender, receiver) = mpsc::channel();

        let worker_cancel = Arc::clone(&cancel);
        let handle = thread::Builder::new()
            .name("pow-search".to_string())
            .spawn(move || {
                let found = Self::find_solution_cancellable(previous_solution, &worker_cancel);
                // The receiver may already be gone after a timeout
                let _ = sender.send(found);
            })
            .map_err(|e| LedgerError::Mining(format!("Failed to spawn search thread: {e}")))?;

        let outcome = receiver.recv_timeout(timeout);
        cancel.store(true, Ordering::Relaxed);
        if handle.join().is_err() {
            return Err(LedgerError::Mining("Search thread panicked".to_string()));
        }

        match outcome {
            Ok(Some(solution)) => Ok(solution),
            Ok(None) => Err(LedgerError::Mining(format!(
                "Search after {previous_solution} was cancelled"
            ))),
            Err(mpsc::RecvTimeoutError::Timeout) => Err(LedgerError::Mining(format!(
                "No solution after {previous_solution} within {} ms",
                timeout.as_millis()
            ))),
            Err(mpsc::RecvTimeoutError::Disconnected) => Err(LedgerError::Mining(
                "Search thread exited without a result".to_string(),
            )),
        }
    }
}
