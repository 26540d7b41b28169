use crate::core::Transaction;
use log::debug;

/// Records waiting for the next sealed block, in insertion order.
///
/// The pool itself is not synchronized: the ledger keeps it behind the same
/// lock as its blocks so that draining and appending happen in one step.
#[derive(Debug, Default, Clone)]
pub struct MemoryPool {
    inner: Vec<Transaction>,
}

impl MemoryPool {
    pub fn new() -> MemoryPool {
        MemoryPool { inner: Vec::new() }
    }

    /// Add a record to the tail of the pool
    pub fn add(&mut self, tx: Transaction) {
        self.inner.push(tx);
        debug!("Memory pool now holds {} records", self.inner.len());
    }

    /// Remove and return every pending record, leaving the pool empty
    pub fn drain(&mut self) -> Vec<Transaction> {
        std::mem::take(&mut self.inner)
    }

    pub fn get_all(&self) -> &[Transaction] {
        self.inner.as_slice()
    }

    pub fn len(&self) -> usize {
        self.inner.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }
}
