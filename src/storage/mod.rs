//! Pending record storage
//!
//! This module holds the memory pool of records that have not been
//! sealed into a block yet. Nothing here touches disk.

pub mod memory_pool;

pub use memory_pool::MemoryPool;
