//! Sharded, lazily-expiring ttl store.

pub mod shard;
pub mod store;

#[cfg(test)]
mod shard_test;

// Re-export main types
pub use shard::Shard;
pub use store::Store;
