//! Sharded ttl store implementation.

use tracing::debug;

use super::shard::Shard;

/// Store tracks liveness windows for string keys across independent
/// shards. It holds deadlines only, never values: callers pair it with
/// whatever cache or session map actually owns the data.
///
/// Expired entries are reaped lazily, on the first read that observes a
/// passed deadline. A key that is never read again after expiring stays
/// resident; there is no background sweeper.
pub struct Store {
    default_ttl: i64,
    shards: Vec<Shard>,
}

impl Store {
    /// Creates a new store.
    ///
    /// `shard_count` below 1 is clamped to 1. `default_ttl` is the window
    /// length, in nanoseconds, used by [`Store::add_default`].
    pub fn new(shard_count: usize, default_ttl: i64) -> Self {
        let shard_count = shard_count.max(1);
        let mut shards = Vec::with_capacity(shard_count);
        for id in 0..shard_count {
            shards.push(Shard::new(id as u64));
        }

        debug!(shards = shard_count, default_ttl, "ttl store created");

        Self {
            default_ttl,
            shards,
        }
    }

    /// Routes a key to its shard index.
    ///
    /// CRC-32/IEEE over the key bytes, reduced modulo the shard count.
    /// Stable for the lifetime of the store, so a key is always served by
    /// the shard that owns its entry.
    pub(crate) fn shard_index(&self, key: &str) -> usize {
        crc32fast::hash(key.as_bytes()) as usize % self.shards.len()
    }

    /// Gets the shard owning a key.
    fn shard(&self, key: &str) -> &Shard {
        &self.shards[self.shard_index(key)]
    }

    /// Tracks a key with the default ttl. See [`Store::add`].
    pub fn add_default(&self, key: &str) {
        self.add(key, self.default_ttl);
    }

    /// Tracks a key for `ttl` nanoseconds from now.
    ///
    /// If the key is already tracked its entry is overwritten in place,
    /// whether or not it already expired: both the stored ttl and the
    /// deadline are reset.
    pub fn add(&self, key: &str, ttl: i64) {
        self.shard(key).add(key, ttl);
    }

    /// Reports whether a key is still alive.
    ///
    /// Pure read: the deadline is never extended. An expired entry is
    /// removed as a side effect, and absence and expiry are
    /// indistinguishable to the caller.
    pub fn get(&self, key: &str) -> bool {
        self.shard(key).get(key)
    }

    /// Reports whether a key is alive and slides its window by the
    /// stored ttl. Equivalent to `get_and_set_ttl(key, 0)`.
    pub fn get_and_refresh(&self, key: &str) -> bool {
        self.get_and_set_ttl(key, 0)
    }

    /// Reports whether a key is alive and advances its deadline from now.
    ///
    /// A zero `ttl` refreshes with the entry's stored ttl. A non-zero
    /// `ttl` sizes this refresh only: the stored ttl is left as it was,
    /// so a later zero-ttl refresh falls back to the original window,
    /// not the override.
    pub fn get_and_set_ttl(&self, key: &str, ttl: i64) -> bool {
        self.shard(key).get_and_set_ttl(key, ttl)
    }

    /// Gets the number of resident entries across all shards, including
    /// expired entries that have not been reaped yet.
    pub fn len(&self) -> i64 {
        self.shards.iter().map(Shard::len).sum()
    }

    /// Checks whether the store holds no entries.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Reads back an entry snapshot.
    #[allow(dead_code)]
    pub(crate) fn peek(&self, key: &str) -> Option<crate::model::Entry> {
        self.shard(key).peek(key)
    }

    /// Helper to force a specific deadline (used in tests).
    #[allow(dead_code)]
    pub(crate) fn set_deadline_for_tests(&self, key: &str, deadline: i64) {
        self.shard(key).set_deadline_for_tests(key, deadline);
    }
}
