//! Shard implementation.
//

use parking_lot::Mutex;
use std::collections::HashMap;
use std::sync::atomic::{AtomicI64, Ordering};

use crate::model::Entry;
use crate::time;

/// Shard is an independent partition of the keyspace: one exclusive lock
/// over one key-to-entry map. No operation ever touches two shards, so
/// the locks cannot deadlock against each other.
pub struct Shard {
    items: Mutex<HashMap<String, Entry>>,
    id: u64,
    len: AtomicI64,
}

impl Shard {
    /// Creates a new empty shard.
    pub fn new(id: u64) -> Self {
        Self {
            items: Mutex::new(HashMap::new()),
            id,
            len: AtomicI64::new(0),
        }
    }

    /// Gets the shard ID.
    #[allow(dead_code)]
    pub fn id(&self) -> u64 {
        self.id
    }

    /// Gets the number of resident entries, including expired entries
    /// that have not been reaped yet.
    pub fn len(&self) -> i64 {
        self.len.load(Ordering::Relaxed)
    }

    /// Checks whether the shard holds no entries.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Sets or refreshes a key, starting a window of `ttl` nanoseconds
    /// from now. An existing entry is overwritten in place whether or not
    /// it already expired; overwrite supersedes lazy deletion.
    pub fn add(&self, key: &str, ttl: i64) {
        let now = time::unix_nano();
        let mut items = self.items.lock();

        if let Some(e) = items.get_mut(key) {
            e.reset(ttl, now);
        } else {
            items.insert(key.to_owned(), Entry::new(ttl, now));
            self.len.fetch_add(1, Ordering::Relaxed);
        }
    }

    /// Checks liveness without touching the deadline. An expired entry is
    /// removed on the way out.
    pub fn get(&self, key: &str) -> bool {
        let now = time::unix_nano();
        let mut items = self.items.lock();

        match items.get(key) {
            None => return false,
            Some(e) => {
                if !e.is_expired(now) {
                    return true;
                }
            }
        }

        self.reap(&mut items, key);
        false
    }

    /// Checks liveness and advances a live entry's deadline from now.
    /// A zero `ttl` refreshes with the entry's stored ttl; a non-zero
    /// `ttl` sizes this window only, leaving the stored ttl unchanged.
    pub fn get_and_set_ttl(&self, key: &str, ttl: i64) -> bool {
        let now = time::unix_nano();
        let mut items = self.items.lock();

        match items.get_mut(key) {
            None => return false,
            Some(e) => {
                if !e.is_expired(now) {
                    e.refresh(ttl, now);
                    return true;
                }
            }
        }

        self.reap(&mut items, key);
        false
    }

    /// Drops an expired entry. Caller holds the shard lock.
    fn reap(&self, items: &mut HashMap<String, Entry>, key: &str) {
        if items.remove(key).is_some() {
            self.len.fetch_sub(1, Ordering::Relaxed);
            tracing::trace!(shard = self.id, key, "expired entry reaped");
        }
    }

    /// Reads back an entry snapshot.
    #[allow(dead_code)]
    pub(crate) fn peek(&self, key: &str) -> Option<Entry> {
        self.items.lock().get(key).copied()
    }

    /// Helper to force a specific deadline (used in tests).
    #[allow(dead_code)]
    pub(crate) fn set_deadline_for_tests(&self, key: &str, deadline: i64) {
        if let Some(e) = self.items.lock().get_mut(key) {
            e.deadline = deadline;
        }
    }
}
