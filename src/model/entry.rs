//! Liveness entry model.
//

/// Entry represents one tracked key's liveness window.
///
/// `deadline` is the absolute Unix-nano instant after which the key is
/// expired. `ttl` is the window length applied by the next refresh that
/// falls back to the stored value; it is not necessarily the length of
/// the current window (see [`Entry::refresh`]).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Entry {
    pub(crate) ttl: i64,
    pub(crate) deadline: i64,
}

impl Entry {
    /// Creates an entry whose window starts at `now`.
    pub(crate) fn new(ttl: i64, now: i64) -> Self {
        Self {
            ttl,
            deadline: now + ttl,
        }
    }

    /// Gets the stored ttl in nanoseconds.
    pub fn ttl(&self) -> i64 {
        self.ttl
    }

    /// Gets the absolute expiration instant in Unix nanoseconds.
    pub fn deadline(&self) -> i64 {
        self.deadline
    }

    /// Checks whether the entry is expired at the given instant.
    /// The deadline instant itself already counts as expired.
    pub(crate) fn is_expired(&self, now: i64) -> bool {
        now >= self.deadline
    }

    /// Overwrites both ttl and deadline, starting a fresh window at `now`.
    pub(crate) fn reset(&mut self, ttl: i64, now: i64) {
        self.ttl = ttl;
        self.deadline = now + ttl;
    }

    /// Advances the deadline from `now`. A zero `ttl` falls back to the
    /// stored ttl; a non-zero `ttl` sizes this window only and leaves the
    /// stored ttl unchanged.
    pub(crate) fn refresh(&mut self, ttl: i64, now: i64) {
        let effective = if ttl == 0 { self.ttl } else { ttl };
        self.deadline = now + effective;
    }
}
