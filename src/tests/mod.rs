//! Scenario tests for the sharded ttl store.
//!
//! These cover end-to-end behavior: lazy expiration, sliding windows,
//! and concurrent access.
