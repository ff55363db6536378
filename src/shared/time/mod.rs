//! Wall clock helpers in Unix nanoseconds.

use std::time::{SystemTime, UNIX_EPOCH};

/// Returns the current time as Unix nanoseconds.
pub fn unix_nano() -> i64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap()
        .as_nanos() as i64
}
