//! Tests for shard operations, including lazy expiry.

#[cfg(test)]
mod tests {
    use super::super::shard::Shard;
    use crate::time;

    const SECOND: i64 = 1_000_000_000;

    #[test]
    fn test_add_then_get_is_alive() {
        let shard = Shard::new(0);
        shard.add("k", SECOND);

        assert!(shard.get("k"));
        assert_eq!(shard.len(), 1);
    }

    #[test]
    fn test_get_of_unknown_key_is_false() {
        let shard = Shard::new(0);

        assert!(!shard.get("missing"));
        assert!(!shard.get_and_set_ttl("missing", SECOND));
        assert!(shard.is_empty());
    }

    #[test]
    fn test_expired_entry_is_reaped_on_get() {
        let shard = Shard::new(0);
        shard.add("k", SECOND);
        assert_eq!(shard.len(), 1);

        shard.set_deadline_for_tests("k", time::unix_nano() - 1);

        assert!(!shard.get("k"), "passed deadline means dead");
        assert_eq!(shard.len(), 0, "reap must drop the entry");
        assert!(!shard.get("k"), "absence is idempotent");
    }

    #[test]
    fn test_expired_entry_is_reaped_on_refresh_path() {
        let shard = Shard::new(0);
        shard.add("k", SECOND);

        shard.set_deadline_for_tests("k", time::unix_nano() - 1);

        assert!(!shard.get_and_set_ttl("k", 0));
        assert_eq!(shard.len(), 0);
        assert!(shard.peek("k").is_none());
    }

    #[test]
    fn test_get_does_not_touch_deadline() {
        let shard = Shard::new(0);
        shard.add("k", SECOND);
        let before = shard.peek("k").unwrap();

        for _ in 0..3 {
            assert!(shard.get("k"));
        }

        let after = shard.peek("k").unwrap();
        assert_eq!(before, after, "a pure read must not slide the window");
    }

    #[test]
    fn test_add_overwrites_expired_entry() {
        let shard = Shard::new(0);
        shard.add("k", SECOND);
        shard.set_deadline_for_tests("k", time::unix_nano() - SECOND);

        // No read happened in between, so the dead entry is still
        // resident; add must overwrite it like any other entry.
        shard.add("k", SECOND);

        assert!(shard.get("k"));
        assert_eq!(shard.len(), 1);
        assert!(
            shard.peek("k").unwrap().deadline() > time::unix_nano(),
            "old deadline must not leak into the new window"
        );
    }

    #[test]
    fn test_add_refreshes_live_entry() {
        let shard = Shard::new(0);
        shard.add("k", SECOND);
        shard.add("k", 5 * SECOND);

        let e = shard.peek("k").unwrap();
        assert_eq!(e.ttl(), 5 * SECOND, "add resets the stored ttl");
        assert_eq!(shard.len(), 1, "upsert must not duplicate the entry");
    }

    #[test]
    fn test_refresh_zero_slides_by_stored_ttl() {
        let shard = Shard::new(0);
        shard.add("k", SECOND);
        let before = shard.peek("k").unwrap().deadline();

        assert!(shard.get_and_set_ttl("k", 0));

        let e = shard.peek("k").unwrap();
        assert!(e.deadline() >= before, "refresh must not shrink the window");
        assert!(e.deadline() <= time::unix_nano() + SECOND);
        assert_eq!(e.ttl(), SECOND);
    }

    #[test]
    fn test_set_ttl_override_does_not_persist() {
        let shard = Shard::new(0);
        shard.add("k", SECOND);

        assert!(shard.get_and_set_ttl("k", 60 * SECOND));
        let e = shard.peek("k").unwrap();
        assert!(e.deadline() >= time::unix_nano() + 59 * SECOND);
        assert_eq!(e.ttl(), SECOND, "stored ttl keeps the original window");

        // The zero sentinel falls back to the original ttl, not the
        // override used above.
        assert!(shard.get_and_set_ttl("k", 0));
        let e = shard.peek("k").unwrap();
        assert!(e.deadline() <= time::unix_nano() + SECOND);
    }
}
