//! Id allocation across appends and removals.

use crate::common::TestHarness;
use logbook_core::{EntryId, RemoveOutcome};

#[test]
fn test_sequential_appends_get_sequential_ids() {
    let h = TestHarness::new();
    let ids: Vec<u64> = (0..5)
        .map(|n| h.add("alice", &format!("s{n}"), n + 1).get())
        .collect();
    assert_eq!(ids, vec![0, 1, 2, 3, 4]);
}

#[test]
fn test_ledger_is_newest_first() {
    let h = TestHarness::new();
    h.add("alice", "intro", 3);
    h.add("bob", "intro", 3);
    h.add("alice", "setup", 7);

    assert_eq!(
        h.ledger_text(),
        "entry #2: alice modified section setup on issue #7\n\
         entry #1: bob modified section intro on issue #3\n\
         entry #0: alice modified section intro on issue #3\n"
    );
}

#[test]
fn test_removing_non_head_keeps_next_id() {
    let h = TestHarness::new();
    h.add("alice", "intro", 1);
    h.add("alice", "intro", 2);
    h.add("alice", "intro", 3);

    let outcome = h.book.remove(EntryId::new(1)).unwrap();
    assert!(matches!(outcome, RemoveOutcome::Removed { .. }));
    assert_eq!(h.add("bob", "faq", 4), EntryId::new(3));
}

#[test]
fn test_head_left_after_removing_older_entries() {
    let h = TestHarness::new();
    h.add("alice", "intro", 1);
    h.add("alice", "intro", 2);
    h.add("alice", "intro", 3);

    h.book.remove(EntryId::new(0)).unwrap();
    h.book.remove(EntryId::new(1)).unwrap();
    assert_eq!(
        h.ledger_text(),
        "entry #2: alice modified section intro on issue #3\n"
    );
    assert_eq!(h.add("bob", "faq", 4), EntryId::new(3));
}

#[test]
fn test_removing_head_reuses_its_id() {
    let h = TestHarness::new();
    h.add("alice", "intro", 1);
    h.add("alice", "intro", 2);

    h.book.remove(EntryId::new(1)).unwrap();
    assert_eq!(h.add("bob", "faq", 4), EntryId::new(1));
}

#[test]
fn test_emptied_ledger_restarts_at_zero() {
    let h = TestHarness::new();
    h.add("alice", "intro", 1);
    h.book.remove(EntryId::new(0)).unwrap();

    assert_eq!(h.ledger_text(), "");
    assert_eq!(h.add("bob", "faq", 4), EntryId::FIRST);
}
