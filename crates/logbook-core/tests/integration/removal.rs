//! Removal leaves the rest of the ledger byte-identical.

use crate::common::TestHarness;
use logbook_core::{EntryId, RemoveOutcome};

const HAND_EDITED: &str = "entry #4: alice modified section setup on issue #7\n\
                           \n\
                           entry #3: bob modified section intro on issue #3\r\n\
                           entry #1: carol modified section faq on issue #12\n\
                           entry #0: alice modified section intro on issue #3";

#[test]
fn test_remove_preserves_other_bytes() {
    let h = TestHarness::new();
    h.book.ledger().save(HAND_EDITED).unwrap();

    let outcome = h.book.remove(EntryId::new(3)).unwrap();
    assert_eq!(
        outcome,
        RemoveOutcome::Removed {
            line: "entry #3: bob modified section intro on issue #3".to_string(),
        }
    );
    assert_eq!(
        h.ledger_text(),
        "entry #4: alice modified section setup on issue #7\n\
         \n\
         entry #1: carol modified section faq on issue #12\n\
         entry #0: alice modified section intro on issue #3"
    );
}

#[test]
fn test_remove_unknown_id_reports_not_found() {
    let h = TestHarness::new();
    h.book.ledger().save(HAND_EDITED).unwrap();

    let outcome = h.book.remove(EntryId::new(2)).unwrap();
    assert_eq!(outcome, RemoveOutcome::NotFound { id: EntryId::new(2) });
    assert_eq!(h.ledger_text(), HAND_EDITED);
}

#[test]
fn test_remove_rerenders_report() {
    let h = TestHarness::new();
    h.add("alice", "intro", 3);
    h.add("bob", "intro", 3);
    assert!(h.report_text().contains("[bob]"));

    h.book.remove(EntryId::new(1)).unwrap();
    assert!(!h.report_text().contains("[bob]"));
    assert!(h.report_text().contains("[alice]"));
}
