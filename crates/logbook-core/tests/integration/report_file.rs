//! Contents of the rendered report file.

use crate::common::{TestHarness, report_rows};
use logbook_core::{DuplicateCheck, IssueOrder};

const ISSUES: &str =
    "https://github.com/uprm-inso4116-2025-2026-s1/semester-project-uprm-hand_me_down_clothing/issues";

#[test]
fn test_report_matches_expected_table() {
    let h = TestHarness::new();
    h.add("alice", "intro", 3);
    h.add("bob", "intro", 3);
    h.add("alice", "setup", 7);

    let expected = format!(
        "=== Logbook\n\
         \n\
         [%header]\n\
         |===\n\
         | Person |  Sections worked on\n\
         | link:https://github.com/alice[alice] | intro (link:{ISSUES}/3[#3]), setup (link:{ISSUES}/7[#7])\n\
         | link:https://github.com/bob[bob] | intro (link:{ISSUES}/3[#3])\n\
         |==="
    );
    assert_eq!(h.report_text(), expected);
}

#[test]
fn test_same_triple_twice_rendered_once() {
    let h = TestHarness::new();
    h.add("alice", "intro", 3);
    h.add("alice", "intro", 3);

    assert_eq!(h.book.entries().unwrap().len(), 2);
    let rows = report_rows(&h.report_text());
    assert_eq!(
        rows,
        vec![format!(
            "| link:https://github.com/alice[alice] | intro (link:{ISSUES}/3[#3])"
        )]
    );
}

#[test]
fn test_issue_order_follows_config() {
    let lexicographic = TestHarness::new();
    let numeric = TestHarness::with_config(|mut c| {
        c.issue_order = IssueOrder::Numeric;
        c
    });
    for h in [&lexicographic, &numeric] {
        h.add("alice", "intro", 2);
        h.add("alice", "intro", 10);
    }

    assert!(lexicographic.report_text().contains(&format!(
        "intro (link:{ISSUES}/10[#10], link:{ISSUES}/2[#2])"
    )));
    assert!(numeric.report_text().contains(&format!(
        "intro (link:{ISSUES}/2[#2], link:{ISSUES}/10[#10])"
    )));
}

#[test]
fn test_same_contributions_render_identically() {
    let forward = TestHarness::new();
    forward.add("alice", "intro", 3);
    forward.add("bob", "faq", 5);
    forward.add("alice", "setup", 7);

    let backward = TestHarness::with_config(|mut c| {
        c.duplicate_check = DuplicateCheck::Triple;
        c
    });
    backward.add("alice", "setup", 7);
    backward.add("bob", "faq", 5);
    backward.add("alice", "intro", 3);

    assert_eq!(forward.report_text(), backward.report_text());
}

#[test]
fn test_refresh_rebuilds_deleted_report() {
    let h = TestHarness::new();
    h.add("alice", "intro", 3);
    let before = h.report_text();
    std::fs::remove_file(h.book.config().report_file()).unwrap();

    let summary = h.book.refresh_report().unwrap();
    assert_eq!(summary.users, 1);
    assert_eq!(h.report_text(), before);
}

#[test]
fn test_refresh_fails_on_malformed_ledger() {
    let h = TestHarness::new();
    h.book
        .ledger()
        .save("entry #0: alice modified section two words on issue #3\n")
        .unwrap();

    let err = h.book.refresh_report().unwrap_err();
    assert!(err.is_malformed());
    assert!(!h.book.config().report_file().exists());
}
