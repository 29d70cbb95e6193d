//! Common test utilities for logbook integration tests.

use logbook_core::{AppendOutcome, EntryId, IssueNumber, Logbook, LogbookConfig};
use tempfile::TempDir;

/// A logbook rooted in its own temporary directory.
pub struct TestHarness {
    /// Keeps the directory alive for the duration of the test
    pub dir: TempDir,
    /// Engine under test
    pub book: Logbook,
}

impl TestHarness {
    /// Creates a harness with the default configuration.
    pub fn new() -> Self {
        Self::with_config(|config| config)
    }

    /// Creates a harness after letting the caller adjust the configuration.
    pub fn with_config(adjust: impl FnOnce(LogbookConfig) -> LogbookConfig) -> Self {
        let dir = TempDir::new().expect("create temp dir");
        let config = adjust(LogbookConfig::in_dir(dir.path()));
        let book = Logbook::new(config);
        Self { dir, book }
    }

    /// Appends a contribution and returns the assigned id.
    pub fn add(&self, user: &str, section: &str, issue: u64) -> EntryId {
        match self
            .book
            .append(user, section, IssueNumber::new(issue).unwrap())
            .unwrap()
        {
            AppendOutcome::Added { id, .. } => id,
            AppendOutcome::DuplicateSkipped { line } => {
                unreachable!("unexpected duplicate skip for {line}")
            }
        }
    }

    /// Current ledger text.
    pub fn ledger_text(&self) -> String {
        self.book.ledger().load().unwrap()
    }

    /// Current report text.
    pub fn report_text(&self) -> String {
        std::fs::read_to_string(self.book.config().report_file()).unwrap()
    }
}

impl Default for TestHarness {
    fn default() -> Self {
        Self::new()
    }
}

/// Report rows only, header and footer removed.
pub fn report_rows(report: &str) -> Vec<String> {
    report
        .lines()
        .skip(5)
        .filter(|line| *line != "|===")
        .map(str::to_string)
        .collect()
}
