//! The logbook engine: append, remove and refresh over the persisted files.
//!
//! Each call loads the ledger fresh from disk, applies its change, and
//! regenerates the whole report from the resulting text. Nothing is cached
//! between calls, and no locking is done across processes: two concurrent
//! writers race and the last one wins.

use std::path::{Path, PathBuf};

use crate::aggregate::{Report, aggregate_text};
use crate::config::{CONFIG_FILE_NAME, DuplicateCheck, LogbookConfig};
use crate::entry::{Entry, EntryId, IssueNumber, decode_ledger};
use crate::error::{Error, Result};
use crate::store::{self, LedgerFile};

/// Result of [`Logbook::append`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppendOutcome {
    /// The entry was written as the new head.
    Added {
        /// Id assigned to the entry
        id: EntryId,
        /// Encoded line that was written
        line: String,
    },
    /// The entry was already recorded; nothing was written.
    DuplicateSkipped {
        /// Encoded line that would have been written
        line: String,
    },
}

/// Result of [`Logbook::remove`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RemoveOutcome {
    /// The entry was deleted.
    Removed {
        /// Removed line, without terminator
        line: String,
    },
    /// No entry carries the requested id; nothing was written.
    NotFound {
        /// Id that was requested
        id: EntryId,
    },
}

/// Summary of a report write.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportSummary {
    /// Report file that was written
    pub path: PathBuf,
    /// Rows in the report
    pub users: usize,
    /// Distinct `(user, section, issue)` triples rendered
    pub contributions: usize,
}

/// A logbook: one ledger file and the report derived from it.
#[derive(Debug, Clone)]
pub struct Logbook {
    config: LogbookConfig,
    ledger: LedgerFile,
}

impl Logbook {
    /// Creates an engine over the files named by `config`.
    pub fn new(config: LogbookConfig) -> Self {
        let ledger = LedgerFile::new(config.ledger_file());
        Self { config, ledger }
    }

    /// Opens the logbook in `dir`, reading `dir/logbook.toml` when present.
    pub fn open(dir: &Path) -> Result<Self> {
        let config = LogbookConfig::load(&dir.join(CONFIG_FILE_NAME))?;
        Ok(Self::new(config))
    }

    /// Configuration in use.
    pub fn config(&self) -> &LogbookConfig {
        &self.config
    }

    /// Ledger file backing this logbook.
    pub fn ledger(&self) -> &LedgerFile {
        &self.ledger
    }

    /// Records that `user` modified `section` while resolving `issue`.
    ///
    /// Whitespace is stripped from `section`. The new entry gets the id
    /// after the current head and becomes the head itself.
    ///
    /// The ledger is saved before the report. If the report write fails the
    /// entry is already recorded and [`refresh_report`](Self::refresh_report)
    /// brings the report back in line.
    pub fn append(&self, user: &str, section: &str, issue: IssueNumber) -> Result<AppendOutcome> {
        validate_user(user)?;
        let section = normalize_section(section)?;

        let text = self.ledger.load()?;
        let id = store::next_id(&text)?;
        let entry = Entry::new(id, user, section, issue);
        let line = entry.encode();

        if self.is_duplicate(&text, &entry, &line)? {
            log::warn!("This entry already exists in the logbook: {line}");
            return Ok(AppendOutcome::DuplicateSkipped { line });
        }

        let updated = store::prepend(&text, &line);
        let report = self.render(&updated)?;
        self.ledger.save(&updated)?;
        self.write_report(&report)?;

        log::info!("Added the following entry to the logbook: {line}");
        Ok(AppendOutcome::Added { id, line })
    }

    /// Deletes the entry with `id`, leaving every other line untouched.
    pub fn remove(&self, id: EntryId) -> Result<RemoveOutcome> {
        let text = self.ledger.load()?;

        let Some((updated, line)) = store::remove_entry(&text, id) else {
            log::warn!("Entry #{id} does not exist");
            return Ok(RemoveOutcome::NotFound { id });
        };

        let report = self.render(&updated)?;
        self.ledger.save(&updated)?;
        self.write_report(&report)?;

        log::info!("Removed the following entry from the logbook: {line}");
        Ok(RemoveOutcome::Removed { line })
    }

    /// Regenerates the report from the current ledger without touching it.
    pub fn refresh_report(&self) -> Result<ReportSummary> {
        let text = self.ledger.load()?;
        let report = self.render(&text)?;
        let summary = self.write_report(&report)?;
        log::info!("Updated {}", summary.path.display());
        Ok(summary)
    }

    /// Decoded ledger entries, newest first.
    pub fn entries(&self) -> Result<Vec<Entry>> {
        decode_ledger(&self.ledger.load()?)
    }

    /// Current report, computed from the ledger.
    pub fn report(&self) -> Result<Report> {
        aggregate_text(&self.ledger.load()?)
    }

    fn is_duplicate(&self, text: &str, entry: &Entry, line: &str) -> Result<bool> {
        match self.config.duplicate_check {
            DuplicateCheck::EncodedLine => Ok(store::contains_line(text, line)),
            DuplicateCheck::Triple => Ok(decode_ledger(text)?
                .iter()
                .any(|existing| existing.same_contribution(entry))),
        }
    }

    fn render(&self, ledger_text: &str) -> Result<RenderedReport> {
        let report = aggregate_text(ledger_text)?;
        Ok(RenderedReport {
            text: self.config.renderer().render(&report),
            users: report.len(),
            contributions: report.contribution_count(),
        })
    }

    fn write_report(&self, report: &RenderedReport) -> Result<ReportSummary> {
        let path = self.config.report_file();
        store::write_atomic(&path, &report.text)?;
        Ok(ReportSummary {
            path,
            users: report.users,
            contributions: report.contributions,
        })
    }
}

struct RenderedReport {
    text: String,
    users: usize,
    contributions: usize,
}

/// Removes all whitespace from a section name.
///
/// Fails when nothing is left.
pub fn normalize_section(section: &str) -> Result<String> {
    let section: String = section.chars().filter(|c| !c.is_whitespace()).collect();
    if section.is_empty() {
        return Err(Error::validation_field("section", "section must not be empty"));
    }
    Ok(section)
}

fn validate_user(user: &str) -> Result<()> {
    if user.is_empty() {
        return Err(Error::validation_field("user", "user must not be empty"));
    }
    if user.contains(char::is_whitespace) {
        return Err(Error::validation_field(
            "user",
            format!("user {user:?} must not contain whitespace"),
        ));
    }
    Ok(())
}
