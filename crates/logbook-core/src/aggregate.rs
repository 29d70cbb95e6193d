//! Folding ledger entries into the user → section → issues grouping.

use std::collections::{BTreeMap, BTreeSet};

use crate::entry::{Entry, IssueNumber, decode_ledger};
use crate::error::Result;

type Sections = BTreeMap<String, BTreeSet<IssueNumber>>;

/// Deduplicated grouping of contributions by user, then section.
///
/// A pure projection of the ledger: it is rebuilt from scratch for every
/// render and never patched in place.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Report {
    users: BTreeMap<String, Sections>,
}

impl Report {
    /// Empty report.
    pub fn new() -> Self {
        Self::default()
    }

    /// Records one contribution. Repeated issues collapse into one.
    pub fn insert(&mut self, entry: &Entry) {
        self.users
            .entry(entry.user.clone())
            .or_default()
            .entry(entry.section.clone())
            .or_default()
            .insert(entry.issue);
    }

    /// Users in ascending order of their handle.
    pub fn users(&self) -> impl Iterator<Item = &str> {
        self.users.keys().map(String::as_str)
    }

    /// Sections of `user` in ascending order with their issue sets.
    pub fn sections(&self, user: &str) -> impl Iterator<Item = (&str, &BTreeSet<IssueNumber>)> {
        self.users
            .get(user)
            .into_iter()
            .flat_map(|sections| sections.iter().map(|(s, issues)| (s.as_str(), issues)))
    }

    /// Issue set for one user and section, if any was recorded.
    pub fn issues(&self, user: &str, section: &str) -> Option<&BTreeSet<IssueNumber>> {
        self.users.get(user)?.get(section)
    }

    /// Number of users in the report.
    pub fn len(&self) -> usize {
        self.users.len()
    }

    /// True when no contribution was recorded.
    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
    }

    /// Number of distinct `(user, section, issue)` triples.
    pub fn contribution_count(&self) -> usize {
        self.users
            .values()
            .flat_map(|sections| sections.values())
            .map(BTreeSet::len)
            .sum()
    }
}

impl<'a> FromIterator<&'a Entry> for Report {
    fn from_iter<I: IntoIterator<Item = &'a Entry>>(iter: I) -> Self {
        let mut report = Report::new();
        for entry in iter {
            report.insert(entry);
        }
        report
    }
}

/// Groups decoded entries by user and section.
pub fn aggregate<'a, I>(entries: I) -> Report
where
    I: IntoIterator<Item = &'a Entry>,
{
    entries.into_iter().collect()
}

/// Decodes a whole ledger and aggregates it.
///
/// One malformed line fails the whole aggregation; no partial report is
/// produced.
pub fn aggregate_text(text: &str) -> Result<Report> {
    let entries = decode_ledger(text)?;
    Ok(aggregate(&entries))
}
