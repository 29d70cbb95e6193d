//! Entry identifiers and the single-line ledger codec.
//!
//! Every ledger line has the fixed layout
//!
//! ```text
//! entry #<id>: <user> modified section <section> on issue #<issue>
//! ```
//!
//! which splits into exactly nine space-separated tokens. A `user` or
//! `section` containing whitespace therefore cannot be decoded.

use std::fmt;
use std::num::NonZeroU64;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Number of space-separated tokens in an encoded entry.
const TOKEN_COUNT: usize = 9;

/// Identifier assigned to an entry when it is appended.
///
/// # Examples
///
/// ```
/// use logbook_core::EntryId;
///
/// let id = EntryId::new(3);
/// assert_eq!(id.next(), Some(EntryId::new(4)));
/// assert_eq!(EntryId::new(u64::MAX).next(), None);
/// assert_eq!(id.to_string(), "3");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct EntryId(u64);

impl EntryId {
    /// Id given to the first entry of an empty ledger.
    pub const FIRST: EntryId = EntryId(0);

    /// Creates an entry id.
    pub fn new(id: u64) -> Self {
        Self(id)
    }

    /// Returns the raw id.
    pub fn get(self) -> u64 {
        self.0
    }

    /// Id that follows this one, or `None` once ids are exhausted.
    pub fn next(self) -> Option<Self> {
        self.0.checked_add(1).map(Self)
    }
}

impl fmt::Display for EntryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for EntryId {
    fn from(id: u64) -> Self {
        Self(id)
    }
}

/// Positive identifier of an issue in the external tracker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct IssueNumber(NonZeroU64);

impl IssueNumber {
    /// Creates an issue number, rejecting zero.
    ///
    /// # Examples
    ///
    /// ```
    /// use logbook_core::IssueNumber;
    ///
    /// assert!(IssueNumber::new(7).is_ok());
    /// assert!(IssueNumber::new(0).is_err());
    /// ```
    pub fn new(issue: u64) -> Result<Self> {
        NonZeroU64::new(issue)
            .map(Self)
            .ok_or_else(|| Error::validation_field("issue", "issue number must be positive"))
    }

    /// Returns the raw issue number.
    pub fn get(self) -> u64 {
        self.0.get()
    }
}

impl fmt::Display for IssueNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<NonZeroU64> for IssueNumber {
    fn from(issue: NonZeroU64) -> Self {
        Self(issue)
    }
}

/// One contribution record: `user` touched `section` while resolving `issue`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Entry {
    /// Id assigned at append time
    pub id: EntryId,
    /// Contributor handle
    pub user: String,
    /// Section token
    pub section: String,
    /// Issue resolved by the change
    pub issue: IssueNumber,
}

impl Entry {
    /// Creates an entry from its parts.
    pub fn new<U, S>(id: EntryId, user: U, section: S, issue: IssueNumber) -> Self
    where
        U: Into<String>,
        S: Into<String>,
    {
        Self {
            id,
            user: user.into(),
            section: section.into(),
            issue,
        }
    }

    /// Encodes the entry as a ledger line, without a terminator.
    pub fn encode(&self) -> String {
        self.to_string()
    }

    /// Decodes one ledger line.
    ///
    /// A trailing `\r` is tolerated; anything else that deviates from the
    /// fixed layout is a [`Error::MalformedEntry`].
    pub fn decode(line: &str) -> Result<Self> {
        let line = line.strip_suffix('\r').unwrap_or(line);
        let tokens: Vec<&str> = line.split(' ').collect();
        if tokens.len() != TOKEN_COUNT {
            return Err(Error::malformed(
                line,
                format!("expected {TOKEN_COUNT} tokens, found {}", tokens.len()),
            ));
        }

        for (index, expected) in [(0, "entry"), (3, "modified"), (4, "section"), (6, "on"), (7, "issue")]
        {
            if tokens[index] != expected {
                return Err(Error::malformed(
                    line,
                    format!("expected `{expected}`, found `{}`", tokens[index]),
                ));
            }
        }

        let id = tokens[1]
            .strip_prefix('#')
            .and_then(|t| t.strip_suffix(':'))
            .ok_or_else(|| Error::malformed(line, "entry id must look like `#<n>:`"))?;
        let id = parse_canonical(id)
            .ok_or_else(|| Error::malformed(line, format!("entry id `{id}` is not a number")))?;

        let issue = tokens[8]
            .strip_prefix('#')
            .ok_or_else(|| Error::malformed(line, "issue must look like `#<n>`"))?;
        let issue = parse_canonical(issue)
            .and_then(NonZeroU64::new)
            .ok_or_else(|| Error::malformed(line, format!("issue `{issue}` is not a positive number")))?;

        if tokens[2].is_empty() || tokens[5].is_empty() {
            return Err(Error::malformed(line, "user and section must not be empty"));
        }

        Ok(Self {
            id: EntryId(id),
            user: tokens[2].to_string(),
            section: tokens[5].to_string(),
            issue: IssueNumber(issue),
        })
    }

    /// True when both entries describe the same contribution, ignoring ids.
    pub fn same_contribution(&self, other: &Entry) -> bool {
        self.user == other.user && self.section == other.section && self.issue == other.issue
    }
}

impl fmt::Display for Entry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "entry #{}: {} modified section {} on issue #{}",
            self.id, self.user, self.section, self.issue
        )
    }
}

impl FromStr for Entry {
    type Err = Error;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Self::decode(s)
    }
}

/// Parses a number written the way `encode` writes it: ASCII digits only,
/// no sign, no leading zeros.
fn parse_canonical(token: &str) -> Option<u64> {
    if token.is_empty() || !token.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    if token.len() > 1 && token.starts_with('0') {
        return None;
    }
    token.parse().ok()
}

/// Decodes every non-blank line of a ledger, in file order.
///
/// The first malformed line aborts the whole decode; its 1-based line
/// number is recorded in the error.
pub fn decode_ledger(text: &str) -> Result<Vec<Entry>> {
    text.split('\n')
        .enumerate()
        .filter(|(_, line)| !line.trim().is_empty())
        .map(|(index, line)| Entry::decode(line).map_err(|e| e.at_line(index + 1)))
        .collect()
}

/// Prefix that starts the encoded line for `id`.
pub fn id_prefix(id: EntryId) -> String {
    format!("entry #{id}:")
}
