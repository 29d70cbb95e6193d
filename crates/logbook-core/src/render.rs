//! AsciiDoc rendering of a [`Report`].
//!
//! The output is a single `[%header]` table with one row per user:
//!
//! ```text
//! === Logbook
//!
//! [%header]
//! |===
//! | Person |  Sections worked on
//! | link:https://github.com/alice[alice] | intro (link:<issues>/3[#3]), setup (link:<issues>/7[#7])
//! |===
//! ```

use serde::{Deserialize, Serialize};

use crate::aggregate::Report;
use crate::entry::IssueNumber;

/// Default base for contributor profile links.
pub const DEFAULT_PROFILE_BASE_URL: &str = "https://github.com";

/// Default base for issue links.
pub const DEFAULT_ISSUE_BASE_URL: &str =
    "https://github.com/uprm-inso4116-2025-2026-s1/semester-project-uprm-hand_me_down_clothing/issues";

const HEADER: &str = "=== Logbook\n\n[%header]\n|===\n| Person |  Sections worked on\n";
const FOOTER: &str = "|===";

/// How issues are ordered inside a section.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IssueOrder {
    /// Compare issue numbers as strings, so `10` sorts before `2`.
    #[default]
    Lexicographic,
    /// Compare issue numbers as integers.
    Numeric,
}

impl IssueOrder {
    fn sort(self, issues: &mut [IssueNumber]) {
        match self {
            IssueOrder::Lexicographic => issues.sort_by_cached_key(|i| i.to_string()),
            IssueOrder::Numeric => issues.sort_unstable(),
        }
    }
}

/// Renders reports into the logbook table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportRenderer {
    profile_base_url: String,
    issue_base_url: String,
    issue_order: IssueOrder,
}

impl Default for ReportRenderer {
    fn default() -> Self {
        Self::new(DEFAULT_PROFILE_BASE_URL, DEFAULT_ISSUE_BASE_URL)
    }
}

impl ReportRenderer {
    /// Creates a renderer linking users and issues under the given bases.
    ///
    /// A trailing `/` on either base is ignored.
    pub fn new(profile_base_url: &str, issue_base_url: &str) -> Self {
        Self {
            profile_base_url: profile_base_url.trim_end_matches('/').to_string(),
            issue_base_url: issue_base_url.trim_end_matches('/').to_string(),
            issue_order: IssueOrder::default(),
        }
    }

    /// Sets the ordering of issues within a section.
    pub fn with_issue_order(mut self, order: IssueOrder) -> Self {
        self.issue_order = order;
        self
    }

    /// Link to a contributor profile.
    pub fn user_link(&self, user: &str) -> String {
        format!("link:{}/{user}[{user}]", self.profile_base_url)
    }

    /// Link to an issue.
    pub fn issue_link(&self, issue: IssueNumber) -> String {
        format!("link:{}/{issue}[#{issue}]", self.issue_base_url)
    }

    /// Renders the full report text.
    pub fn render(&self, report: &Report) -> String {
        let mut out = String::from(HEADER);

        for user in report.users() {
            let sections: Vec<String> = report
                .sections(user)
                .map(|(section, issues)| {
                    let mut issues: Vec<IssueNumber> = issues.iter().copied().collect();
                    self.issue_order.sort(&mut issues);
                    let links: Vec<String> = issues.into_iter().map(|i| self.issue_link(i)).collect();
                    format!("{section} ({})", links.join(", "))
                })
                .collect();

            out.push_str(&format!("| {} | {}\n", self.user_link(user), sections.join(", ")));
        }

        out.push_str(FOOTER);
        out
    }
}
