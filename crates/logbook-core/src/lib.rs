#![doc = include_str!("../README.md")]
#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod aggregate;
pub mod config;
pub mod engine;
pub mod entry;
pub mod error;
pub mod render;
pub mod store;

mod proptests;

// Re-exports for convenience
pub use aggregate::{Report, aggregate, aggregate_text};
pub use config::{DuplicateCheck, LogbookConfig};
pub use engine::{AppendOutcome, Logbook, RemoveOutcome, ReportSummary};
pub use entry::{Entry, EntryId, IssueNumber, decode_ledger};
pub use error::{Error, Result};
pub use render::{IssueOrder, ReportRenderer};
pub use store::LedgerFile;
