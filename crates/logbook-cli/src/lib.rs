//! # logbook-cli
//!
//! Command-line shell for the contribution logbook.
//!
//! The shell owns everything the engine does not: the username roster,
//! prompting, and input validation. It hands validated
//! `(user, section, issue)` values to [`logbook_core::Logbook`] and prints
//! the outcome.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![forbid(unsafe_code)]

pub mod cli;
pub mod commands;
pub mod config_handlers;
pub mod error;
pub mod menu;

pub use error::{Error, Result};
