//! Handlers for the one-shot subcommands.
//!
//! Each handler takes the output stream explicitly so tests can capture
//! what a user would see.

use std::io::Write;

use logbook_core::{AppendOutcome, EntryId, IssueNumber, Logbook, RemoveOutcome};

use crate::error::{Error, Result};

/// Records a contribution, checking the roster unless `any_user` is set.
pub fn cmd_add(
    book: &Logbook,
    user: &str,
    section: &str,
    issue: u64,
    any_user: bool,
    out: &mut impl Write,
) -> Result<()> {
    if !any_user && !book.config().is_on_roster(user) {
        return Err(Error::UnknownUser {
            user: user.to_string(),
        });
    }
    let issue = IssueNumber::new(issue)?;
    let outcome = book.append(user, section, issue)?;
    print_append(&outcome, out)
}

/// Deletes an entry by id.
pub fn cmd_remove(book: &Logbook, id: u64, out: &mut impl Write) -> Result<()> {
    let outcome = book.remove(EntryId::new(id))?;
    print_remove(&outcome, out)
}

/// Regenerates the report.
pub fn cmd_refresh(book: &Logbook, out: &mut impl Write) -> Result<()> {
    let summary = book.refresh_report()?;
    writeln!(
        out,
        "Updated {} ({} users, {} contributions)",
        summary.path.display(),
        summary.users,
        summary.contributions
    )?;
    Ok(())
}

/// Prints the raw ledger lines, newest first.
pub fn cmd_list(book: &Logbook, out: &mut impl Write) -> Result<()> {
    let lines = book.ledger().lines()?;
    if lines.iter().all(|l| l.trim().is_empty()) {
        writeln!(out, "The logbook is empty.")?;
        return Ok(());
    }
    for line in lines.iter().filter(|l| !l.trim().is_empty()) {
        writeln!(out, "{line}")?;
    }
    Ok(())
}

/// Prints the roster with the indexes the menu uses.
pub fn cmd_roster(book: &Logbook, out: &mut impl Write) -> Result<()> {
    for (i, user) in book.config().roster.iter().enumerate() {
        writeln!(out, "{i}: {user}")?;
    }
    Ok(())
}

/// Prints the result of an append.
pub fn print_append(outcome: &AppendOutcome, out: &mut impl Write) -> Result<()> {
    match outcome {
        AppendOutcome::Added { line, .. } => {
            writeln!(out, "\nAdded the following entry to the logbook:\n{line}")?;
        }
        AppendOutcome::DuplicateSkipped { .. } => {
            writeln!(out, "This entry already exists in the logbook.")?;
        }
    }
    Ok(())
}

/// Prints the result of a removal.
pub fn print_remove(outcome: &RemoveOutcome, out: &mut impl Write) -> Result<()> {
    match outcome {
        RemoveOutcome::Removed { line } => {
            writeln!(out, "\nRemoved the following entry from the logbook:\n{line}")?;
        }
        RemoveOutcome::NotFound { id } => {
            writeln!(out, "Entry #{id} does not exist.")?;
        }
    }
    Ok(())
}
