//! Interactive menu: pick a user from the roster, then add, delete, or
//! refresh until the user quits.
//!
//! Input ends the session cleanly when it reaches end-of-file. Engine
//! errors are printed and the menu keeps running.

use std::io::{BufRead, Write};

use logbook_core::engine::normalize_section;
use logbook_core::{EntryId, IssueNumber, Logbook};

use crate::commands::{print_append, print_remove};
use crate::error::Result;

const MAIN_PROMPT: &str =
    "\nAdd or delete entry? ('a' for add, 'd' for delete, 'u' to update report, 'q' to quit): ";

/// What the user picked at the main prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    /// Add one or more entries
    Add,
    /// Delete an entry
    Delete,
    /// Regenerate the report
    Update,
    /// Leave the menu
    Quit,
}

impl MenuChoice {
    /// Parses a main-prompt answer, case-insensitively.
    pub fn parse(answer: &str) -> Option<Self> {
        match answer.trim().to_lowercase().as_str() {
            "a" | "add" => Some(MenuChoice::Add),
            "d" | "delete" => Some(MenuChoice::Delete),
            "u" | "update" | "updateadoc" => Some(MenuChoice::Update),
            "q" | "quit" => Some(MenuChoice::Quit),
            _ => None,
        }
    }
}

/// Interactive session over arbitrary input and output streams.
pub struct Menu<'a, R, W> {
    book: &'a Logbook,
    input: R,
    output: W,
}

impl<'a, R: BufRead, W: Write> Menu<'a, R, W> {
    /// Creates a menu driving `book`.
    pub fn new(book: &'a Logbook, input: R, output: W) -> Self {
        Self {
            book,
            input,
            output,
        }
    }

    /// Runs until the user quits or input ends.
    pub fn run(&mut self) -> Result<()> {
        loop {
            let Some(answer) = self.prompt(MAIN_PROMPT)? else {
                return Ok(());
            };
            match MenuChoice::parse(&answer) {
                Some(MenuChoice::Add) => {
                    if !self.add_loop()? {
                        return Ok(());
                    }
                }
                Some(MenuChoice::Delete) => {
                    if !self.delete()? {
                        return Ok(());
                    }
                }
                Some(MenuChoice::Update) => self.update()?,
                Some(MenuChoice::Quit) => {
                    writeln!(self.output, "Goodbye!")?;
                    return Ok(());
                }
                None => {
                    writeln!(
                        self.output,
                        "Invalid option. Please choose 'a', 'd', 'u', or 'q'."
                    )?;
                }
            }
        }
    }

    /// Adds entries until the user declines another. False on end of input.
    fn add_loop(&mut self) -> Result<bool> {
        loop {
            if !self.add()? {
                return Ok(false);
            }
            let Some(more) = self.prompt("\nAdd another entry? (y/n): ")? else {
                return Ok(false);
            };
            if more.trim().to_lowercase() != "y" {
                return Ok(true);
            }
        }
    }

    fn add(&mut self) -> Result<bool> {
        let Some(user) = self.choose_user()? else {
            return Ok(false);
        };

        let section = loop {
            let Some(answer) = self.prompt(&format!("\nWhat section did {user} modify? "))? else {
                return Ok(false);
            };
            match normalize_section(&answer) {
                Ok(section) => break section,
                Err(e) => writeln!(self.output, "{e}")?,
            }
        };

        let issue = loop {
            let Some(answer) = self.prompt(
                "\nWhat issue did this modification solve (just enter the number)? #",
            )?
            else {
                return Ok(false);
            };
            if let Some(issue) = answer
                .trim()
                .parse::<u64>()
                .ok()
                .and_then(|n| IssueNumber::new(n).ok())
            {
                break issue;
            }
        };

        match self.book.append(&user, &section, issue) {
            Ok(outcome) => print_append(&outcome, &mut self.output)?,
            Err(e) => {
                log::error!("Append failed: {e}");
                writeln!(self.output, "Error: {e}")?;
            }
        }
        Ok(true)
    }

    fn choose_user(&mut self) -> Result<Option<String>> {
        let roster = self.book.config().roster.clone();

        if roster.is_empty() {
            loop {
                let Some(answer) = self.prompt("\nWhich user? ")? else {
                    return Ok(None);
                };
                let answer = answer.trim();
                if !answer.is_empty() && !answer.contains(char::is_whitespace) {
                    return Ok(Some(answer.to_string()));
                }
            }
        }

        writeln!(self.output, "\nSelect user:")?;
        for (i, user) in roster.iter().enumerate() {
            writeln!(self.output, "{i}: {user}")?;
        }

        loop {
            let Some(answer) = self.prompt("\nWhich user (enter number)? ")? else {
                return Ok(None);
            };
            if let Some(user) = answer
                .trim()
                .parse::<usize>()
                .ok()
                .and_then(|i| roster.get(i))
            {
                return Ok(Some(user.clone()));
            }
        }
    }

    fn delete(&mut self) -> Result<bool> {
        let id = loop {
            let Some(answer) = self.prompt("\nWhich entry should be deleted (enter number)? ")?
            else {
                return Ok(false);
            };
            if let Ok(id) = answer.trim().parse::<u64>() {
                break EntryId::new(id);
            }
        };

        match self.book.remove(id) {
            Ok(outcome) => print_remove(&outcome, &mut self.output)?,
            Err(e) => {
                log::error!("Remove failed: {e}");
                writeln!(self.output, "Error: {e}")?;
            }
        }
        Ok(true)
    }

    fn update(&mut self) -> Result<()> {
        match self.book.refresh_report() {
            Ok(summary) => writeln!(self.output, "Updated {}", summary.path.display())?,
            Err(e) => {
                log::error!("Refresh failed: {e}");
                writeln!(self.output, "Error: {e}")?;
            }
        }
        Ok(())
    }

    /// Writes `message` and reads one line. `None` at end of input.
    fn prompt(&mut self, message: &str) -> Result<Option<String>> {
        write!(self.output, "{message}")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim_end_matches(['\n', '\r']).to_string()))
    }
}
