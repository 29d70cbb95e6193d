//! Persisted ledger text and the id / prepend / remove operations on it.
//!
//! The ledger is stored newest-first: the first non-blank line is the head,
//! and new entries receive `head.id + 1`. The text helpers here are pure so
//! the engine can compose them; [`LedgerFile`] does the whole-file I/O.

use std::fs;
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

use crate::entry::{Entry, EntryId, id_prefix};
use crate::error::{Error, Result};

/// The ledger file on disk.
#[derive(Debug, Clone)]
pub struct LedgerFile {
    path: PathBuf,
}

impl LedgerFile {
    /// Wraps the ledger at `path`. Nothing is read until [`load`](Self::load).
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Path of the ledger file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Reads the ledger text verbatim.
    ///
    /// A ledger that does not exist yet reads as empty.
    pub fn load(&self) -> Result<String> {
        match fs::read_to_string(&self.path) {
            Ok(text) => {
                log::debug!("Loaded ledger {:?} ({} bytes)", self.path, text.len());
                Ok(text)
            }
            Err(e) if e.kind() == ErrorKind::NotFound => {
                log::debug!("Ledger {:?} does not exist yet, starting empty", self.path);
                Ok(String::new())
            }
            Err(e) => Err(Error::io_with_path(e, &self.path)),
        }
    }

    /// Raw ledger lines, in file order.
    pub fn lines(&self) -> Result<Vec<String>> {
        Ok(self.load()?.lines().map(str::to_string).collect())
    }

    /// Replaces the ledger with `text`.
    pub fn save(&self, text: &str) -> Result<()> {
        write_atomic(&self.path, text)
    }
}

/// Overwrites `path` with `contents` through a temporary file and a rename.
///
/// Missing parent directories are created. Readers see either the old or
/// the new file, never a truncated one.
pub fn write_atomic(path: &Path, contents: &str) -> Result<()> {
    let parent = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p.to_path_buf(),
        _ => PathBuf::from("."),
    };
    fs::create_dir_all(&parent).map_err(|e| Error::io_with_path(e, &parent))?;

    let mut tmp = tempfile::NamedTempFile::new_in(&parent).map_err(|e| Error::io_with_path(e, &parent))?;
    tmp.write_all(contents.as_bytes())
        .map_err(|e| Error::io_with_path(e, tmp.path()))?;
    tmp.as_file()
        .sync_all()
        .map_err(|e| Error::io_with_path(e, tmp.path()))?;
    tmp.persist(path).map_err(|e| Error::io_with_path(e.error, path))?;

    log::debug!("Wrote {:?} ({} bytes)", path, contents.len());
    Ok(())
}

/// Id for the next appended entry.
///
/// `0` for a ledger without entries, otherwise one past the head's id.
/// A malformed head is reported rather than guessed around.
pub fn next_id(text: &str) -> Result<EntryId> {
    let head = text
        .split('\n')
        .enumerate()
        .find(|(_, line)| !line.trim().is_empty());

    match head {
        None => Ok(EntryId::FIRST),
        Some((index, line)) => {
            let head = Entry::decode(line).map_err(|e| e.at_line(index + 1))?;
            head.id
                .next()
                .ok_or_else(|| Error::malformed(line, "entry id is at its maximum").at_line(index + 1))
        }
    }
}

/// Puts `line` in front of the ledger as the new head.
pub fn prepend(text: &str, line: &str) -> String {
    let mut out = String::with_capacity(line.len() + 1 + text.len());
    out.push_str(line);
    out.push('\n');
    out.push_str(text);
    out
}

/// Removes the line that starts with `entry #<id>:`.
///
/// Returns the new text and the removed line (without terminator), or
/// `None` when no line carries that id. Every other byte of the ledger is
/// preserved in place.
pub fn remove_entry(text: &str, id: EntryId) -> Option<(String, String)> {
    let prefix = id_prefix(id);
    let mut offset = 0;

    for raw in text.split_inclusive('\n') {
        if raw.starts_with(&prefix) {
            let removed = raw.strip_suffix('\n').unwrap_or(raw);
            let removed = removed.strip_suffix('\r').unwrap_or(removed).to_string();

            let mut out = String::with_capacity(text.len() - raw.len());
            out.push_str(&text[..offset]);
            out.push_str(&text[offset + raw.len()..]);
            return Some((out, removed));
        }
        offset += raw.len();
    }

    None
}

/// True when the literal `line` already occurs anywhere in the ledger text.
pub fn contains_line(text: &str, line: &str) -> bool {
    text.contains(line)
}
