use anyhow::{Context, Result};
use chrono::Local;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::apply::execute_plan;
use crate::listing::{capture_listing, EntryInfo};
use crate::plan::{ApplyReport, RenamePlan};

/// Characters that are rejected in proposed names on every platform, so a
/// listing edited on one system still applies on another.
pub const FORBIDDEN_CHARACTERS: [char; 9] = ['<', '>', ':', '"', '/', '\\', '|', '?', '*'];

/// Control characters that never belong in a file name: newline, carriage
/// return, tab, backspace, form-feed, vertical-tab, bell.
pub const CONTROL_CHARACTERS: [char; 7] =
    ['\n', '\r', '\t', '\u{8}', '\u{c}', '\u{b}', '\u{7}'];

/// Timestamped name for the edit file of a session starting now.
pub fn default_edit_file_name() -> String {
    format!("new_names_{}.txt", Local::now().format("%Y%m%d_%H%M%S"))
}

/// Session setup failure. `AlreadyExists` means a previous session's edit
/// file is still sitting in the directory and must be moved or removed
/// before a new session can start.
#[derive(Debug, Error)]
pub enum SessionError {
    #[error("The file already exists: {}", .0.display())]
    AlreadyExists(PathBuf),
    #[error(transparent)]
    Setup(#[from] anyhow::Error),
}

/// Why the edit file cannot be applied as-is.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// The live directory no longer matches the snapshot.
    #[error("The files have changed since the listing was captured")]
    DirectoryChanged,
    #[error("The edit file has too few lines: expected {expected}, found {found}")]
    CountTooFew { expected: usize, found: usize },
    #[error("The edit file has too many lines: expected {expected}, found {found}")]
    CountTooMany { expected: usize, found: usize },
    #[error("Invalid character in filename: {character} -> {name}")]
    ForbiddenCharacter { character: char, name: String },
    #[error("Special character in filename: {character:?}")]
    ControlCharacter { character: char },
}

/// Outcome of checking the edit file against the snapshot and the live
/// directory. I/O failures while re-listing or reading the edit file are
/// reported separately, as errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Validation {
    Valid(RenamePlan),
    Invalid(ValidationError),
}

/// Outcome of an apply attempt: either the plan was executed (with per-entry
/// results) or validation rejected it and nothing was touched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApplyOutcome {
    Applied(ApplyReport),
    Rejected(ValidationError),
}

/// One interactive rename session: a directory, its edit file, and the
/// snapshot the edit file's lines are matched against by position.
///
/// The snapshot is captured at `initialize` and again at every `reset`;
/// `apply` deliberately leaves it untouched, so after renames have been
/// performed the stale snapshot makes further validation fail with
/// `DirectoryChanged` until the user resets.
#[derive(Debug)]
pub struct RenameSession {
    directory: PathBuf,
    edit_file_name: String,
    edit_file_path: PathBuf,
    snapshot_names: Vec<String>,
    snapshot_details: Vec<String>,
}

impl RenameSession {
    /// Start a session in `directory` with the default timestamped edit file.
    pub fn initialize(directory: &Path) -> Result<Self, SessionError> {
        Self::initialize_with_file(directory, &default_edit_file_name())
    }

    /// Start a session using `edit_file_name` as the edit file, creating it
    /// with one snapshot name per line.
    pub fn initialize_with_file(
        directory: &Path,
        edit_file_name: &str,
    ) -> Result<Self, SessionError> {
        let edit_file_path = directory.join(edit_file_name);
        if edit_file_path.exists() {
            return Err(SessionError::AlreadyExists(edit_file_path));
        }

        let mut session = Self {
            directory: directory.to_path_buf(),
            edit_file_name: edit_file_name.to_string(),
            edit_file_path,
            snapshot_names: Vec::new(),
            snapshot_details: Vec::new(),
        };
        session.capture_snapshot()?;
        session.write_edit_file()?;
        Ok(session)
    }

    pub fn directory(&self) -> &Path {
        &self.directory
    }

    pub fn edit_file_name(&self) -> &str {
        &self.edit_file_name
    }

    pub fn edit_file_path(&self) -> &Path {
        &self.edit_file_path
    }

    /// The names captured when the session started or was last reset.
    pub fn snapshot_names(&self) -> &[String] {
        &self.snapshot_names
    }

    /// Check the edit file against the snapshot and the live directory.
    ///
    /// Checks run in a fixed order: directory change first, then line
    /// count, then forbidden characters across all names, then control
    /// characters. The first violation wins.
    pub fn validate(&self) -> Result<Validation> {
        let live_details: Vec<String> = self
            .current_entries()?
            .into_iter()
            .map(|entry| entry.detail)
            .collect();
        if live_details != self.snapshot_details {
            return Ok(Validation::Invalid(ValidationError::DirectoryChanged));
        }

        let proposed = self.read_proposed_names()?;
        let expected = self.snapshot_names.len();
        let found = proposed.len();
        if found < expected {
            return Ok(Validation::Invalid(ValidationError::CountTooFew {
                expected,
                found,
            }));
        }
        if found > expected {
            return Ok(Validation::Invalid(ValidationError::CountTooMany {
                expected,
                found,
            }));
        }

        if let Some(violation) = find_character_violation(&proposed) {
            return Ok(Validation::Invalid(violation));
        }

        Ok(Validation::Valid(RenamePlan::from_names(
            &self.snapshot_names,
            &proposed,
        )))
    }

    /// Validate, then execute the plan best-effort. Validation failure means
    /// no filesystem mutation at all; execution failures are per-entry.
    pub fn apply(&self) -> Result<ApplyOutcome> {
        match self.validate()? {
            Validation::Invalid(error) => Ok(ApplyOutcome::Rejected(error)),
            Validation::Valid(plan) => {
                Ok(ApplyOutcome::Applied(execute_plan(&self.directory, &plan)))
            }
        }
    }

    /// Re-capture the snapshot from the live directory, then rewrite the
    /// edit file with exactly the fresh names. Afterwards `validate` is
    /// guaranteed to succeed with an all-no-op plan (unless the directory
    /// changes again).
    pub fn reset(&mut self) -> Result<()> {
        self.capture_snapshot()?;
        self.write_edit_file()
    }

    /// Remove the edit file. Returns `Ok(false)` when it was already gone.
    pub fn delete_edit_file(&self) -> Result<bool> {
        match fs::remove_file(&self.edit_file_path) {
            Ok(()) => Ok(true),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(false),
            Err(e) => Err(e).with_context(|| {
                format!("Failed to delete {}", self.edit_file_path.display())
            }),
        }
    }

    /// List the directory with the session's own edit file filtered out by
    /// exact name match.
    fn current_entries(&self) -> Result<Vec<EntryInfo>> {
        let mut entries = capture_listing(&self.directory)?;
        entries.retain(|entry| entry.name != self.edit_file_name);
        Ok(entries)
    }

    fn capture_snapshot(&mut self) -> Result<()> {
        let entries = self.current_entries()?;
        self.snapshot_names = entries.iter().map(|entry| entry.name.clone()).collect();
        self.snapshot_details = entries.into_iter().map(|entry| entry.detail).collect();
        Ok(())
    }

    fn write_edit_file(&self) -> Result<()> {
        let mut content = self.snapshot_names.join("\n");
        if !content.is_empty() {
            content.push('\n');
        }
        fs::write(&self.edit_file_path, content)
            .with_context(|| format!("Failed to write {}", self.edit_file_path.display()))
    }

    /// Read the proposed names back from the edit file, dropping empty
    /// lines so stray blank lines and the trailing newline don't count.
    fn read_proposed_names(&self) -> Result<Vec<String>> {
        let content = fs::read_to_string(&self.edit_file_path)
            .with_context(|| format!("Failed to read {}", self.edit_file_path.display()))?;
        Ok(content
            .lines()
            .filter(|line| !line.is_empty())
            .map(str::to_string)
            .collect())
    }
}

/// Scan all names for forbidden characters, then all names for control
/// characters, reporting the first hit.
fn find_character_violation(names: &[String]) -> Option<ValidationError> {
    for name in names {
        for character in FORBIDDEN_CHARACTERS {
            if name.contains(character) {
                return Some(ValidationError::ForbiddenCharacter {
                    character,
                    name: name.clone(),
                });
            }
        }
    }
    for name in names {
        for character in CONTROL_CHARACTERS {
            if name.contains(character) {
                return Some(ValidationError::ControlCharacter { character });
            }
        }
    }
    None
}
