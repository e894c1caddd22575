use std::fs;
use std::path::{Path, PathBuf};
use std::time::Instant;

use tracing::{debug, warn};
use walkdir::WalkDir;

use super::io::{atomic_write, ensure_dir, is_hidden, move_file};
use super::Store;
use crate::error::{HypenoteError, Result};
use crate::id::NOTE_EXTENSION;
use crate::note::Note;

/// A file that `load_all` could not turn into a note
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedFile {
    pub path: PathBuf,
    pub reason: String,
}

/// Outcome of loading every note in the vault
#[derive(Debug, Clone, Default)]
pub struct LoadReport {
    /// Parsed notes, in no particular order
    pub notes: Vec<Note>,
    /// Files left out of the collection
    pub skipped: Vec<SkippedFile>,
}

impl Store {
    /// Path of the file backing `note` under its current title
    pub fn note_path(&self, note: &Note) -> PathBuf {
        self.notes_dir().join(note.filename())
    }

    /// Check whether `note` has a file under its current filename
    pub fn note_exists(&self, note: &Note) -> bool {
        self.note_path(note).is_file()
    }

    /// Persist a note, replacing any previous version of the same file
    #[tracing::instrument(skip(self, note), fields(note_id = %note.id()))]
    pub fn save(&self, note: &Note) -> Result<PathBuf> {
        let notes_dir = self.notes_dir();
        ensure_dir(&notes_dir)?;

        let path = notes_dir.join(note.filename());
        atomic_write(&path, &note.to_markdown())?;
        debug!(path = %path.display(), "Saved note");
        Ok(path)
    }

    /// Read and parse a single note file
    pub fn load_note(&self, path: &Path) -> Result<Note> {
        let content = fs::read_to_string(path)
            .map_err(|e| HypenoteError::io_operation("read", path.display(), e))?;
        Note::parse(&content, path)
    }

    /// Load every note in the notes directory.
    ///
    /// Unreadable or unparseable files are skipped and listed in the report;
    /// only an unusable notes directory fails the whole call.
    #[tracing::instrument(skip(self), fields(root = %self.root().display()))]
    pub fn load_all(&self) -> Result<LoadReport> {
        let start = Instant::now();
        let notes_dir = self.notes_dir();
        ensure_dir(&notes_dir)?;

        let mut report = LoadReport::default();

        for entry in WalkDir::new(&notes_dir).min_depth(1).max_depth(1) {
            let entry = match entry {
                Ok(entry) => entry,
                Err(e) => {
                    let path = e.path().map(Path::to_path_buf).unwrap_or_default();
                    warn!(path = %path.display(), error = %e, "Skipping unreadable entry");
                    report.skipped.push(SkippedFile {
                        path,
                        reason: e.to_string(),
                    });
                    continue;
                }
            };

            let path = entry.path();
            if !entry.file_type().is_file()
                || is_hidden(path)
                || path.extension().and_then(|e| e.to_str()) != Some(NOTE_EXTENSION)
            {
                continue;
            }

            match self.load_note(path) {
                Ok(note) => report.notes.push(note),
                Err(e) => {
                    warn!(path = %path.display(), error = %e, "Skipping file that is not a note");
                    report.skipped.push(SkippedFile {
                        path: path.to_path_buf(),
                        reason: e.to_string(),
                    });
                }
            }
        }

        debug!(
            loaded = report.notes.len(),
            skipped = report.skipped.len(),
            "Loaded notes"
        );
        crate::trace_time!(start, "load_all");
        Ok(report)
    }

    /// Move a note's file into the trash; a missing file is not an error
    #[tracing::instrument(skip(self, note), fields(note_id = %note.id()))]
    pub fn delete(&self, note: &Note) -> Result<()> {
        let source = self.notes_dir().join(note.filename());
        let trash_dir = self.trash_dir();
        ensure_dir(&self.notes_dir())?;
        ensure_dir(&trash_dir)?;

        if !source.exists() {
            debug!(path = %source.display(), "Nothing to delete");
            return Ok(());
        }

        move_file("trash", &source, &trash_dir.join(note.filename()))?;
        debug!(path = %source.display(), "Moved note to trash");
        Ok(())
    }

    /// Remove a note's file for good, bypassing the trash.
    ///
    /// A missing file is not an error.
    #[tracing::instrument(skip(self, note), fields(note_id = %note.id()))]
    pub fn delete_permanently(&self, note: &Note) -> Result<()> {
        let path = self.note_path(note);

        match fs::remove_file(&path) {
            Ok(()) => {
                debug!(path = %path.display(), "Deleted note file");
                Ok(())
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                debug!(path = %path.display(), "Nothing to delete");
                Ok(())
            }
            Err(e) => Err(HypenoteError::io_operation("delete", path.display(), e)),
        }
    }

    /// Move the file at `old_filename` to the note's current filename.
    ///
    /// No-op when the names match or the old file is gone.
    #[tracing::instrument(skip(self, note), fields(note_id = %note.id()))]
    pub fn rename(&self, note: &Note, old_filename: &str) -> Result<()> {
        let notes_dir = self.notes_dir();
        ensure_dir(&notes_dir)?;

        let new_filename = note.filename();
        if new_filename == old_filename {
            return Ok(());
        }

        let source = notes_dir.join(old_filename);
        if !source.exists() {
            debug!(path = %source.display(), "Nothing to rename");
            return Ok(());
        }

        move_file("rename", &source, &notes_dir.join(&new_filename))?;
        debug!(from = old_filename, to = %new_filename, "Renamed note file");
        Ok(())
    }
}
