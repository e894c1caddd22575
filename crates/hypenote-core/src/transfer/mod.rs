//! Import and export of plain markdown folders
//!
//! Import accepts both hypenote files (front matter with an `id`) and plain
//! markdown. Plain files become new notes: the first `# ` heading (or the
//! file stem) is the title, `#word` tokens are the tags, and the whole file
//! is the body. Export writes each note in its on-disk form.

use std::collections::{BTreeSet, HashSet};
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::OnceLock;

use regex::Regex;
use serde::Serialize;
use tracing::{debug, warn};

use crate::error::{HypenoteError, Result};
use crate::id::{next_free_id, NOTE_EXTENSION};
use crate::note::frontmatter::parse_note;
use crate::note::Note;
use crate::store::io::{atomic_write, is_hidden};
use crate::store::Store;

/// A file or note that could not be transferred
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TransferFailure {
    pub path: PathBuf,
    pub reason: String,
}

#[derive(Debug, Clone, Default)]
pub struct ImportReport {
    /// Notes saved into the vault, in directory order
    pub imported: Vec<Note>,
    pub failures: Vec<TransferFailure>,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct ExportReport {
    pub written: Vec<PathBuf>,
    pub failures: Vec<TransferFailure>,
}

fn tag_regex() -> Option<&'static Regex> {
    static TAG_RE: OnceLock<Option<Regex>> = OnceLock::new();
    TAG_RE
        .get_or_init(|| match Regex::new(r"#(\w+)") {
            Ok(re) => Some(re),
            Err(e) => {
                warn!(error = %e, "Failed to compile tag regex");
                None
            }
        })
        .as_ref()
}

/// Text of the first `# ` heading, trimmed
pub fn extract_title(content: &str) -> Option<String> {
    content
        .lines()
        .map(str::trim)
        .find_map(|line| line.strip_prefix("# "))
        .map(|title| title.trim().to_string())
}

/// Unique `#word` tokens, sorted
pub fn extract_tags(content: &str) -> Vec<String> {
    let Some(re) = tag_regex() else {
        return Vec::new();
    };

    re.captures_iter(content)
        .map(|cap| cap[1].to_string())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

/// Build a note from file content.
///
/// Content with a valid header keeps its identity; anything else becomes a
/// new note with an id not in `taken`.
pub fn note_from_markdown(content: &str, path: &Path, taken: &HashSet<String>) -> Note {
    if let Some(note) = parse_note(content) {
        return note;
    }

    let title = extract_title(content).unwrap_or_else(|| {
        path.file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_default()
    });

    Note::with_id(next_free_id(taken), title, extract_tags(content), content)
}

/// Import one markdown file and save it into the vault
#[tracing::instrument(skip(store, taken), fields(path = %path.display()))]
pub fn import_file(store: &Store, path: &Path, taken: &mut HashSet<String>) -> Result<Note> {
    let content = fs::read_to_string(path)
        .map_err(|e| HypenoteError::io_operation("read", path.display(), e))?;

    let note = note_from_markdown(&content, path, taken);
    store.save(&note)?;
    taken.insert(note.id().to_string());

    debug!(note_id = %note.id(), "Imported note");
    Ok(note)
}

/// Import every visible `.md` file directly inside `dir`.
///
/// `taken` holds ids already in use; new ids are added to it. Per-file
/// failures are collected and the rest continue.
#[tracing::instrument(skip(store, taken), fields(dir = %dir.display()))]
pub fn import_dir(store: &Store, dir: &Path, taken: &mut HashSet<String>) -> Result<ImportReport> {
    let entries =
        fs::read_dir(dir).map_err(|e| HypenoteError::io_operation("read", dir.display(), e))?;

    let mut paths: Vec<PathBuf> = entries
        .filter_map(|entry| entry.ok().map(|e| e.path()))
        .filter(|path| {
            path.is_file()
                && !is_hidden(path)
                && path
                    .extension()
                    .and_then(|e| e.to_str())
                    .is_some_and(|e| e.eq_ignore_ascii_case(NOTE_EXTENSION))
        })
        .collect();
    paths.sort();

    let mut report = ImportReport::default();
    for path in paths {
        match import_file(store, &path, taken) {
            Ok(note) => report.imported.push(note),
            Err(e) => {
                warn!(path = %path.display(), error = %e, "Failed to import file");
                report.failures.push(TransferFailure {
                    path,
                    reason: e.to_string(),
                });
            }
        }
    }

    Ok(report)
}

/// Write each note to `<dir>/<filename>` in its on-disk form
#[tracing::instrument(skip(notes), fields(dir = %dir.display()))]
pub fn export_notes<'a, I>(notes: I, dir: &Path) -> Result<ExportReport>
where
    I: IntoIterator<Item = &'a Note>,
{
    fs::create_dir_all(dir)
        .map_err(|e| HypenoteError::io_operation("create", dir.display(), e))?;

    let mut report = ExportReport::default();
    for note in notes {
        let path = dir.join(note.filename());
        match atomic_write(&path, &note.to_markdown()) {
            Ok(()) => report.written.push(path),
            Err(e) => {
                warn!(note_id = %note.id(), error = %e, "Failed to export note");
                report.failures.push(TransferFailure {
                    path,
                    reason: e.to_string(),
                });
            }
        }
    }

    debug!(
        written = report.written.len(),
        failed = report.failures.len(),
        "Exported notes"
    );
    Ok(report)
}
