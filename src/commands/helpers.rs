//! Shared helpers for command output and note lookup

use hypenote_core::error::{HypenoteError, Result};
use hypenote_core::index::NoteIndex;
use hypenote_core::note::frontmatter::format_timestamp;
use hypenote_core::note::Note;
use serde_json::{json, Value};

/// Find the note a user means by `query`.
///
/// Tried in order: exact id, `#id`, exact title (ignoring case), then a
/// unique title substring. Several substring matches are a usage error.
pub fn find_note<'a>(index: &'a NoteIndex, query: &str) -> Result<&'a Note> {
    if let Some(note) = index.find_note_by_id(query) {
        return Ok(note);
    }
    if let Some(note) = index.find_note_by_title(query) {
        return Ok(note);
    }

    let matches = index.find_notes(query);
    match matches.as_slice() {
        [note] => Ok(*note),
        [] => Err(HypenoteError::NoteNotFound {
            id: query.to_string(),
        }),
        several => Err(HypenoteError::UsageError(format!(
            "'{}' matches {} notes: {}",
            query,
            several.len(),
            several
                .iter()
                .map(|n| format!("{} ({})", n.display_title(), n.id()))
                .collect::<Vec<_>>()
                .join(", ")
        ))),
    }
}

/// Compact JSON summary of a note
pub fn note_summary_json(note: &Note) -> Value {
    json!({
        "id": note.id(),
        "title": note.title(),
        "tags": note.tags,
        "createdAt": format_timestamp(&note.created_at),
        "updatedAt": format_timestamp(&note.updated_at),
        "filename": note.filename(),
    })
}

/// Full JSON form of a note, body included
pub fn note_json(note: &Note) -> Value {
    let mut value = note_summary_json(note);
    value["body"] = json!(note.body);
    value
}

/// One-line human summary: `<id>  <title>  [tags]`
pub fn note_line(note: &Note) -> String {
    if note.tags.is_empty() {
        format!("{}  {}", note.id(), note.display_title())
    } else {
        format!(
            "{}  {}  [{}]",
            note.id(),
            note.display_title(),
            note.tags.join(", ")
        )
    }
}

pub fn print_json(value: &Value) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
