//! Front matter codec
//!
//! A note on disk is a `---` delimited header of `key: value` lines followed
//! by a blank line and the raw body:
//!
//! ```text
//! ---
//! id: 20250109140000
//! title: Test Note
//! createdAt: 2025-01-09T14:00:00Z
//! updatedAt: 2025-01-09T14:00:00Z
//! tags: [test, sample]
//! ---
//!
//! Body text.
//! ```
//!
//! The header is a small YAML subset. Values are not escaped, so these do
//! not survive a round trip:
//!
//! - a title or tag containing a newline, or a tag containing a comma
//! - a title wrapped in brackets such as `[WIP]`, which decodes as a list
//!   and comes back as an empty title
//! - leading or trailing whitespace in a title, which is trimmed

use std::collections::BTreeMap;
use std::path::Path;

use chrono::{DateTime, SecondsFormat, Utc};

use super::Note;
use crate::error::{HypenoteError, Result};

/// Opening and closing line of the header block
pub const DELIMITER: &str = "---";

/// Header keys, in the order they are written
pub const KEY_ID: &str = "id";
pub const KEY_TITLE: &str = "title";
pub const KEY_CREATED_AT: &str = "createdAt";
pub const KEY_UPDATED_AT: &str = "updatedAt";
pub const KEY_TAGS: &str = "tags";

/// A parsed header value
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MetaValue {
    /// Plain trimmed string
    Text(String),
    /// `[a, b, c]` list
    List(Vec<String>),
    /// Interchange date-time; `raw` keeps the original spelling
    Timestamp { value: DateTime<Utc>, raw: String },
}

impl MetaValue {
    /// Parse a raw value: lists first, then timestamps, otherwise text
    pub fn parse(raw: &str) -> Self {
        let trimmed = raw.trim();

        if let Some(inner) = trimmed
            .strip_prefix('[')
            .and_then(|rest| rest.strip_suffix(']'))
        {
            let items = inner
                .split(',')
                .map(str::trim)
                .filter(|item| !item.is_empty())
                .map(str::to_string)
                .collect();
            return MetaValue::List(items);
        }

        if let Some(value) = parse_timestamp(trimmed) {
            return MetaValue::Timestamp {
                value,
                raw: trimmed.to_string(),
            };
        }

        MetaValue::Text(trimmed.to_string())
    }

    /// String form; timestamps yield their original text
    pub fn as_text(&self) -> Option<&str> {
        match self {
            MetaValue::Text(s) => Some(s),
            MetaValue::Timestamp { raw, .. } => Some(raw),
            MetaValue::List(_) => None,
        }
    }

    pub fn as_list(&self) -> Option<&[String]> {
        match self {
            MetaValue::List(items) => Some(items),
            _ => None,
        }
    }

    pub fn as_timestamp(&self) -> Option<DateTime<Utc>> {
        match self {
            MetaValue::Timestamp { value, .. } => Some(*value),
            _ => None,
        }
    }
}

/// Parsed header: key -> value
pub type Metadata = BTreeMap<String, MetaValue>;

/// Why a text has no usable header block
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum BlockError {
    MissingDelimiter,
    Unterminated,
}

impl BlockError {
    fn reason(self) -> &'static str {
        match self {
            BlockError::MissingDelimiter => "missing frontmatter delimiter (---)",
            BlockError::Unterminated => "missing closing frontmatter delimiter (---)",
        }
    }
}

/// Format a timestamp for the header (second precision, UTC)
pub fn format_timestamp(at: &DateTime<Utc>) -> String {
    at.to_rfc3339_opts(SecondsFormat::Secs, true)
}

/// Parse an interchange date-time (RFC 3339, or `%Y-%m-%dT%H:%M:%S%.3f%z`)
pub fn parse_timestamp(s: &str) -> Option<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(s)
        .or_else(|_| DateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S%.3f%z"))
        .ok()
        .map(|dt| dt.with_timezone(&Utc))
}

/// Generate the header block (including the trailing blank line) for a note
pub fn generate_front_matter(note: &Note) -> String {
    let tags = if note.tags.is_empty() {
        "[]".to_string()
    } else {
        format!("[{}]", note.tags.join(", "))
    };

    let lines = [
        DELIMITER.to_string(),
        format!("{}: {}", KEY_ID, note.id()),
        format!("{}: {}", KEY_TITLE, note.title),
        format!("{}: {}", KEY_CREATED_AT, format_timestamp(&note.created_at)),
        format!("{}: {}", KEY_UPDATED_AT, format_timestamp(&note.updated_at)),
        format!("{}: {}", KEY_TAGS, tags),
        DELIMITER.to_string(),
        String::new(),
        String::new(),
    ];

    lines.join("\n")
}

/// Encode a note: header block, blank line, then the body verbatim
pub fn encode(note: &Note) -> String {
    let mut out = generate_front_matter(note);
    out.push_str(&note.body);
    out
}

/// Split content into header lines and body.
fn split_block(content: &str) -> std::result::Result<(Vec<&str>, String), BlockError> {
    let lines: Vec<&str> = content.split('\n').collect();

    if lines.first().map(|l| l.trim()) != Some(DELIMITER) {
        return Err(BlockError::MissingDelimiter);
    }

    let close = lines
        .iter()
        .skip(1)
        .position(|l| l.trim() == DELIMITER)
        .map(|pos| pos + 1)
        .ok_or(BlockError::Unterminated)?;

    let header = lines[1..close].to_vec();

    // The encoder writes exactly one blank separator line; drop it so the
    // body round-trips unchanged.
    let mut body_lines = &lines[close + 1..];
    if body_lines.len() > 1 && body_lines[0].trim_end_matches('\r').is_empty() {
        body_lines = &body_lines[1..];
    }

    Ok((header, body_lines.join("\n")))
}

/// Parse one `key: value` header line; blank, comment and malformed lines yield nothing
fn parse_line(line: &str) -> Option<(String, MetaValue)> {
    let trimmed = line.trim();
    if trimmed.is_empty() || trimmed.starts_with('#') {
        return None;
    }

    let (key, value) = trimmed.split_once(": ")?;
    let key = key.trim();
    if key.is_empty() {
        return None;
    }

    Some((key.to_string(), MetaValue::parse(value)))
}

/// Decode content into header metadata and body.
///
/// Content without a leading delimiter, or with an unterminated block, is
/// all body: the metadata comes back empty and the body is the input as-is.
pub fn decode(content: &str) -> (Metadata, String) {
    match split_block(content) {
        Ok((header, body)) => {
            let metadata = header.into_iter().filter_map(parse_line).collect();
            (metadata, body)
        }
        Err(_) => (Metadata::new(), content.to_string()),
    }
}

fn note_from_metadata(metadata: &Metadata, body: String) -> Option<Note> {
    let id = metadata.get(KEY_ID).and_then(MetaValue::as_text)?;

    let title = metadata
        .get(KEY_TITLE)
        .and_then(MetaValue::as_text)
        .unwrap_or_default();
    let tags = metadata
        .get(KEY_TAGS)
        .and_then(MetaValue::as_list)
        .map(<[String]>::to_vec)
        .unwrap_or_default();

    let now = Utc::now();
    let created_at = metadata
        .get(KEY_CREATED_AT)
        .and_then(MetaValue::as_timestamp)
        .unwrap_or(now);
    let updated_at = metadata
        .get(KEY_UPDATED_AT)
        .and_then(MetaValue::as_timestamp)
        .unwrap_or(now);

    Some(Note::from_parts(id, title, tags, created_at, updated_at, body))
}

/// Parse a note from content; `None` if there is no header or no `id`.
pub fn parse_note(content: &str) -> Option<Note> {
    let (metadata, body) = decode(content);
    note_from_metadata(&metadata, body)
}

/// Like [`parse_note`], but says why the content is not a note.
pub(crate) fn parse_note_checked(content: &str, path: &Path) -> Result<Note> {
    let (header, body) =
        split_block(content).map_err(|e| HypenoteError::invalid_frontmatter(path, e.reason()))?;
    let metadata: Metadata = header.into_iter().filter_map(parse_line).collect();

    note_from_metadata(&metadata, body)
        .ok_or_else(|| HypenoteError::invalid_frontmatter(path, "missing required field: id"))
}
