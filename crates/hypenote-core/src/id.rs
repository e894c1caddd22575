//! Note ID generation and filename derivation
//!
//! ID format (Zettelkasten style):
//! - 14 digits, `yyyyMMddHHmmss`, taken from the local clock at creation
//! - Example: `20250109140000`
//! - One-second granularity; `next_free_id` steps forward past collisions
//!
//! Filename format: `<id> <slug>.md`

use std::collections::HashSet;
use std::sync::OnceLock;

use chrono::{DateTime, Duration, Local, NaiveDateTime, TimeZone};
use regex::Regex;
use tracing::warn;

/// strftime pattern for note IDs
pub const ID_FORMAT: &str = "%Y%m%d%H%M%S";

/// Length of every generated note ID
pub const ID_LEN: usize = 14;

/// Slugs are cut to this many characters before trimming hyphens
pub const MAX_SLUG_LEN: usize = 50;

/// Slug used when a title produces nothing
pub const UNTITLED_SLUG: &str = "untitled";

/// Extension of note files
pub const NOTE_EXTENSION: &str = "md";

/// Generate an ID for the current second
pub fn generate_id() -> String {
    generate_id_at(Local::now())
}

/// Generate the ID for a specific instant
pub fn generate_id_at<Tz: TimeZone>(at: DateTime<Tz>) -> String
where
    Tz::Offset: std::fmt::Display,
{
    at.format(ID_FORMAT).to_string()
}

/// Generate an ID that is not already taken.
///
/// Starts at the current second and moves forward one second at a time, so
/// notes created in a burst (imports, quick capture) still get distinct,
/// time-ordered IDs.
pub fn next_free_id(taken: &HashSet<String>) -> String {
    let mut at = Local::now();
    loop {
        let candidate = generate_id_at(at);
        if !taken.contains(&candidate) {
            return candidate;
        }
        at += Duration::seconds(1);
    }
}

/// Check whether a string has the shape of a generated ID
pub fn is_valid_id(id: &str) -> bool {
    id.len() == ID_LEN
        && id.chars().all(|c| c.is_ascii_digit())
        && NaiveDateTime::parse_from_str(id, ID_FORMAT).is_ok()
}

fn slug_strip_regex() -> Option<&'static Regex> {
    static SLUG_STRIP_RE: OnceLock<Option<Regex>> = OnceLock::new();
    SLUG_STRIP_RE
        .get_or_init(|| match Regex::new(r"[^a-z0-9-]") {
            Ok(re) => Some(re),
            Err(e) => {
                warn!(error = %e, "Failed to compile slug regex");
                None
            }
        })
        .as_ref()
}

/// Generate a slug from a title
///
/// Lowercases, turns spaces into hyphens, drops everything outside
/// `[a-z0-9-]`, keeps the first 50 characters and trims hyphens from both
/// ends. Empty results become `untitled`.
pub fn slugify(title: &str) -> String {
    let lowered = title.to_lowercase().replace(' ', "-");
    let stripped = match slug_strip_regex() {
        Some(re) => re.replace_all(&lowered, "").into_owned(),
        None => lowered
            .chars()
            .filter(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || *c == '-')
            .collect(),
    };

    let truncated: String = stripped.chars().take(MAX_SLUG_LEN).collect();
    let slug = truncated.trim_matches('-');

    if slug.is_empty() {
        UNTITLED_SLUG.to_string()
    } else {
        slug.to_string()
    }
}

/// Generate a filename from ID and title
///
/// Format: `<id> <slug(title)>.md`
/// Example: `20250109140000 zettelkasten-note-types.md`
pub fn filename(id: &str, title: &str) -> String {
    format!("{} {}.{}", id, slugify(title), NOTE_EXTENSION)
}
