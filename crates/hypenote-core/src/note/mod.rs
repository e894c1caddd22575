//! Note data structures for hypenote
//!
//! Notes are plain markdown files with a small metadata header; see
//! [`frontmatter`] for the on-disk form.

pub mod frontmatter;

use std::path::Path;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::id;
use crate::index::links;

/// Title shown for notes whose title is empty
pub const UNTITLED: &str = "Untitled";

/// A complete note (metadata + body)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Note {
    /// Stable identity; never changes once assigned
    id: String,
    /// Free-text title, may be empty
    pub title: String,
    /// Tags, treated as a set by filters but kept in author order
    pub tags: Vec<String>,
    /// Creation timestamp
    pub created_at: DateTime<Utc>,
    /// Last content change; never earlier than `created_at`
    pub updated_at: DateTime<Utc>,
    /// Markdown body, may contain `[[wikilinks]]`
    pub body: String,
}

impl Note {
    /// Create a new note with an ID for the current second
    pub fn new(title: impl Into<String>, tags: Vec<String>, body: impl Into<String>) -> Self {
        Self::with_id(id::generate_id(), title, tags, body)
    }

    /// Create a new note with a caller-chosen ID and fresh timestamps
    pub fn with_id(
        id: impl Into<String>,
        title: impl Into<String>,
        tags: Vec<String>,
        body: impl Into<String>,
    ) -> Self {
        let now = Utc::now();
        Note {
            id: id.into(),
            title: title.into(),
            tags,
            created_at: now,
            updated_at: now,
            body: body.into(),
        }
    }

    /// Rebuild a note from stored parts (used when loading from disk)
    pub fn from_parts(
        id: impl Into<String>,
        title: impl Into<String>,
        tags: Vec<String>,
        created_at: DateTime<Utc>,
        updated_at: DateTime<Utc>,
        body: impl Into<String>,
    ) -> Self {
        Note {
            id: id.into(),
            title: title.into(),
            tags,
            created_at,
            updated_at: updated_at.max(created_at),
            body: body.into(),
        }
    }

    /// Get the note ID
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Get the note title
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Title for display; empty titles read as "Untitled"
    pub fn display_title(&self) -> &str {
        if self.title.is_empty() {
            UNTITLED
        } else {
            &self.title
        }
    }

    /// Slug derived from the title
    pub fn slug(&self) -> String {
        id::slugify(&self.title)
    }

    /// File name for this note: `<id> <slug>.md`
    ///
    /// Changes whenever the slug changes, so a title edit needs a
    /// [`Store::rename`](crate::store::Store::rename) to keep one file per note.
    pub fn filename(&self) -> String {
        id::filename(&self.id, &self.title)
    }

    /// Refresh `updated_at` after a content change
    pub fn touch(&mut self) {
        self.updated_at = Utc::now().max(self.created_at);
    }

    /// Raw wikilink targets in the body, in order of appearance, duplicates kept
    pub fn wikilinks(&self) -> Vec<String> {
        links::extract_wikilinks(&self.body)
    }

    /// Check if the body links to `target` by title (case-insensitive) or as `#target`
    pub fn contains_wikilink(&self, target: &str) -> bool {
        let lowered = target.to_lowercase();
        let by_id = format!("#{}", target);
        self.wikilinks()
            .iter()
            .any(|link| link.to_lowercase() == lowered || *link == by_id)
    }

    /// Parse a note from file content, reporting why it is not a note
    #[tracing::instrument(skip(content), fields(path = %path.display()))]
    pub fn parse(content: &str, path: &Path) -> Result<Self> {
        frontmatter::parse_note_checked(content, path)
    }

    /// Serialize the note to its on-disk form
    pub fn to_markdown(&self) -> String {
        frontmatter::encode(self)
    }
}
