use chrono::{DateTime, Utc};
use serde::Serialize;

use super::NoteIndex;
use crate::note::Note;

/// Read-only snapshot of a note for an external full-text indexer
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchDocument {
    pub id: String,
    pub title: String,
    pub body: String,
    pub tags: Vec<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<&Note> for SearchDocument {
    fn from(note: &Note) -> Self {
        SearchDocument {
            id: note.id().to_string(),
            title: note.title.clone(),
            body: note.body.clone(),
            tags: note.tags.clone(),
            created_at: note.created_at,
            updated_at: note.updated_at,
        }
    }
}

impl NoteIndex {
    /// Snapshot of every note, in collection order
    pub fn search_documents(&self) -> Vec<SearchDocument> {
        self.notes().iter().map(SearchDocument::from).collect()
    }
}
