//! Note filtering utilities

use std::collections::{BTreeMap, BTreeSet};

use crate::note::Note;

/// Filter state for the note list: selected tags plus a search box
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NoteFilter {
    /// Free text matched against title, body and tags (case-insensitive)
    pub search_text: String,
    /// Keep notes carrying at least one of these tags
    pub selected_tags: BTreeSet<String>,
}

impl NoteFilter {
    /// Create an empty filter that keeps every note
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the search text
    pub fn with_search(mut self, text: impl Into<String>) -> Self {
        self.search_text = text.into();
        self
    }

    /// Add a selected tag
    pub fn with_tag(mut self, tag: impl Into<String>) -> Self {
        self.selected_tags.insert(tag.into());
        self
    }

    /// Add several selected tags
    pub fn with_tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.selected_tags.extend(tags.into_iter().map(Into::into));
        self
    }

    /// Select `tag` if unselected, otherwise deselect it
    pub fn toggle_tag(&mut self, tag: &str) {
        if !self.selected_tags.remove(tag) {
            self.selected_tags.insert(tag.to_string());
        }
    }

    /// Reset to the empty filter
    pub fn clear(&mut self) {
        self.search_text.clear();
        self.selected_tags.clear();
    }

    /// True when no criteria are set
    pub fn is_empty(&self) -> bool {
        self.search_text.is_empty() && self.selected_tags.is_empty()
    }

    /// Check if a note passes both the tag and the text criteria
    pub fn matches(&self, note: &Note) -> bool {
        self.matches_tags(note) && self.matches_search(note)
    }

    fn matches_tags(&self, note: &Note) -> bool {
        self.selected_tags.is_empty() || note.tags.iter().any(|t| self.selected_tags.contains(t))
    }

    fn matches_search(&self, note: &Note) -> bool {
        if self.search_text.is_empty() {
            return true;
        }

        let needle = self.search_text.to_lowercase();
        note.title.to_lowercase().contains(&needle)
            || note.body.to_lowercase().contains(&needle)
            || note.tags.iter().any(|t| t.to_lowercase().contains(&needle))
    }

    /// Apply the filter, keeping input order
    pub fn apply<'a, I>(&self, notes: I) -> Vec<&'a Note>
    where
        I: IntoIterator<Item = &'a Note>,
    {
        notes.into_iter().filter(|n| self.matches(n)).collect()
    }
}

/// Count notes per tag, sorted by tag name.
///
/// A tag repeated within one note counts once per occurrence.
pub fn tag_counts<'a, I>(notes: I) -> Vec<(String, usize)>
where
    I: IntoIterator<Item = &'a Note>,
{
    let mut counts: BTreeMap<&str, usize> = BTreeMap::new();
    for note in notes {
        for tag in &note.tags {
            *counts.entry(tag.as_str()).or_insert(0) += 1;
        }
    }

    counts
        .into_iter()
        .map(|(tag, count)| (tag.to_string(), count))
        .collect()
}
