//! Neighbourhood queries over the link graph

use std::collections::HashSet;

use super::links::LinkTarget;
use super::NoteIndex;
use crate::note::Note;

/// One wikilink in a note and everything it resolves to
#[derive(Debug, Clone)]
pub struct OutgoingLink<'a> {
    /// Raw link text between the brackets
    pub target: String,
    /// Resolved notes; empty for a dangling link, several for an ambiguous one
    pub notes: Vec<&'a Note>,
}

impl OutgoingLink<'_> {
    pub fn is_resolved(&self) -> bool {
        !self.notes.is_empty()
    }

    pub fn is_ambiguous(&self) -> bool {
        self.notes.len() > 1
    }
}

/// A note and its direct neighbours
#[derive(Debug, Clone)]
pub struct LocalGraph<'a> {
    pub center: &'a Note,
    /// Backlinks first, then resolved outgoing targets; no repeats, never the centre
    pub neighbors: Vec<&'a Note>,
}

impl NoteIndex {
    /// Each wikilink of `note` paired with the notes it resolves to, in body order
    pub fn outgoing_links(&self, note: &Note) -> Vec<OutgoingLink<'_>> {
        note.wikilinks()
            .into_iter()
            .map(|target| {
                let notes = LinkTarget::parse(&target).resolve(self.notes());
                OutgoingLink { target, notes }
            })
            .collect()
    }

    /// The note with `id` plus every note linking to it or linked from it
    pub fn local_graph(&self, id: &str) -> Option<LocalGraph<'_>> {
        let center = self.find_note_by_id(id)?;

        let mut seen: HashSet<&str> = HashSet::from([center.id()]);
        let mut neighbors = Vec::new();

        let outgoing = self
            .outgoing_links(center)
            .into_iter()
            .flat_map(|link| link.notes);

        for note in self.get_backlinks(id).into_iter().chain(outgoing) {
            if seen.insert(note.id()) {
                neighbors.push(note);
            }
        }

        Some(LocalGraph { center, neighbors })
    }
}
