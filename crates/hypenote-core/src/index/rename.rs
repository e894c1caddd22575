use serde::Serialize;
use tracing::{debug, warn};

use super::links::rewrite_wikilinks;
use super::NoteIndex;
use crate::note::Note;
use crate::store::Store;

/// A referring note whose rewritten body could not be saved
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RewriteFailure {
    pub id: String,
    pub reason: String,
}

/// Outcome of propagating a title change to referring notes
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RewriteReport {
    /// Ids of notes rewritten, saved and re-indexed
    pub updated: Vec<String>,
    /// Notes left untouched because saving failed
    pub failures: Vec<RewriteFailure>,
}

impl RewriteReport {
    pub fn is_clean(&self) -> bool {
        self.failures.is_empty()
    }
}

impl NoteIndex {
    /// Rewrite `[[old_title]]` to `[[new_title]]` in every note except `note_id`.
    ///
    /// Each changed note is touched, saved, and then pushed through
    /// [`update`](Self::update). A note that fails to save is reported and
    /// not re-indexed; the rest continue.
    #[tracing::instrument(skip(self, store))]
    pub fn update_wikilinks(
        &mut self,
        store: &Store,
        old_title: &str,
        new_title: &str,
        note_id: &str,
    ) -> RewriteReport {
        let mut report = RewriteReport::default();
        if old_title.is_empty() || old_title == new_title {
            return report;
        }

        let rewritten: Vec<Note> = self
            .notes()
            .iter()
            .filter(|n| n.id() != note_id)
            .filter_map(|n| {
                let base = self.current_note(n.id()).unwrap_or(n);
                let body = rewrite_wikilinks(&base.body, old_title, new_title)?;
                let mut note = base.clone();
                note.body = body;
                note.touch();
                Some(note)
            })
            .collect();

        for note in rewritten {
            let id = note.id().to_string();
            match store.save(&note) {
                Ok(_) => {
                    self.update(note);
                    report.updated.push(id);
                }
                Err(e) => {
                    warn!(note_id = %id, error = %e, "Failed to save rewritten wikilinks");
                    report.failures.push(RewriteFailure {
                        id,
                        reason: e.to_string(),
                    });
                }
            }
        }

        debug!(
            updated = report.updated.len(),
            failed = report.failures.len(),
            "Propagated title change"
        );
        report
    }
}
