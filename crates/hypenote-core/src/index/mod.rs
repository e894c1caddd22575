//! In-memory note index
//!
//! [`NoteIndex`] owns the sorted note collection and the structures derived
//! from it:
//!
//! - title index: lowercased title -> id (last writer wins)
//! - tags index: tag -> ids
//! - backlinks index: target id -> ids of notes whose wikilinks resolve to it
//!
//! Only [`NoteIndex::load_notes`] rebuilds from scratch. Every other
//! mutation adds or strips a single note's contributions, so the backlinks
//! index always matches the link resolution rule in [`links::LinkTarget`]
//! once buffered edits have been applied.

mod debounce;
mod documents;
mod events;
mod graph;
pub mod links;
mod rename;

use std::collections::{BTreeMap, BTreeSet, HashMap};
use std::sync::mpsc::Receiver;
use std::time::{Duration, Instant};

use tracing::{debug, trace};

use crate::config::DEFAULT_DEBOUNCE_MS;
use crate::error::Result;
use crate::note::Note;
use crate::query::filter::{tag_counts, NoteFilter};
use crate::store::{SkippedFile, Store};
pub use debounce::UpdateBuffer;
pub use documents::SearchDocument;
pub use events::IndexEvent;
use events::Subscribers;
pub use graph::{LocalGraph, OutgoingLink};
use links::LinkTarget;
pub use rename::{RewriteFailure, RewriteReport};

/// The queryable view of all notes
#[derive(Debug)]
pub struct NoteIndex {
    /// Sorted by `updated_at` descending, except while actively editing
    notes: Vec<Note>,
    title_index: HashMap<String, String>,
    tags_index: BTreeMap<String, BTreeSet<String>>,
    backlinks_index: HashMap<String, BTreeSet<String>>,
    filter: NoteFilter,
    buffer: UpdateBuffer<Note>,
    subscribers: Subscribers,
}

impl Default for NoteIndex {
    fn default() -> Self {
        Self::new(Duration::from_millis(DEFAULT_DEBOUNCE_MS))
    }
}

impl NoteIndex {
    /// Create an empty index whose active-edit updates wait `debounce`
    pub fn new(debounce: Duration) -> Self {
        NoteIndex {
            notes: Vec::new(),
            title_index: HashMap::new(),
            tags_index: BTreeMap::new(),
            backlinks_index: HashMap::new(),
            filter: NoteFilter::default(),
            buffer: UpdateBuffer::new(debounce),
            subscribers: Subscribers::default(),
        }
    }

    /// Create an empty index using the vault's configured debounce delay
    pub fn for_store(store: &Store) -> Self {
        Self::new(store.config().debounce_delay())
    }

    /// Build an index over an existing collection
    pub fn from_notes(notes: Vec<Note>, debounce: Duration) -> Self {
        let mut index = Self::new(debounce);
        index.replace_all(notes);
        index
    }

    /// Reload every note from the store and rebuild all derived indexes.
    ///
    /// Buffered edits are discarded: they were saved before being buffered,
    /// so the reload already contains them. Returns the files that were
    /// skipped while loading.
    #[tracing::instrument(skip(self, store), fields(root = %store.root().display()))]
    pub fn load_notes(&mut self, store: &Store) -> Result<Vec<SkippedFile>> {
        let report = store.load_all()?;

        if !self.buffer.is_empty() {
            debug!(
                dropped = self.buffer.pending_count(),
                "Discarding buffered updates on reload"
            );
            self.buffer.clear();
        }

        let count = report.notes.len();
        self.replace_all(report.notes);
        self.subscribers.emit(IndexEvent::Loaded { count });
        debug!(count, "Index rebuilt");

        Ok(report.skipped)
    }

    fn replace_all(&mut self, notes: Vec<Note>) {
        self.notes = notes;
        self.sort();
        self.rebuild();
    }

    fn rebuild(&mut self) {
        self.title_index.clear();
        self.tags_index.clear();
        self.backlinks_index.clear();

        // Every edge is some note's outgoing link, so no inbound pass is needed
        for position in 0..self.notes.len() {
            self.index_note(position, false);
        }
    }

    /// Add a new note and re-sort.
    ///
    /// A note whose id is already indexed replaces the existing entry.
    #[tracing::instrument(skip(self, note), fields(note_id = %note.id()))]
    pub fn add(&mut self, note: Note) {
        let id = note.id().to_string();

        if self.position(&id).is_some() {
            debug!("Note already indexed, replacing");
            self.buffer.remove(&id);
            self.apply_update(note);
        } else {
            self.notes.push(note);
            self.index_note(self.notes.len() - 1, true);
            self.subscribers.emit(IndexEvent::Added { id });
        }

        self.sort();
    }

    /// Replace a note with a newer version.
    ///
    /// While actively editing the new version is buffered until the debounce
    /// deadline or the end of the edit session; otherwise it is applied and
    /// the collection re-sorted immediately. Unknown ids are ignored.
    pub fn update(&mut self, note: Note) {
        self.update_at(note, Instant::now());
    }

    /// [`update`](Self::update) with an explicit clock
    #[tracing::instrument(skip(self, note, now), fields(note_id = %note.id()))]
    pub fn update_at(&mut self, note: Note, now: Instant) {
        if self.position(note.id()).is_none() {
            debug!("Ignoring update for note that is not indexed");
            return;
        }

        if self.buffer.is_editing() {
            let id = note.id().to_string();
            let replaced = self.buffer.push_at(id, note, now);
            trace!(replaced, "Buffered update");
            return;
        }

        if self.apply_update(note) {
            self.sort();
        }
    }

    /// Remove a note and every contribution it made to the indexes
    #[tracing::instrument(skip(self))]
    pub fn remove(&mut self, id: &str) -> Option<Note> {
        self.buffer.remove(id);

        let position = self.position(id)?;
        let note = self.notes.remove(position);
        self.deindex_note(&note);
        self.subscribers.emit(IndexEvent::Removed { id: id.to_string() });

        Some(note)
    }

    /// Enter or leave the active-edit window.
    ///
    /// Leaving flushes every buffered update and re-sorts exactly once.
    pub fn set_actively_editing(&mut self, editing: bool) {
        let was_editing = self.buffer.set_editing(editing);

        match (was_editing, editing) {
            (false, true) => debug!("Entered active editing"),
            (true, false) => {
                let pending = self.buffer.drain();
                let flushed = self.apply_all(pending);
                self.sort();
                debug!(flushed, "Left active editing");
            }
            _ => {}
        }
    }

    pub fn is_actively_editing(&self) -> bool {
        self.buffer.is_editing()
    }

    /// Apply buffered updates whose deadline has passed; returns how many were applied
    pub fn process_due_updates(&mut self) -> usize {
        self.process_due_updates_at(Instant::now())
    }

    /// [`process_due_updates`](Self::process_due_updates) with an explicit clock.
    ///
    /// The collection keeps its order while editing is still active.
    pub fn process_due_updates_at(&mut self, now: Instant) -> usize {
        let due = self.buffer.take_due_at(now);
        if due.is_empty() {
            return 0;
        }

        let applied = self.apply_all(due);
        if !self.buffer.is_editing() {
            self.sort();
        }
        debug!(applied, "Applied due updates");
        applied
    }

    /// When buffered updates become due, if any are waiting
    pub fn next_deadline(&self) -> Option<Instant> {
        self.buffer.next_deadline()
    }

    pub fn pending_count(&self) -> usize {
        self.buffer.pending_count()
    }

    /// Receive an [`IndexEvent`] for every subsequent change
    pub fn subscribe(&mut self) -> Receiver<IndexEvent> {
        self.subscribers.subscribe()
    }

    /// All notes in collection order
    pub fn notes(&self) -> &[Note] {
        &self.notes
    }

    pub fn len(&self) -> usize {
        self.notes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.notes.is_empty()
    }

    /// Notes linking to `id`, in collection order
    pub fn get_backlinks(&self, id: &str) -> Vec<&Note> {
        match self.backlinks_index.get(id) {
            Some(sources) => self
                .notes
                .iter()
                .filter(|n| sources.contains(n.id()))
                .collect(),
            None => Vec::new(),
        }
    }

    /// Every note a wikilink target resolves to: `#id` gives at most one
    /// note, anything else matches titles by case-insensitive substring.
    pub fn find_notes(&self, target: &str) -> Vec<&Note> {
        LinkTarget::parse(target).resolve(&self.notes)
    }

    /// First note whose title equals `title`, ignoring case
    pub fn find_note_by_title(&self, title: &str) -> Option<&Note> {
        let wanted = title.to_lowercase();
        self.notes.iter().find(|n| n.title.to_lowercase() == wanted)
    }

    pub fn find_note_by_id(&self, id: &str) -> Option<&Note> {
        self.notes.iter().find(|n| n.id() == id)
    }

    /// Latest known version of a note, including a buffered edit
    pub fn current_note(&self, id: &str) -> Option<&Note> {
        self.buffer.get(id).or_else(|| self.find_note_by_id(id))
    }

    /// Id recorded in the title index for `title`
    pub fn id_for_title(&self, title: &str) -> Option<&str> {
        self.title_index.get(&title.to_lowercase()).map(String::as_str)
    }

    /// Notes carrying `tag` (case-sensitive), in collection order
    pub fn notes_with_tag(&self, tag: &str) -> Vec<&Note> {
        match self.tags_index.get(tag) {
            Some(ids) => self.notes.iter().filter(|n| ids.contains(n.id())).collect(),
            None => Vec::new(),
        }
    }

    pub fn filter(&self) -> &NoteFilter {
        &self.filter
    }

    pub fn set_filter(&mut self, filter: NoteFilter) {
        self.filter = filter;
    }

    pub fn set_search_text(&mut self, text: impl Into<String>) {
        self.filter.search_text = text.into();
    }

    pub fn toggle_tag(&mut self, tag: &str) {
        self.filter.toggle_tag(tag);
    }

    pub fn clear_filters(&mut self) {
        self.filter.clear();
    }

    /// Notes passing the current filter, in collection order
    pub fn filtered_notes(&self) -> Vec<&Note> {
        self.filter.apply(&self.notes)
    }

    /// Per-tag note counts over the filtered notes, sorted by tag
    pub fn tag_counts(&self) -> Vec<(String, usize)> {
        tag_counts(self.filtered_notes())
    }

    fn position(&self, id: &str) -> Option<usize> {
        self.notes.iter().position(|n| n.id() == id)
    }

    fn sort(&mut self) {
        self.notes.sort_by(|a, b| b.updated_at.cmp(&a.updated_at));
        trace!(count = self.notes.len(), "Resorted notes");
        self.subscribers.emit(IndexEvent::Resorted);
    }

    fn apply_all(&mut self, notes: Vec<Note>) -> usize {
        let mut applied = 0;
        for note in notes {
            if self.apply_update(note) {
                applied += 1;
            }
        }
        applied
    }

    /// Swap in a new version of an indexed note without re-sorting
    fn apply_update(&mut self, note: Note) -> bool {
        let Some(position) = self.position(note.id()) else {
            debug!(note_id = %note.id(), "Dropping update for note that is no longer indexed");
            return false;
        };

        let id = note.id().to_string();
        let old = std::mem::replace(&mut self.notes[position], note);
        self.deindex_note(&old);
        self.index_note(position, true);
        self.subscribers.emit(IndexEvent::Updated { id });
        true
    }

    /// Record the note at `position` in every index.
    ///
    /// With `inbound`, links from other notes that now resolve to it are
    /// recorded too.
    fn index_note(&mut self, position: usize, inbound: bool) {
        let note = &self.notes[position];
        let id = note.id().to_string();

        self.title_index.insert(note.title.to_lowercase(), id.clone());

        for tag in &note.tags {
            self.tags_index
                .entry(tag.clone())
                .or_default()
                .insert(id.clone());
        }

        for link in note.wikilinks() {
            for target in LinkTarget::parse(&link).resolve(&self.notes) {
                self.backlinks_index
                    .entry(target.id().to_string())
                    .or_default()
                    .insert(id.clone());
            }
        }

        if inbound {
            for other in &self.notes {
                if other.id() != id && links::links_to(other, note) {
                    self.backlinks_index
                        .entry(id.clone())
                        .or_default()
                        .insert(other.id().to_string());
                }
            }
        }
    }

    /// Strip every contribution `note` made to the indexes
    fn deindex_note(&mut self, note: &Note) {
        let id = note.id();

        let title_key = note.title.to_lowercase();
        if self.title_index.get(&title_key).map(String::as_str) == Some(id) {
            self.title_index.remove(&title_key);
            // Fall back to another note sharing the title, as a rebuild would
            if let Some(other) = self
                .notes
                .iter()
                .rev()
                .find(|n| n.id() != id && n.title.to_lowercase() == title_key)
            {
                self.title_index.insert(title_key, other.id().to_string());
            }
        }

        for tag in &note.tags {
            if let Some(ids) = self.tags_index.get_mut(tag) {
                ids.remove(id);
                if ids.is_empty() {
                    self.tags_index.remove(tag);
                }
            }
        }

        self.backlinks_index.remove(id);
        self.backlinks_index.retain(|_, sources| {
            sources.remove(id);
            !sources.is_empty()
        });
    }
}
