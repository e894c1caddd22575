//! End-to-end vault workflows: the paired store + index calls an
//! application makes for each user action.

use std::collections::HashSet;
use std::fs;

use hypenote_core::index::IndexEvent;
use hypenote_core::transfer::{export_notes, import_dir};
use hypenote_core::{Note, NoteIndex, Store};
use tempfile::tempdir;

fn open_vault() -> (tempfile::TempDir, Store, NoteIndex) {
    let dir = tempdir().unwrap();
    let store = Store::init(dir.path()).unwrap();
    let mut index = NoteIndex::for_store(&store);
    index.load_notes(&store).unwrap();
    (dir, store, index)
}

fn create(store: &Store, index: &mut NoteIndex, title: &str, body: &str) -> Note {
    let taken: HashSet<String> = index.notes().iter().map(|n| n.id().to_string()).collect();
    let note = Note::with_id(
        hypenote_core::id::next_free_id(&taken),
        title,
        vec![],
        body,
    );
    store.save(&note).unwrap();
    index.add(note.clone());
    note
}

#[test]
fn test_create_edit_delete_cycle() {
    let (_dir, store, mut index) = open_vault();

    let target = create(&store, &mut index, "Target", "");
    let source = create(&store, &mut index, "Source", "see [[target]]");
    assert_eq!(index.len(), 2);
    assert_eq!(index.get_backlinks(target.id()).len(), 1);

    // Edit the source in an editing session
    index.set_actively_editing(true);
    let mut edited = source.clone();
    edited.body = "no more links".to_string();
    edited.touch();
    store.save(&edited).unwrap();
    index.update(edited);
    assert_eq!(index.get_backlinks(target.id()).len(), 1);
    index.set_actively_editing(false);
    assert!(index.get_backlinks(target.id()).is_empty());

    // Delete moves the file to the trash and removes it from the index
    store.delete(&target).unwrap();
    index.remove(target.id());
    assert_eq!(index.len(), 1);
    assert!(store.trash_dir().join(target.filename()).exists());

    // A fresh load sees the same collection
    let mut reloaded = NoteIndex::for_store(&store);
    reloaded.load_notes(&store).unwrap();
    assert_eq!(reloaded.len(), 1);
    assert_eq!(reloaded.notes()[0].body, "no more links");
}

#[test]
fn test_rename_keeps_one_file_and_rewrites_links() {
    let (_dir, store, mut index) = open_vault();

    let b = create(&store, &mut index, "Old Title", "");
    let a = create(&store, &mut index, "Referrer", "Links to [[Old Title]].");
    let events = index.subscribe();

    let mut renamed = b.clone();
    let old_filename = renamed.filename();
    renamed.title = "New Title".to_string();
    renamed.touch();
    store.rename(&renamed, &old_filename).unwrap();
    store.save(&renamed).unwrap();
    let report = index.update_wikilinks(&store, "Old Title", "New Title", renamed.id());
    index.update(renamed.clone());

    assert_eq!(report.updated, vec![a.id().to_string()]);
    assert!(events
        .try_iter()
        .any(|e| e == IndexEvent::Updated { id: a.id().to_string() }));

    let files: Vec<_> = fs::read_dir(store.notes_dir())
        .unwrap()
        .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
        .collect();
    assert_eq!(files.len(), 2);
    assert!(files.contains(&renamed.filename()));

    let mut reloaded = NoteIndex::for_store(&store);
    reloaded.load_notes(&store).unwrap();
    let referrer = reloaded.find_note_by_id(a.id()).unwrap();
    assert_eq!(referrer.body, "Links to [[New Title]].");
    assert_eq!(
        reloaded
            .get_backlinks(renamed.id())
            .iter()
            .map(|n| n.id())
            .collect::<Vec<_>>(),
        vec![a.id()]
    );
}

#[test]
fn test_export_then_import_into_new_vault() {
    let (_dir, store, mut index) = open_vault();
    create(&store, &mut index, "First", "body one #tag");
    create(&store, &mut index, "Second", "[[First]]");

    let out = tempdir().unwrap();
    let exported = export_notes(index.notes(), out.path()).unwrap();
    assert_eq!(exported.written.len(), 2);

    let (_dir2, store2, mut index2) = open_vault();
    let mut taken = HashSet::new();
    let imported = import_dir(&store2, out.path(), &mut taken).unwrap();
    assert_eq!(imported.imported.len(), 2);
    assert!(imported.failures.is_empty());

    index2.load_notes(&store2).unwrap();
    let mut original: Vec<_> = index.notes().iter().map(|n| (n.id(), n.body.as_str())).collect();
    let mut copied: Vec<_> = index2.notes().iter().map(|n| (n.id(), n.body.as_str())).collect();
    original.sort();
    copied.sort();
    assert_eq!(original, copied);
}
