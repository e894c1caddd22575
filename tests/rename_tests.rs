//! Title changes: file moves and wikilink propagation through the CLI

mod common;

use std::fs;

use predicates::prelude::*;

use common::TestVault;

#[test]
fn test_rename_moves_file_and_rewrites_links() {
    let vault = TestVault::new();
    let renamed = vault.create("Old Title", "I am B");
    let referrer = vault.create("Referrer", "Links to [[Old Title]] and [[old title]].");
    let by_id = vault.create("By Id", &format!("[[#{}]]", renamed));

    let before = vault.json(&["show", &referrer]);

    let report = vault.json(&["rename", &renamed, "New Title"]);
    assert_eq!(report["filename"], format!("{} new-title.md", renamed));
    assert_eq!(report["rewritten"].as_array().unwrap().len(), 1);
    assert_eq!(report["rewritten"][0], referrer.as_str());

    let files = vault.note_files();
    assert_eq!(files.len(), 3, "one file per note: {:?}", files);
    assert!(files.contains(&format!("{} new-title.md", renamed)));
    assert!(!files.contains(&format!("{} old-title.md", renamed)));

    let after = vault.json(&["show", &referrer]);
    assert_eq!(after["body"], "Links to [[New Title]] and [[New Title]].");
    assert!(after["updatedAt"].as_str().unwrap() >= before["updatedAt"].as_str().unwrap());

    let untouched = vault.json(&["show", &by_id]);
    assert_eq!(untouched["body"], format!("[[#{}]]", renamed));

    let target = vault.json(&["show", &renamed]);
    assert_eq!(target["title"], "New Title");
    assert_eq!(target["body"], "I am B");
    assert_eq!(target["backlinks"].as_array().unwrap().len(), 2);
}

#[test]
fn test_rename_by_title() {
    let vault = TestVault::new();
    let id = vault.create("Draft", "");

    vault
        .cmd()
        .args(["rename", "draft", "Final"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Renamed"));

    let file = vault.notes_dir().join(format!("{} final.md", id));
    let content = fs::read_to_string(file).unwrap();
    assert!(content.contains("title: Final\n"));
}
