//! Integration tests for the hypenote CLI

mod common;

use std::fs;

use predicates::prelude::*;
use tempfile::tempdir;

use common::{hypenote, TestVault};

// ============================================================================
// Help, version and exit codes
// ============================================================================

#[test]
fn test_help_flag() {
    let config = tempdir().unwrap();
    hypenote(config.path())
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage: hypenote"))
        .stdout(predicate::str::contains("init"))
        .stdout(predicate::str::contains("backlinks"))
        .stdout(predicate::str::contains("rename"));
}

#[test]
fn test_version_flag() {
    let config = tempdir().unwrap();
    hypenote(config.path())
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("hypenote"));
}

#[test]
fn test_unknown_format_exit_code_2() {
    let config = tempdir().unwrap();
    hypenote(config.path())
        .args(["--format", "invalid", "list"])
        .assert()
        .code(2);
}

#[test]
fn test_no_vault_is_storage_unavailable() {
    let config = tempdir().unwrap();
    hypenote(config.path())
        .arg("list")
        .assert()
        .code(3)
        .stderr(predicate::str::contains("storage unavailable"));
}

#[test]
fn test_json_error_envelope() {
    let config = tempdir().unwrap();
    hypenote(config.path())
        .args(["--format", "json", "list"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("\"storage_unavailable\""));
}

// ============================================================================
// Vault selection
// ============================================================================

#[test]
fn test_init_creates_layout_and_is_remembered() {
    let vault = TestVault::new();

    assert!(vault.path().join("notes").is_dir());
    assert!(vault.path().join("trash").is_dir());
    assert!(vault.path().join("templates").is_dir());
    assert!(vault.path().join("config.toml").is_file());

    // No --vault: the remembered vault is used
    hypenote(vault.config_dir())
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("No notes found"));
}

#[cfg(target_os = "linux")]
#[test]
fn test_init_without_path_uses_data_dir() {
    let config = tempdir().unwrap();
    let data = tempdir().unwrap();

    hypenote(config.path())
        .env("XDG_DATA_HOME", data.path())
        .arg("init")
        .assert()
        .success();

    let vault = data.path().join("hypenote-vault");
    assert!(vault.join("notes").is_dir());
    assert!(vault.join("config.toml").is_file());
}

// ============================================================================
// Notes
// ============================================================================

#[test]
fn test_create_and_show() {
    let vault = TestVault::new();

    let created = vault.json(&["create", "My Test Note", "--tag", "rust", "--body", "Hello"]);
    let id = created["id"].as_str().unwrap().to_string();
    assert_eq!(id.len(), 14);
    assert_eq!(created["filename"], format!("{} my-test-note.md", id));

    let content = fs::read_to_string(vault.notes_dir().join(format!("{} my-test-note.md", id)))
        .unwrap();
    assert!(content.starts_with("---\nid: "));
    assert!(content.contains("tags: [rust]"));
    assert!(content.ends_with("---\n\nHello"));

    vault
        .cmd()
        .args(["show", &id])
        .assert()
        .success()
        .stdout(predicate::str::contains("# My Test Note"))
        .stdout(predicate::str::contains("Hello"));
}

#[test]
fn test_create_uses_default_title() {
    let vault = TestVault::new();
    let created = vault.json(&["create"]);
    assert_eq!(created["title"], "New Note");
}

#[test]
fn test_rapid_creates_get_distinct_ids() {
    let vault = TestVault::new();
    let a = vault.create("One", "");
    let b = vault.create("Two", "");
    let c = vault.create("Three", "");

    assert_ne!(a, b);
    assert_ne!(b, c);
    assert_ne!(a, c);
    assert_eq!(vault.note_files().len(), 3);
}

#[test]
fn test_list_filters() {
    let vault = TestVault::new();
    vault.json(&["create", "Alpha", "--tag", "x"]);
    vault.json(&["create", "Beta", "--tag", "y"]);

    let both = vault.json(&["list"]);
    assert_eq!(both.as_array().unwrap().len(), 2);

    let alpha = vault.json(&["list", "--tag", "x", "--search", "Alpha"]);
    assert_eq!(alpha.as_array().unwrap().len(), 1);
    assert_eq!(alpha[0]["title"], "Alpha");

    let none = vault.json(&["list", "--tag", "x", "--search", "Beta"]);
    assert!(none.as_array().unwrap().is_empty());
}

#[test]
fn test_show_unknown_note() {
    let vault = TestVault::new();
    vault
        .cmd()
        .args(["show", "nothing-here"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("note not found"));
}

#[test]
fn test_ambiguous_note_is_usage_error() {
    let vault = TestVault::new();
    vault.create("Note A", "");
    vault.create("Note B", "");

    vault
        .cmd()
        .args(["show", "note"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("matches 2 notes"));
}

#[test]
fn test_edit_and_tags() {
    let vault = TestVault::new();
    let id = vault.create("Editable", "first");

    let edited = vault.json(&["edit", &id, "--append", "second", "--add-tag", "done"]);
    assert_eq!(edited["body"], "first\nsecond");
    assert_eq!(edited["tags"][0], "done");

    let tags = vault.json(&["tags"]);
    assert_eq!(tags[0]["tag"], "done");
    assert_eq!(tags[0]["count"], 1);

    vault.cmd().args(["edit", &id]).assert().code(2);
}

#[test]
fn test_delete_moves_to_trash() {
    let vault = TestVault::new();
    let id = vault.create("Doomed", "");

    vault.cmd().args(["delete", &id]).assert().success();

    assert!(vault.note_files().is_empty());
    assert!(vault
        .path()
        .join("trash")
        .join(format!("{} doomed.md", id))
        .exists());
    assert!(vault.json(&["list"]).as_array().unwrap().is_empty());
}

#[test]
fn test_delete_permanent_skips_trash() {
    let vault = TestVault::new();
    let id = vault.create("Shredded", "");
    vault.create("Survivor", "");

    let report = vault.json(&["delete", &id, "--permanent"]);
    assert!(report["trashed"].is_null());
    assert_eq!(report["remaining"], 1);

    assert_eq!(vault.note_files().len(), 1);
    assert_eq!(fs::read_dir(vault.path().join("trash")).unwrap().count(), 0);
}

// ============================================================================
// Links
// ============================================================================

#[test]
fn test_backlinks_and_resolve() {
    let vault = TestVault::new();
    let target = vault.create("Target Note", "");
    let by_title = vault.create("Source", "intro\nsee [[target]] here");
    let by_id = vault.create("Other", &format!("[[#{}]]", target));

    let backlinks = vault.json(&["backlinks", &target]);
    let mut ids: Vec<&str> = backlinks
        .as_array()
        .unwrap()
        .iter()
        .map(|b| b["id"].as_str().unwrap())
        .collect();
    ids.sort();
    let mut expected = vec![by_title.as_str(), by_id.as_str()];
    expected.sort();
    assert_eq!(ids, expected);

    let source = backlinks
        .as_array()
        .unwrap()
        .iter()
        .find(|b| b["id"] == by_title.as_str())
        .unwrap();
    assert_eq!(source["context"], "see [[target]] here");

    let resolved = vault.json(&["resolve", "note"]);
    assert_eq!(resolved.as_array().unwrap().len(), 1);

    vault
        .cmd()
        .args(["resolve", "o"])
        .assert()
        .success()
        .stdout(predicate::str::contains("is ambiguous (3 notes)"));
}

#[test]
fn test_graph() {
    let vault = TestVault::new();
    let hub = vault.create("Hub", "[[Spoke]] and [[Missing]]");
    let spoke = vault.create("Spoke", "");
    let fan = vault.create("Fan", "[[Hub]]");

    let graph = vault.json(&["graph", &hub]);
    let neighbors: Vec<&str> = graph["neighbors"]
        .as_array()
        .unwrap()
        .iter()
        .map(|n| n["id"].as_str().unwrap())
        .collect();
    assert_eq!(neighbors, vec![fan.as_str(), spoke.as_str()]);
    assert_eq!(graph["links"][1]["target"], "Missing");
    assert!(graph["links"][1]["resolved"].as_array().unwrap().is_empty());
}

// ============================================================================
// Import / export
// ============================================================================

#[test]
fn test_import_plain_markdown() {
    let vault = TestVault::new();
    let source = tempdir().unwrap();
    fs::write(source.path().join("idea.md"), "# Big Idea\n\nSome #thought here").unwrap();
    fs::write(source.path().join("scratch.md"), "no heading").unwrap();

    let report = vault.json(&["import", source.path().to_str().unwrap()]);
    assert_eq!(report["imported"].as_array().unwrap().len(), 2);

    let listed = vault.json(&["list", "--tag", "thought"]);
    assert_eq!(listed[0]["title"], "Big Idea");
    assert_eq!(vault.json(&["list", "--search", "heading"])[0]["title"], "scratch");
}

#[test]
fn test_export_writes_encoded_notes() {
    let vault = TestVault::new();
    let id = vault.create("Exported", "body text");
    let out = tempdir().unwrap();

    let report = vault.json(&["export", out.path().to_str().unwrap()]);
    assert_eq!(report["written"].as_array().unwrap().len(), 1);

    let exported = fs::read_to_string(out.path().join(format!("{} exported.md", id))).unwrap();
    let original = fs::read_to_string(vault.notes_dir().join(format!("{} exported.md", id))).unwrap();
    assert_eq!(exported, original);
}
