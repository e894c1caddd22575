use std::path::{Path, PathBuf};

use assert_cmd::{cargo::cargo_bin_cmd, Command};
use serde_json::Value;
use tempfile::TempDir;

/// A bare `hypenote` command isolated from the user's environment
#[allow(dead_code)]
pub fn hypenote(config_dir: &Path) -> Command {
    let mut cmd = cargo_bin_cmd!("hypenote");
    cmd.env("HYPENOTE_CONFIG_DIR", config_dir)
        .env_remove("HYPENOTE_VAULT")
        .env_remove("HYPENOTE_LOG")
        .env_remove("RUST_LOG");
    cmd
}

/// Temporary vault plus a private global config directory
pub struct TestVault {
    config: TempDir,
    dir: TempDir,
}

#[allow(dead_code)]
impl TestVault {
    pub fn new() -> Self {
        let vault = TestVault {
            config: TempDir::new().unwrap(),
            dir: TempDir::new().unwrap(),
        };
        vault.cmd().arg("init").assert().success();
        vault
    }

    pub fn path(&self) -> PathBuf {
        self.dir.path().join("vault")
    }

    pub fn notes_dir(&self) -> PathBuf {
        self.path().join("notes")
    }

    pub fn config_dir(&self) -> &Path {
        self.config.path()
    }

    /// `hypenote --vault <vault>`
    pub fn cmd(&self) -> Command {
        let mut cmd = hypenote(self.config.path());
        cmd.arg("--vault").arg(self.path());
        cmd
    }

    /// Run with `--format json` and parse stdout
    pub fn json(&self, args: &[&str]) -> Value {
        let output = self
            .cmd()
            .args(["--format", "json"])
            .args(args)
            .output()
            .unwrap();
        assert!(
            output.status.success(),
            "{:?} failed: {}",
            args,
            String::from_utf8_lossy(&output.stderr)
        );
        serde_json::from_slice(&output.stdout).unwrap()
    }

    /// Create a note and return its id
    pub fn create(&self, title: &str, body: &str) -> String {
        let value = self.json(&["create", title, "--body", body]);
        value["id"].as_str().unwrap().to_string()
    }

    pub fn note_files(&self) -> Vec<String> {
        let mut names: Vec<String> = std::fs::read_dir(self.notes_dir())
            .unwrap()
            .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
            .collect();
        names.sort();
        names
    }
}
