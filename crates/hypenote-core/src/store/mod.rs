//! Note store for hypenote
//!
//! A vault is a directory holding one markdown file per note:
//!
//! ```text
//! <vault>/
//!   config.toml
//!   notes/<id> <slug>.md
//!   trash/<id> <slug>.md
//!   templates/
//! ```
//!
//! Every operation re-creates the directory tree if it went missing.

pub(crate) mod io;
mod notes;
pub mod paths;

use std::path::{Path, PathBuf};

use crate::config::VaultConfig;
use crate::error::Result;
pub use notes::{LoadReport, SkippedFile};
pub use paths::{default_vault_path, CONFIG_FILE, NOTES_DIR, TEMPLATES_DIR, TRASH_DIR};

/// The on-disk note store
#[derive(Debug, Clone)]
pub struct Store {
    /// Root path of the vault
    root: PathBuf,
    /// Vault configuration
    config: VaultConfig,
}

impl Store {
    /// Open the vault at `root`, creating its directories if needed
    #[tracing::instrument(skip(root), fields(root = %root.display()))]
    pub fn open(root: &Path) -> Result<Self> {
        let store = Store {
            root: root.to_path_buf(),
            config: VaultConfig::default(),
        };
        store.ensure_layout()?;

        let config = VaultConfig::load_or_default(&store.config_path())?;
        Ok(Store { config, ..store })
    }

    /// Initialize a vault at `root`, writing a default config if none exists
    #[tracing::instrument(skip(root), fields(root = %root.display()))]
    pub fn init(root: &Path) -> Result<Self> {
        let store = Self::open(root)?;

        // Avoid rewriting an existing config on repeated init
        if !store.config_path().exists() {
            store.config.save(&store.config_path())?;
            tracing::info!(root = %root.display(), "Initialized vault");
        }

        Ok(store)
    }

    /// Get the vault root
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Get the notes directory
    pub fn notes_dir(&self) -> PathBuf {
        self.root.join(NOTES_DIR)
    }

    /// Get the trash directory
    pub fn trash_dir(&self) -> PathBuf {
        self.root.join(TRASH_DIR)
    }

    /// Get the templates directory
    pub fn templates_dir(&self) -> PathBuf {
        self.root.join(TEMPLATES_DIR)
    }

    /// Get the config file path
    pub fn config_path(&self) -> PathBuf {
        self.root.join(CONFIG_FILE)
    }

    /// Get the vault configuration
    pub fn config(&self) -> &VaultConfig {
        &self.config
    }

    fn ensure_layout(&self) -> Result<()> {
        io::ensure_dir(&self.root)?;
        io::ensure_dir(&self.notes_dir())?;
        io::ensure_dir(&self.trash_dir())?;
        io::ensure_dir(&self.templates_dir())
    }
}
