//! Vault configuration for hypenote
//!
//! Configuration is stored in `<vault>/config.toml`. Every field is optional;
//! a missing file means defaults.

pub mod global;
pub mod types;

use std::fs;
use std::path::Path;
use std::time::Duration;

use crate::error::Result;

pub use global::GlobalConfig;
pub use types::{VaultConfig, DEFAULT_DEBOUNCE_MS, DEFAULT_TITLE, VAULT_FORMAT_VERSION};

impl VaultConfig {
    /// Delay applied to index updates while a note is being actively edited
    pub fn debounce_delay(&self) -> Duration {
        Duration::from_millis(self.debounce_ms)
    }

    /// Load configuration from a file, falling back to defaults if it is absent
    pub fn load_or_default(path: &Path) -> Result<Self> {
        if path.exists() {
            Self::load(path)
        } else {
            Ok(Self::default())
        }
    }

    /// Load configuration from a file
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        let config: VaultConfig = toml::from_str(&content)?;
        Ok(config)
    }

    /// Save configuration to a file
    pub fn save(&self, path: &Path) -> Result<()> {
        let content = toml::to_string_pretty(self)?;
        fs::write(path, content)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_default_config() {
        let config = VaultConfig::default();
        assert_eq!(config.version, VAULT_FORMAT_VERSION);
        assert_eq!(config.debounce_ms, DEFAULT_DEBOUNCE_MS);
        assert_eq!(config.debounce_delay(), Duration::from_secs(1));
        assert_eq!(config.default_title, DEFAULT_TITLE);
    }

    #[test]
    fn test_save_and_load() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.toml");

        let config = VaultConfig {
            debounce_ms: 250,
            ..Default::default()
        };
        config.save(&path).unwrap();

        let loaded = VaultConfig::load(&path).unwrap();
        assert_eq!(loaded.debounce_ms, 250);
        assert_eq!(loaded.default_title, DEFAULT_TITLE);
    }

    #[test]
    fn test_partial_file_uses_defaults() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "default_title = \"Scratch\"\n").unwrap();

        let loaded = VaultConfig::load(&path).unwrap();
        assert_eq!(loaded.default_title, "Scratch");
        assert_eq!(loaded.debounce_ms, DEFAULT_DEBOUNCE_MS);
        assert_eq!(loaded.version, VAULT_FORMAT_VERSION);
    }

    #[test]
    fn test_missing_file_is_default() {
        let dir = tempdir().unwrap();
        let loaded = VaultConfig::load_or_default(&dir.path().join("config.toml")).unwrap();
        assert_eq!(loaded.debounce_ms, DEFAULT_DEBOUNCE_MS);
    }

    #[test]
    fn test_malformed_file_is_error() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "debounce_ms = \"soon\"\n").unwrap();

        assert!(VaultConfig::load(&path).is_err());
    }
}
