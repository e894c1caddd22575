//! Global configuration for hypenote (stored in ~/.config/hypenote/config.toml)
//!
//! Remembers which vault the user picked so later runs can find it.

use std::fs;
use std::path::PathBuf;

use crate::error::{HypenoteError, Result};

const CONFIG_DIR: &str = "hypenote";
const CONFIG_FILE: &str = "config.toml";
const CONFIG_DIR_ENV_VAR: &str = "HYPENOTE_CONFIG_DIR";

#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize, Default)]
pub struct GlobalConfig {
    /// Last vault selected by the user
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vault_path: Option<PathBuf>,
}

impl GlobalConfig {
    fn config_path() -> Result<PathBuf> {
        let config_dir = if let Ok(env_dir) = std::env::var(CONFIG_DIR_ENV_VAR) {
            PathBuf::from(env_dir)
        } else {
            dirs::config_dir()
                .ok_or_else(|| {
                    HypenoteError::Other("unable to determine config directory".to_string())
                })?
                .join(CONFIG_DIR)
        };

        Ok(config_dir.join(CONFIG_FILE))
    }

    pub fn load() -> Result<Self> {
        let path = Self::config_path()?;

        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&path)
            .map_err(|e| HypenoteError::io_operation("read global config", path.display(), e))?;

        Ok(toml::from_str(&content)?)
    }

    pub fn save(&self) -> Result<()> {
        let path = Self::config_path()?;
        let config_dir = path
            .parent()
            .ok_or_else(|| HypenoteError::Other("invalid config path".to_string()))?;

        fs::create_dir_all(config_dir).map_err(|e| {
            HypenoteError::io_operation("create config directory", config_dir.display(), e)
        })?;

        let content = toml::to_string_pretty(self)?;

        fs::write(&path, content)
            .map_err(|e| HypenoteError::io_operation("write global config", path.display(), e))?;

        Ok(())
    }

    /// The remembered vault, or `StorageUnavailable` if none was ever chosen
    pub fn require_vault(&self) -> Result<PathBuf> {
        self.vault_path.clone().ok_or_else(|| {
            HypenoteError::storage_unavailable(
                None::<PathBuf>,
                "no vault selected (run `hypenote init <path>` or pass --vault)",
            )
        })
    }
}
