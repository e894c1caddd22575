use serde::{Deserialize, Serialize};

/// Current vault format version
pub const VAULT_FORMAT_VERSION: u32 = 1;

/// Default active-edit debounce delay in milliseconds
pub const DEFAULT_DEBOUNCE_MS: u64 = 1000;

/// Title given to notes created without one
pub const DEFAULT_TITLE: &str = "New Note";

/// Vault configuration (`<vault>/config.toml`)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VaultConfig {
    /// Vault format version
    #[serde(default = "default_version")]
    pub version: u32,

    /// Delay before buffered index updates apply while editing
    #[serde(default = "default_debounce_ms")]
    pub debounce_ms: u64,

    /// Title for newly created notes when none is given
    #[serde(default = "default_title")]
    pub default_title: String,
}

fn default_version() -> u32 {
    VAULT_FORMAT_VERSION
}

fn default_debounce_ms() -> u64 {
    DEFAULT_DEBOUNCE_MS
}

fn default_title() -> String {
    DEFAULT_TITLE.to_string()
}

impl Default for VaultConfig {
    fn default() -> Self {
        Self {
            version: default_version(),
            debounce_ms: default_debounce_ms(),
            default_title: default_title(),
        }
    }
}
