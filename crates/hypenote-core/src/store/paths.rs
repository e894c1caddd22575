use std::path::PathBuf;

/// Vault subdirectory holding live notes
pub const NOTES_DIR: &str = "notes";

/// Vault subdirectory receiving deleted notes
pub const TRASH_DIR: &str = "trash";

/// Vault subdirectory for note templates
pub const TEMPLATES_DIR: &str = "templates";

/// Directory name of the vault created when none is chosen
pub const DEFAULT_VAULT_DIR: &str = "hypenote-vault";

/// Configuration filename
pub const CONFIG_FILE: &str = "config.toml";

/// Suffix appended to a note filename while it is being written
pub const TEMP_SUFFIX: &str = ".tmp";

/// Vault location used when none is given: `<data dir>/hypenote-vault`
pub fn default_vault_path() -> Option<PathBuf> {
    dirs::data_dir().map(|dir| dir.join(DEFAULT_VAULT_DIR))
}
