//! `hypenote init` - create a vault and remember it as the default

use std::path::{Path, PathBuf};

use serde_json::json;

use super::dispatch::CommandContext;
use super::helpers::print_json;
use crate::cli::OutputFormat;
use hypenote_core::config::GlobalConfig;
use hypenote_core::error::{HypenoteError, Result};
use hypenote_core::store::{default_vault_path, Store};

pub fn execute(ctx: &CommandContext, path: Option<&Path>) -> Result<()> {
    let target: PathBuf = match path.or(ctx.cli.vault.as_deref()) {
        Some(path) => path.to_path_buf(),
        None => default_vault_path().ok_or_else(|| {
            HypenoteError::storage_unavailable(
                None::<PathBuf>,
                "no data directory for the default vault",
            )
        })?,
    };

    let store = Store::init(&target)?;
    let root = store
        .root()
        .canonicalize()
        .unwrap_or_else(|_| store.root().to_path_buf());

    let mut global = GlobalConfig::load()?;
    global.vault_path = Some(root.clone());
    global.save()?;

    match ctx.cli.format {
        OutputFormat::Json => print_json(&json!({
            "vault": root,
            "notes": store.notes_dir(),
            "debounceMs": store.config().debounce_ms,
        })),
        OutputFormat::Human => {
            if !ctx.cli.quiet {
                println!("Initialized vault at {}", root.display());
            }
            Ok(())
        }
    }
}
