//! Command trait and context for dispatching commands

use std::path::PathBuf;
use std::time::Instant;

use tracing::warn;

use crate::cli::Cli;
use hypenote_core::config::GlobalConfig;
use hypenote_core::error::Result;
use hypenote_core::index::NoteIndex;
use hypenote_core::store::Store;

use super::macros::trace_command;

/// Vault location: `--vault` if given, otherwise the remembered one
pub fn resolve_vault_path(cli: &Cli) -> Result<PathBuf> {
    match &cli.vault {
        Some(path) => Ok(path.clone()),
        None => GlobalConfig::load()?.require_vault(),
    }
}

/// Shared context for command execution
pub struct CommandContext<'a> {
    pub cli: &'a Cli,
    pub start: Instant,
}

impl<'a> CommandContext<'a> {
    pub fn new(cli: &'a Cli, start: Instant) -> Self {
        Self { cli, start }
    }

    pub fn open_store(&self) -> Result<Store> {
        let store = Store::open(&resolve_vault_path(self.cli)?)?;
        trace_command!(self.cli, self.start, "open_store");
        Ok(store)
    }

    /// Open the vault and load every note into a fresh index.
    ///
    /// Commands pair each store call with the matching index call, so the
    /// index reflects the vault for the rest of the command.
    pub fn open_vault(&self) -> Result<(Store, NoteIndex)> {
        let store = self.open_store()?;
        let mut index = NoteIndex::for_store(&store);

        for skipped in index.load_notes(&store)? {
            warn!(path = %skipped.path.display(), reason = %skipped.reason, "Skipped file");
        }
        trace_command!(self.cli, self.start, "load_notes");

        Ok((store, index))
    }
}

/// Trait for commands that can be executed
pub trait Command {
    fn execute(&self, ctx: &CommandContext) -> Result<()>;
}

/// No-op command (when no subcommand is provided)
pub struct NoCommand;

impl Command for NoCommand {
    fn execute(&self, _ctx: &CommandContext) -> Result<()> {
        println!("hypenote {}", env!("CARGO_PKG_VERSION"));
        println!();
        println!("Local-first notes linked with [[wikilinks]].");
        println!();
        println!("Run `hypenote --help` for usage information.");
        Ok(())
    }
}
