//! `hypenote delete` - move a note to the trash, or remove it for good

use serde_json::json;

use super::dispatch::CommandContext;
use super::helpers::{find_note, print_json};
use crate::cli::OutputFormat;
use hypenote_core::error::Result;

pub fn execute(ctx: &CommandContext, query: &str, permanent: bool) -> Result<()> {
    let (store, mut index) = ctx.open_vault()?;
    let note = find_note(&index, query)?.clone();

    if permanent {
        store.delete_permanently(&note)?;
    } else {
        store.delete(&note)?;
    }
    index.remove(note.id());

    match ctx.cli.format {
        OutputFormat::Json => print_json(&json!({
            "id": note.id(),
            "trashed": (!permanent).then(|| store.trash_dir().join(note.filename())),
            "remaining": index.len(),
        })),
        OutputFormat::Human => {
            if !ctx.cli.quiet {
                let action = if permanent { "Deleted" } else { "Moved to trash:" };
                println!("{} {} ({} note(s) left)", action, note.id(), index.len());
            }
            Ok(())
        }
    }
}
