//! `hypenote create` - create a new note

use std::collections::HashSet;

use tracing::debug;

use super::dispatch::CommandContext;
use super::helpers::{note_json, print_json};
use crate::cli::{CreateArgs, OutputFormat};
use hypenote_core::error::Result;
use hypenote_core::id::next_free_id;
use hypenote_core::note::Note;

pub fn execute(ctx: &CommandContext, args: &CreateArgs) -> Result<()> {
    let (store, mut index) = ctx.open_vault()?;

    let title = args
        .title
        .clone()
        .unwrap_or_else(|| store.config().default_title.clone());
    let taken: HashSet<String> = index.notes().iter().map(|n| n.id().to_string()).collect();

    let note = Note::with_id(
        next_free_id(&taken),
        title,
        args.tag.clone(),
        args.body.clone().unwrap_or_default(),
    );

    let path = store.save(&note)?;
    debug!(note_id = note.id(), path = %path.display(), "create_note");

    let output = match ctx.cli.format {
        OutputFormat::Json => Some(note_json(&note)),
        OutputFormat::Human => None,
    };
    index.add(note);
    debug!(total = index.len(), "Indexed new note");

    match output {
        Some(value) => print_json(&value),
        None => {
            println!("{}", path.display());
            Ok(())
        }
    }
}
