//! `hypenote edit` - change a note's body or tags

use tracing::debug;

use super::dispatch::CommandContext;
use super::helpers::{find_note, note_json, print_json};
use crate::cli::{EditArgs, OutputFormat};
use hypenote_core::error::{HypenoteError, Result};
use hypenote_core::note::Note;

fn apply_edits(note: &mut Note, args: &EditArgs) {
    if let Some(body) = &args.body {
        note.body = body.clone();
    }

    if let Some(line) = &args.append {
        if !note.body.is_empty() && !note.body.ends_with('\n') {
            note.body.push('\n');
        }
        note.body.push_str(line);
    }

    if !args.tag.is_empty() {
        note.tags = args.tag.clone();
    }
    for tag in &args.add_tag {
        if !note.tags.contains(tag) {
            note.tags.push(tag.clone());
        }
    }
    note.tags.retain(|t| !args.remove_tag.contains(t));
}

pub fn execute(ctx: &CommandContext, args: &EditArgs) -> Result<()> {
    if args.body.is_none() && args.append.is_none() && !args.changes_tags() {
        return Err(HypenoteError::UsageError(
            "nothing to edit (use --body, --append, --tag, --add-tag or --remove-tag)".to_string(),
        ));
    }

    let (store, mut index) = ctx.open_vault()?;
    let original = find_note(&index, &args.note)?.clone();

    let mut note = original.clone();
    apply_edits(&mut note, args);

    if note == original {
        debug!(note_id = note.id(), "Edit left note unchanged");
    } else {
        note.touch();
        store.save(&note)?;
        index.update(note.clone());
        debug!(
            note_id = note.id(),
            position = ?index.notes().iter().position(|n| n.id() == note.id()),
            "Reindexed edited note"
        );
    }

    match ctx.cli.format {
        OutputFormat::Json => print_json(&note_json(&note)),
        OutputFormat::Human => {
            if !ctx.cli.quiet {
                println!("Updated {}", note.id());
            }
            Ok(())
        }
    }
}
