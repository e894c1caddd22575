//! `hypenote rename` - retitle a note and update links to it
//!
//! The file is moved to the new filename before the new content is saved,
//! so the vault never holds two files for the same note.

use serde_json::json;
use tracing::warn;

use super::dispatch::CommandContext;
use super::helpers::{find_note, print_json};
use crate::cli::OutputFormat;
use hypenote_core::error::Result;

pub fn execute(ctx: &CommandContext, query: &str, new_title: &str) -> Result<()> {
    let (store, mut index) = ctx.open_vault()?;

    let mut note = find_note(&index, query)?.clone();
    let old_title = note.title.clone();
    let old_filename = note.filename();

    note.title = new_title.to_string();
    note.touch();

    store.rename(&note, &old_filename)?;
    store.save(&note)?;

    let report = index.update_wikilinks(&store, &old_title, new_title, note.id());
    index.update(note.clone());

    for failure in &report.failures {
        warn!(note_id = %failure.id, reason = %failure.reason, "Link not rewritten");
    }

    match ctx.cli.format {
        OutputFormat::Json => print_json(&json!({
            "id": note.id(),
            "oldTitle": old_title,
            "title": note.title(),
            "filename": note.filename(),
            "rewritten": report.updated,
            "failures": report.failures,
        })),
        OutputFormat::Human => {
            if !ctx.cli.quiet {
                println!(
                    "Renamed {} to \"{}\" ({} linking note(s) updated)",
                    note.id(),
                    note.display_title(),
                    report.updated.len()
                );
            }
            for failure in &report.failures {
                eprintln!("warning: could not update {}: {}", failure.id, failure.reason);
            }
            Ok(())
        }
    }
}
