//! `hypenote show` - print a note

use serde_json::json;

use super::dispatch::CommandContext;
use super::helpers::{find_note, note_json, print_json};
use crate::cli::OutputFormat;
use hypenote_core::error::Result;
use hypenote_core::note::frontmatter::format_timestamp;

pub fn execute(ctx: &CommandContext, query: &str) -> Result<()> {
    let (store, index) = ctx.open_vault()?;
    let note = find_note(&index, query)?;

    let backlinks: Vec<&str> = index.get_backlinks(note.id()).iter().map(|n| n.id()).collect();

    match ctx.cli.format {
        OutputFormat::Json => {
            let mut value = note_json(note);
            value["path"] = json!(store.note_path(note));
            value["backlinks"] = json!(backlinks);
            print_json(&value)
        }
        OutputFormat::Human => {
            println!("# {}", note.display_title());
            println!();
            println!("id:       {}", note.id());
            if !note.tags.is_empty() {
                println!("tags:     {}", note.tags.join(", "));
            }
            println!("created:  {}", format_timestamp(&note.created_at));
            println!("updated:  {}", format_timestamp(&note.updated_at));
            if !backlinks.is_empty() {
                println!("linked from: {}", backlinks.join(", "));
            }
            println!();
            println!("{}", note.body);
            Ok(())
        }
    }
}
