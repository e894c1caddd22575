//! `hypenote list` - list notes, most recently updated first

use serde_json::Value;

use super::dispatch::CommandContext;
use super::helpers::{note_line, note_summary_json, print_json};
use crate::cli::OutputFormat;
use hypenote_core::error::Result;
use hypenote_core::query::NoteFilter;

pub fn execute(ctx: &CommandContext, tags: &[String], search: Option<&str>) -> Result<()> {
    let (_store, mut index) = ctx.open_vault()?;

    let mut filter = NoteFilter::new().with_tags(tags.iter().cloned());
    if let Some(text) = search {
        filter = filter.with_search(text);
    }
    index.set_filter(filter);

    let notes = index.filtered_notes();

    match ctx.cli.format {
        OutputFormat::Json => print_json(&Value::Array(
            notes.iter().map(|n| note_summary_json(n)).collect(),
        )),
        OutputFormat::Human => {
            if notes.is_empty() && !ctx.cli.quiet {
                println!("No notes found");
            }
            for note in notes {
                println!("{}", note_line(note));
            }
            Ok(())
        }
    }
}
