//! `hypenote backlinks` - notes linking to a note

use serde_json::{json, Value};

use super::dispatch::CommandContext;
use super::helpers::{find_note, note_line, print_json};
use crate::cli::OutputFormat;
use hypenote_core::error::Result;
use hypenote_core::index::links::link_context;

pub fn execute(ctx: &CommandContext, query: &str) -> Result<()> {
    let (_store, index) = ctx.open_vault()?;
    let target = find_note(&index, query)?;
    let backlinks = index.get_backlinks(target.id());

    match ctx.cli.format {
        OutputFormat::Json => print_json(&Value::Array(
            backlinks
                .iter()
                .map(|source| {
                    json!({
                        "id": source.id(),
                        "title": source.title(),
                        "context": link_context(&source.body, target),
                    })
                })
                .collect(),
        )),
        OutputFormat::Human => {
            if backlinks.is_empty() && !ctx.cli.quiet {
                println!("No notes link to {}", target.display_title());
            }
            for source in backlinks {
                println!("{}", note_line(source));
                if let Some(context) = link_context(&source.body, target) {
                    println!("    {}", context);
                }
            }
            Ok(())
        }
    }
}
