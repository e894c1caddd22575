//! `hypenote resolve` - what a wikilink target points at

use serde_json::Value;

use super::dispatch::CommandContext;
use super::helpers::{note_line, note_summary_json, print_json};
use crate::cli::OutputFormat;
use hypenote_core::error::Result;

pub fn execute(ctx: &CommandContext, target: &str) -> Result<()> {
    let (_store, index) = ctx.open_vault()?;
    let matches = index.find_notes(target);

    match ctx.cli.format {
        OutputFormat::Json => print_json(&Value::Array(
            matches.iter().map(|n| note_summary_json(n)).collect(),
        )),
        OutputFormat::Human => {
            match matches.len() {
                0 => println!("[[{}]] does not resolve to any note", target),
                1 => {}
                n => println!("[[{}]] is ambiguous ({} notes):", target, n),
            }
            for note in matches {
                println!("{}", note_line(note));
            }
            Ok(())
        }
    }
}
