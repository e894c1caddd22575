//! `hypenote graph` - a note's direct neighbourhood

use serde_json::json;

use super::dispatch::CommandContext;
use super::helpers::{find_note, note_line, note_summary_json, print_json};
use crate::cli::OutputFormat;
use hypenote_core::error::{HypenoteError, Result};

pub fn execute(ctx: &CommandContext, query: &str) -> Result<()> {
    let (_store, index) = ctx.open_vault()?;
    let id = find_note(&index, query)?.id().to_string();

    let graph = index
        .local_graph(&id)
        .ok_or_else(|| HypenoteError::NoteNotFound { id: id.clone() })?;
    let outgoing = index.outgoing_links(graph.center);

    match ctx.cli.format {
        OutputFormat::Json => print_json(&json!({
            "center": note_summary_json(graph.center),
            "neighbors": graph.neighbors.iter().map(|n| note_summary_json(n)).collect::<Vec<_>>(),
            "links": outgoing
                .iter()
                .map(|link| json!({
                    "target": link.target,
                    "resolved": link.notes.iter().map(|n| n.id()).collect::<Vec<_>>(),
                }))
                .collect::<Vec<_>>(),
        })),
        OutputFormat::Human => {
            println!("{}", note_line(graph.center));
            for neighbor in &graph.neighbors {
                println!("  - {}", note_line(neighbor));
            }
            for link in outgoing.iter().filter(|l| !l.is_resolved()) {
                println!("  ? [[{}]] (unresolved)", link.target);
            }
            Ok(())
        }
    }
}
