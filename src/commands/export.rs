//! `hypenote export` - write notes out as markdown files

use std::path::Path;

use serde_json::json;

use super::dispatch::CommandContext;
use super::helpers::print_json;
use crate::cli::OutputFormat;
use hypenote_core::error::Result;
use hypenote_core::query::NoteFilter;
use hypenote_core::transfer::export_notes;

pub fn execute(ctx: &CommandContext, dir: &Path, tags: &[String]) -> Result<()> {
    let (_store, mut index) = ctx.open_vault()?;
    index.set_filter(NoteFilter::new().with_tags(tags.iter().cloned()));

    let report = export_notes(index.filtered_notes(), dir)?;

    match ctx.cli.format {
        OutputFormat::Json => print_json(&json!(report)),
        OutputFormat::Human => {
            if !ctx.cli.quiet {
                println!("Exported {} note(s) to {}", report.written.len(), dir.display());
            }
            for failure in &report.failures {
                eprintln!("warning: {}: {}", failure.path.display(), failure.reason);
            }
            Ok(())
        }
    }
}
