//! `hypenote import` - import a folder of markdown files

use std::collections::HashSet;
use std::path::Path;

use serde_json::json;

use super::dispatch::CommandContext;
use super::helpers::print_json;
use crate::cli::OutputFormat;
use hypenote_core::error::Result;
use hypenote_core::transfer::import_dir;

pub fn execute(ctx: &CommandContext, dir: &Path) -> Result<()> {
    let (store, mut index) = ctx.open_vault()?;

    let mut taken: HashSet<String> = index.notes().iter().map(|n| n.id().to_string()).collect();
    let report = import_dir(&store, dir, &mut taken)?;

    let imported: Vec<String> = report.imported.iter().map(|n| n.id().to_string()).collect();
    for note in report.imported {
        index.add(note);
    }

    match ctx.cli.format {
        OutputFormat::Json => print_json(&json!({
            "imported": imported,
            "failures": report.failures,
            "total": index.len(),
        })),
        OutputFormat::Human => {
            if !ctx.cli.quiet {
                println!(
                    "Imported {} note(s), {} in vault",
                    imported.len(),
                    index.len()
                );
            }
            for failure in &report.failures {
                eprintln!("warning: {}: {}", failure.path.display(), failure.reason);
            }
            Ok(())
        }
    }
}
