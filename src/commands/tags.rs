//! `hypenote tags` - note counts per tag

use serde_json::{json, Value};

use super::dispatch::CommandContext;
use super::helpers::print_json;
use crate::cli::OutputFormat;
use hypenote_core::error::Result;

pub fn execute(ctx: &CommandContext, search: Option<&str>) -> Result<()> {
    let (_store, mut index) = ctx.open_vault()?;
    if let Some(text) = search {
        index.set_search_text(text);
    }

    let counts = index.tag_counts();

    match ctx.cli.format {
        OutputFormat::Json => print_json(&Value::Array(
            counts
                .iter()
                .map(|(tag, count)| json!({ "tag": tag, "count": count }))
                .collect(),
        )),
        OutputFormat::Human => {
            for (tag, count) in counts {
                println!("{} ({})", tag, count);
            }
            Ok(())
        }
    }
}
