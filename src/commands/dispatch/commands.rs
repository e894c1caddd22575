//! Command implementations for all hypenote commands

use crate::cli::Commands;
use crate::commands;
use crate::commands::dispatch::command::{Command, CommandContext};
use hypenote_core::error::Result;

impl Command for Commands {
    fn execute(&self, ctx: &CommandContext) -> Result<()> {
        match self {
            Commands::Init { path } => commands::init::execute(ctx, path.as_deref()),
            Commands::Create(args) => commands::create::execute(ctx, args),
            Commands::List { tag, search } => {
                commands::list::execute(ctx, tag, search.as_deref())
            }
            Commands::Show { note } => commands::show::execute(ctx, note),
            Commands::Edit(args) => commands::edit::execute(ctx, args),
            Commands::Rename { note, title } => commands::rename::execute(ctx, note, title),
            Commands::Delete { note, permanent } => {
                commands::delete::execute(ctx, note, *permanent)
            }
            Commands::Backlinks { note } => commands::backlinks::execute(ctx, note),
            Commands::Resolve { target } => commands::resolve::execute(ctx, target),
            Commands::Tags { search } => commands::tags::execute(ctx, search.as_deref()),
            Commands::Graph { note } => commands::graph::execute(ctx, note),
            Commands::Import { dir } => commands::import::execute(ctx, dir),
            Commands::Export { dir, tag } => commands::export::execute(ctx, dir, tag),
        }
    }
}
