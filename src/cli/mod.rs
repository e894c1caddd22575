//! CLI argument parsing for hypenote
//!
//! Global flags: --vault, --format, --quiet, --verbose, --log-level, --log-json

pub mod args;
pub mod output;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

pub use args::{CreateArgs, EditArgs};
pub use output::OutputFormat;

/// Hypenote - local-first wikilinked notes
#[derive(Parser, Debug)]
#[command(name = "hypenote")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Vault directory (defaults to the last vault passed to `init`)
    #[arg(long, global = true, env = "HYPENOTE_VAULT")]
    pub vault: Option<PathBuf>,

    /// Output format
    #[arg(long, global = true, value_enum, default_value = "human")]
    pub format: OutputFormat,

    /// Suppress non-essential output
    #[arg(long, short, global = true)]
    pub quiet: bool,

    /// Log debug details to stderr
    #[arg(long, short, global = true)]
    pub verbose: bool,

    /// Log level (error, warn, info, debug, trace)
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    /// Write logs as JSON
    #[arg(long, global = true)]
    pub log_json: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Create (or adopt) a vault and remember it
    Init {
        /// Vault directory (defaults to --vault, then the app data directory)
        path: Option<PathBuf>,
    },

    /// Create a new note
    Create(CreateArgs),

    /// List notes, most recently updated first
    List {
        /// Keep notes with any of these tags (repeatable)
        #[arg(long, short)]
        tag: Vec<String>,

        /// Keep notes whose title, body or tags contain this text
        #[arg(long, short)]
        search: Option<String>,
    },

    /// Show a note
    Show {
        /// Note id, `#id`, or title
        note: String,
    },

    /// Change a note's body or tags
    Edit(EditArgs),

    /// Retitle a note and rewrite `[[old title]]` links elsewhere
    Rename {
        /// Note id, `#id`, or title
        note: String,

        /// New title
        title: String,
    },

    /// Move a note to the trash
    Delete {
        /// Note id, `#id`, or title
        note: String,

        /// Remove the file instead of moving it to the trash
        #[arg(long)]
        permanent: bool,
    },

    /// List notes linking to a note
    Backlinks {
        /// Note id, `#id`, or title
        note: String,
    },

    /// Show every note a wikilink target resolves to
    Resolve {
        /// Link text, e.g. `Some Title` or `#20250109140000`
        target: String,
    },

    /// Count notes per tag
    Tags {
        /// Only count notes matching this text
        #[arg(long, short)]
        search: Option<String>,
    },

    /// Show a note's direct neighbourhood
    Graph {
        /// Note id, `#id`, or title
        note: String,
    },

    /// Import every markdown file in a directory
    Import {
        /// Directory holding `.md` files
        dir: PathBuf,
    },

    /// Export notes as markdown files
    Export {
        /// Destination directory
        dir: PathBuf,

        /// Only export notes with any of these tags (repeatable)
        #[arg(long, short)]
        tag: Vec<String>,
    },
}
