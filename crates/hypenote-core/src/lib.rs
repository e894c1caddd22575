//! Hypenote Core Library
//!
//! Local-first notes stored as markdown files with a small metadata header,
//! plus an in-memory index for lookup, filtering and wikilink backlinks.
//!
//! The caller pairs [`store::Store`] and [`index::NoteIndex`] calls per
//! logical operation: persist first, then update the index only if the
//! store call succeeded.

pub mod config;
pub mod error;
pub mod id;
pub mod index;
pub mod logging;
pub mod note;
pub mod query;
pub mod store;
pub mod transfer;

pub use error::{HypenoteError, Result};
pub use index::NoteIndex;
pub use note::Note;
pub use store::Store;
