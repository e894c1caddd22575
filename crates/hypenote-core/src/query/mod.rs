//! Query helpers over the note collection

pub mod filter;

pub use filter::NoteFilter;
