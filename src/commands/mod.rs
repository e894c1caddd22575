//! Command implementations for hypenote
//!
//! Every mutating command persists through the store first and only touches
//! the index once the store call has succeeded.

pub mod backlinks;
pub mod create;
pub mod delete;
pub mod dispatch;
pub mod edit;
pub mod export;
pub mod graph;
pub mod helpers;
pub mod import;
pub mod init;
pub mod list;
pub mod rename;
pub mod resolve;
pub mod show;
pub mod tags;
