//! Recursive rename traversal
//!
//! This module walks a directory tree depth-first and renames every
//! non-hidden entry to its normalized form. Directories are renamed before
//! their contents are visited, so recursion always operates on the
//! post-rename path.

mod config;
mod event;
mod walker;

pub use config::RenamerConfig;
pub use event::{EntryKind, RenameEvent, RenameSummary};
pub use walker::Renamer;
