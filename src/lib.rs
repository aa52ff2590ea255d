//! Flatcase - recursively normalize file and directory names

pub mod normalize;
pub mod output;
pub mod renamer;

#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;

pub use normalize::{is_hidden, normalize_name};
pub use output::{ConsoleReporter, JsonReporter, OutputConfig, RenameSink};
pub use renamer::{EntryKind, RenameEvent, RenameSummary, Renamer, RenamerConfig};
