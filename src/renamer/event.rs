//! Rename events and run summary

use serde::Serialize;

/// Kind of filesystem entry a rename applied to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum EntryKind {
    Directory,
    File,
}

impl EntryKind {
    /// Label used in log lines: `directory` or `file`.
    pub fn label(&self) -> &'static str {
        match self {
            EntryKind::Directory => "directory",
            EntryKind::File => "file",
        }
    }
}

/// A single performed rename, reported to the sink as it happens.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RenameEvent {
    pub kind: EntryKind,
    pub old_name: String,
    pub new_name: String,
}

/// Counts for a completed traversal.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct RenameSummary {
    /// Directories renamed.
    pub directories: usize,
    /// Files (and symlinks) renamed.
    pub files: usize,
    /// Entries left alone because their name was already normalized.
    /// Always zero unless `skip_unchanged` is set.
    pub unchanged: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_labels() {
        assert_eq!(EntryKind::Directory.label(), "directory");
        assert_eq!(EntryKind::File.label(), "file");
    }

    #[test]
    fn test_kind_serializes_lowercase() {
        assert_eq!(
            serde_json::to_string(&EntryKind::Directory).unwrap(),
            "\"directory\""
        );
        assert_eq!(serde_json::to_string(&EntryKind::File).unwrap(), "\"file\"");
    }

    #[test]
    fn test_event_serializes_names() {
        let event = RenameEvent {
            kind: EntryKind::File,
            old_name: "My File".to_string(),
            new_name: "my_file".to_string(),
        };
        let json = serde_json::to_string(&event).unwrap();
        assert!(json.contains("\"old_name\":\"My File\""));
        assert!(json.contains("\"new_name\":\"my_file\""));
    }
}
