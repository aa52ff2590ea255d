//! Configuration types for the rename traversal

/// Configuration for rename behavior.
#[derive(Debug, Clone, Default)]
pub struct RenamerConfig {
    /// Skip entries whose names are already normalized.
    /// When false (the default), such entries are still renamed in place
    /// and reported, so every visited entry produces a log line.
    pub skip_unchanged: bool,
}
