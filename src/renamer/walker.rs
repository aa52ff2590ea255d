//! Renamer - depth-first rename traversal over the filesystem

use std::fs;
use std::io;
use std::path::Path;

use crate::normalize::{is_hidden, normalize_name};
use crate::output::RenameSink;

use super::config::RenamerConfig;
use super::event::{EntryKind, RenameEvent, RenameSummary};

/// Walks a directory tree and renames every non-hidden entry in place.
///
/// Entries within each directory are visited in name order so that log
/// output is deterministic across platforms. Hidden entries and entries
/// whose names are not valid UTF-8 are left untouched and not descended
/// into. Symlinks are renamed like files but never followed.
pub struct Renamer {
    config: RenamerConfig,
}

impl Renamer {
    pub fn new(config: RenamerConfig) -> Self {
        Self { config }
    }

    /// Normalize every entry under `root`, reporting each rename to `sink`.
    ///
    /// The root itself is not renamed. The first filesystem error aborts
    /// the remaining traversal; entries already visited stay renamed.
    pub fn process<S: RenameSink>(&self, root: &Path, sink: &mut S) -> io::Result<RenameSummary> {
        let mut summary = RenameSummary::default();
        self.process_dir(root, sink, &mut summary)?;
        Ok(summary)
    }

    fn process_dir<S: RenameSink>(
        &self,
        dir: &Path,
        sink: &mut S,
        summary: &mut RenameSummary,
    ) -> io::Result<()> {
        let mut entries: Vec<_> = fs::read_dir(dir)?.collect::<io::Result<_>>()?;
        entries.sort_by_key(|e| e.file_name());

        for entry in entries {
            let file_name = entry.file_name();
            let Some(name) = file_name.to_str() else {
                // The transform is only defined on UTF-8 names; renaming
                // through a lossy conversion would corrupt the name.
                continue;
            };
            if is_hidden(name) {
                continue;
            }

            let file_type = entry.file_type()?;
            let is_dir = file_type.is_dir();
            let kind = if is_dir {
                EntryKind::Directory
            } else {
                EntryKind::File
            };

            let new_name = normalize_name(name);
            let old_path = entry.path();
            let new_path = dir.join(&new_name);

            if self.config.skip_unchanged && new_name == name {
                summary.unchanged += 1;
                if is_dir {
                    self.process_dir(&old_path, sink, summary)?;
                }
                continue;
            }

            if new_name != name
                && new_path.symlink_metadata().is_ok()
                && !same_entry(&old_path, &new_path)
            {
                return Err(io::Error::new(
                    io::ErrorKind::AlreadyExists,
                    format!("cannot rename '{name}' to '{new_name}': target already exists"),
                ));
            }

            fs::rename(&old_path, &new_path)?;
            match kind {
                EntryKind::Directory => summary.directories += 1,
                EntryKind::File => summary.files += 1,
            }
            sink.record(&RenameEvent {
                kind,
                old_name: name.to_string(),
                new_name: new_name.clone(),
            })?;

            // Symlinks to directories are not followed; descending through
            // one could loop or walk outside the root.
            if is_dir {
                self.process_dir(&new_path, sink, summary)?;
            }
        }

        Ok(())
    }
}

/// Whether two paths name the same filesystem entry, without following
/// symlinks. On case-insensitive filesystems the normalized target path can
/// report the source entry itself; that must not count as a collision,
/// while a distinct sibling (including a symlink to the same target, or a
/// broken symlink) must.
#[cfg(unix)]
fn same_entry(a: &Path, b: &Path) -> bool {
    use std::os::unix::fs::MetadataExt;

    match (fs::symlink_metadata(a), fs::symlink_metadata(b)) {
        (Ok(ma), Ok(mb)) => ma.dev() == mb.dev() && ma.ino() == mb.ino(),
        _ => false,
    }
}

/// Without inode identity the target can only be the source itself when the
/// two names differ solely by case; any other existing target is a distinct
/// entry.
#[cfg(not(unix))]
fn same_entry(a: &Path, b: &Path) -> bool {
    let lower = |p: &Path| {
        p.file_name()
            .and_then(|n| n.to_str())
            .map(|n| n.to_lowercase())
    };
    lower(a).is_some() && lower(a) == lower(b)
}
