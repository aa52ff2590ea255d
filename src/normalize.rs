//! Name normalization rules.

/// Normalize an entry name: lowercase it, replace spaces with underscores,
/// and strip hyphens.
///
/// The transform is idempotent - normalizing an already-normalized name
/// yields the same name.
///
/// # Example
///
/// ```
/// use flatcase::normalize_name;
///
/// assert_eq!(normalize_name("My-File.TXT"), "myfile.txt");
/// assert_eq!(normalize_name("Hello World"), "hello_world");
/// assert_eq!(normalize_name("already_normal.rs"), "already_normal.rs");
/// ```
pub fn normalize_name(name: &str) -> String {
    name.to_lowercase().replace(' ', "_").replace('-', "")
}

/// Whether an entry name marks a hidden entry (leading `.`).
///
/// Hidden entries are never renamed or descended into.
pub fn is_hidden(name: &str) -> bool {
    name.starts_with('.')
}
