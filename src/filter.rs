//! Path exclusion by ignore fragments.
//!
//! A path is ignored when any fragment — built-in or user-supplied —
//! appears anywhere in its absolute string form, compared
//! case-insensitively. The rule applies uniformly to directories and
//! files.
//!
//! Because a descendant's absolute path textually contains every ancestor
//! directory name, excluding a directory excludes its whole subtree
//! through the same substring test. The walker additionally prunes
//! descent at an ignored directory, which changes no observable output.

use std::path::Path;

/// Fragments ignored on every run, before any user-supplied extras.
pub const DEFAULT_IGNORED: &[&str] = &[
    ".DS_Store",
    "site-packages",
    "assets/icons",
    "renditions",
    "_thumb",
    ".config",
    ".thumb",
    "/tests/",
    "cache/",
    "/Library/Application/",
];

/// Substring matcher over absolute path strings.
#[derive(Debug, Clone)]
pub struct PathFilter {
    // Lowercased once at construction; matching lowercases the candidate.
    fragments: Vec<String>,
}

impl PathFilter {
    /// Build a filter from the defaults plus `extra` fragments.
    pub fn new(extra: &[String]) -> Self {
        let fragments = DEFAULT_IGNORED
            .iter()
            .map(|f| f.to_lowercase())
            .chain(extra.iter().map(|f| f.to_lowercase()))
            .collect();
        Self { fragments }
    }

    /// True when any fragment is contained in the path's string form.
    ///
    /// Callers pass absolute paths; the gallery root is absolutized once
    /// up front so every candidate seen during the walk already is.
    pub fn is_ignored(&self, path: &Path) -> bool {
        let haystack = path.to_string_lossy().to_lowercase();
        self.fragments.iter().any(|f| haystack.contains(f))
    }
}

impl Default for PathFilter {
    fn default() -> Self {
        Self::new(&[])
    }
}
