//! Shared test utilities for the tune-gal test suite.
//!
//! Two kinds of helpers: tree builders that lay files out under a
//! `tempfile::TempDir` for walker/pipeline tests, and in-memory asset
//! builders for assembler tests that never touch the filesystem.

use crate::classify;
use crate::walk::MediaAsset;
use chrono::{Local, TimeZone};
use std::path::{Path, PathBuf};

/// Create `rel` (and its parent directories) under `root` with a few
/// placeholder bytes. Returns the full path.
pub fn write_file(root: &Path, rel: &str) -> PathBuf {
    let path = root.join(rel);
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .unwrap_or_else(|e| panic!("cannot create {}: {e}", parent.display()));
    }
    std::fs::write(&path, b"data").unwrap_or_else(|e| panic!("cannot write {}: {e}", path.display()));
    path
}

/// An in-memory [`MediaAsset`] with a fixed timestamp, classified from
/// the path's extension. Panics on an unclassifiable extension so a typo
/// in a test fixture fails loudly.
pub fn media_asset(path: &Path, size: u64) -> MediaAsset {
    let kind = classify::classify(path);
    assert_ne!(
        kind,
        classify::MediaKind::Other,
        "test asset {} has no media extension",
        path.display()
    );
    MediaAsset {
        path: path.to_path_buf(),
        kind,
        size,
        created: Local.with_ymd_and_hms(2024, 1, 2, 3, 4, 5).unwrap(),
    }
}
