//! Build configuration.
//!
//! One run is fully described by a [`GalleryConfig`]; the CLI in `main`
//! is its only producer, tests construct it directly. There are no config
//! files — the flags are the whole configuration surface.

use std::path::{Path, PathBuf};

/// Default name of the generated document, created inside the gallery root.
pub const DEFAULT_OUTPUT_FILE: &str = "mu.html";

/// Everything the pipeline needs for one run.
#[derive(Debug, Clone)]
pub struct GalleryConfig {
    /// Root of the tree to scan. Absolutized by [`GalleryConfig::new`] so
    /// the path filter always matches against absolute string forms.
    pub gallery_root: PathBuf,
    /// Output filename, relative to the gallery root.
    pub output_file: String,
    /// Render standalone video tiles.
    pub include_videos: bool,
    /// Extra ignore fragments appended to the built-in defaults.
    pub extra_ignored: Vec<String>,
    /// Per-item progress lines instead of the periodic counter.
    pub verbose: bool,
}

impl GalleryConfig {
    /// Build a config with the given root, absolutized against the
    /// current directory, and defaults for everything else.
    pub fn new(gallery_root: &Path) -> Self {
        Self {
            gallery_root: absolutize(gallery_root),
            output_file: DEFAULT_OUTPUT_FILE.to_string(),
            include_videos: false,
            extra_ignored: Vec::new(),
            verbose: false,
        }
    }

    /// Full path of the document this run writes.
    pub fn output_path(&self) -> PathBuf {
        self.gallery_root.join(&self.output_file)
    }
}

fn absolutize(path: &Path) -> PathBuf {
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        std::env::current_dir()
            .map(|cwd| cwd.join(path))
            .unwrap_or_else(|_| path.to_path_buf())
    }
}
