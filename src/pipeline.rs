//! Build orchestration: one sequential pass over the tree.
//!
//! Traversal, classification and assembly happen in a single
//! deterministic pass, so album order always equals directory-visitation
//! order and an unchanged tree reproduces the same document. Recoverable
//! errors were already handled below this level; the only way
//! [`build_gallery`] fails is an output-write error.

use crate::assemble::{Assembler, GalleryCounts};
use crate::config::GalleryConfig;
use crate::filter::PathFilter;
use crate::render::{self, RenderError};
use crate::report::Reporter;
use crate::walk::walk_tree;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum BuildError {
    #[error(transparent)]
    Render(#[from] RenderError),
}

/// What one run produced.
#[derive(Debug)]
pub struct BuildOutcome {
    /// Path of the written document, or `None` when the walk found
    /// nothing to render and no file was written.
    pub output_path: Option<PathBuf>,
    pub counts: GalleryCounts,
}

/// Run the whole pipeline: walk → assemble → render.
pub fn build_gallery(
    config: &GalleryConfig,
    reporter: &Reporter,
) -> Result<BuildOutcome, BuildError> {
    let filter = PathFilter::new(&config.extra_ignored);
    let mut assembler = Assembler::new(&config.gallery_root, config.include_videos, reporter);

    for bundle in walk_tree(&config.gallery_root, &filter, reporter) {
        assembler.push_bundle(bundle);
    }

    let gallery = assembler.finish();
    if gallery.fragments.is_empty() {
        return Ok(BuildOutcome {
            output_path: None,
            counts: gallery.counts,
        });
    }

    let document = render::render_document(&config.gallery_root, &gallery);
    let output_path = config.output_path();
    render::write_document(&output_path, document)?;

    Ok(BuildOutcome {
        output_path: Some(output_path),
        counts: gallery.counts,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_helpers::write_file;
    use tempfile::TempDir;

    fn build(tmp: &TempDir) -> BuildOutcome {
        let config = GalleryConfig::new(tmp.path());
        build_gallery(&config, &Reporter::silent()).unwrap()
    }

    #[test]
    fn empty_tree_writes_nothing() {
        let tmp = TempDir::new().unwrap();
        let outcome = build(&tmp);
        assert!(outcome.output_path.is_none());
        assert!(!tmp.path().join("mu.html").exists());
    }

    #[test]
    fn tree_with_audio_writes_the_document() {
        let tmp = TempDir::new().unwrap();
        write_file(tmp.path(), "Album/01.mp3");

        let outcome = build(&tmp);
        let path = outcome.output_path.unwrap();
        assert_eq!(path, tmp.path().join("mu.html"));
        assert!(path.exists());
        assert_eq!(outcome.counts.albums, 1);
    }

    #[test]
    fn videos_alone_count_only_when_enabled() {
        let tmp = TempDir::new().unwrap();
        write_file(tmp.path(), "Clips/a.mp4");

        let outcome = build(&tmp);
        assert!(outcome.output_path.is_none());

        let mut config = GalleryConfig::new(tmp.path());
        config.include_videos = true;
        let outcome = build_gallery(&config, &Reporter::silent()).unwrap();
        assert!(outcome.output_path.is_some());
        assert_eq!(outcome.counts.videos, 1);
    }

    #[test]
    fn rerun_reproduces_identical_output() {
        let tmp = TempDir::new().unwrap();
        write_file(tmp.path(), "B/02.mp3");
        write_file(tmp.path(), "A/01.mp3");
        write_file(tmp.path(), "A/cover.jpg");

        let config = GalleryConfig::new(tmp.path());
        build_gallery(&config, &Reporter::silent()).unwrap();
        let first = std::fs::read_to_string(tmp.path().join("mu.html")).unwrap();
        build_gallery(&config, &Reporter::silent()).unwrap();
        let second = std::fs::read_to_string(tmp.path().join("mu.html")).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn output_write_failure_is_fatal() {
        let tmp = TempDir::new().unwrap();
        write_file(tmp.path(), "Album/01.mp3");

        let mut config = GalleryConfig::new(tmp.path());
        config.output_file = "no-such-dir/mu.html".to_string();
        let result = build_gallery(&config, &Reporter::silent());
        assert!(matches!(result, Err(BuildError::Render(_))));
    }
}
