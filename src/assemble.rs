//! Album assembly: directory bundles → gallery fragments.
//!
//! An [`Assembler`] consumes [`DirBundle`]s in visitation order and
//! produces one maud fragment per album block and per standalone video
//! tile, threading a [`GalleryCounts`] accumulator and registering every
//! emitted anchor in the [`NavIndex`]. All interpolated text goes through
//! maud and is HTML-escaped; hrefs are percent-encoded paths relative to
//! the gallery root.
//!
//! An album block is emitted iff its bundle has at least one audio asset.
//! Video tiles are independent of that: a directory can contribute both
//! an album and tiles, or tiles alone.

use crate::format::{encode_href, format_created, pretty_size};
use crate::nav::{ItemKind, NavEntry, NavIndex};
use crate::report::{BuildEvent, Reporter};
use crate::walk::{DirBundle, MediaAsset};
use maud::{Markup, html};
use std::path::{Path, PathBuf};

/// Cover-art keywords, tried in order. The first keyword with a matching
/// image wins; ties go to directory-listing order.
pub const COVER_KEYWORDS: &[&str] = &["cover", "folder", "front", "album", "card", "thumb", "back"];

/// Aggregate fragment counts for one run. Threaded through the assembler
/// explicitly; there is no global state.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct GalleryCounts {
    pub albums: usize,
    pub covers: usize,
    pub audios: usize,
    pub videos: usize,
}

/// Everything the renderer needs: ordered fragments, final counts, and
/// the navigable-item index.
#[derive(Debug)]
pub struct AssembledGallery {
    pub fragments: Vec<Markup>,
    pub counts: GalleryCounts,
    pub nav: NavIndex,
}

/// Accumulates fragments across the walk. One per run.
pub struct Assembler<'a> {
    root: &'a Path,
    include_videos: bool,
    reporter: &'a Reporter,
    counts: GalleryCounts,
    fragments: Vec<Markup>,
    nav: NavIndex,
}

impl<'a> Assembler<'a> {
    pub fn new(root: &'a Path, include_videos: bool, reporter: &'a Reporter) -> Self {
        Self {
            root,
            include_videos,
            reporter,
            counts: GalleryCounts::default(),
            fragments: Vec::new(),
            nav: NavIndex::new(),
        }
    }

    /// Consume one directory's bundle, appending zero or more fragments.
    pub fn push_bundle(&mut self, bundle: DirBundle) {
        if !bundle.audios.is_empty() {
            let fragment = self.album_fragment(&bundle);
            self.fragments.push(fragment);
        }
        if self.include_videos {
            for video in &bundle.videos {
                let tile = self.video_tile(video);
                self.fragments.push(tile);
            }
        }
    }

    pub fn finish(self) -> AssembledGallery {
        AssembledGallery {
            fragments: self.fragments,
            counts: self.counts,
            nav: self.nav,
        }
    }

    /// Root-relative path of an asset or directory. The gallery root
    /// itself maps to `.`, as a link target must not be empty.
    fn relative(&self, path: &Path) -> PathBuf {
        let rel = path.strip_prefix(self.root).unwrap_or(path);
        if rel.as_os_str().is_empty() {
            PathBuf::from(".")
        } else {
            rel.to_path_buf()
        }
    }

    fn tooltip(&self, asset: &MediaAsset) -> String {
        format!(
            "{} size: {}; created: {}",
            self.relative(&asset.path).display(),
            pretty_size(asset.size),
            format_created(&asset.created)
        )
    }

    /// One album block: title link, optional cover, sorted track list.
    fn album_fragment(&mut self, bundle: &DirBundle) -> Markup {
        self.counts.albums += 1;

        let album_group = self.nav.begin_album_group();
        let track_group = self.nav.begin_track_group();

        let title = bundle
            .dir
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        let album_rel = self.relative(&bundle.dir);
        let album_href = encode_href(&album_rel);

        let title_nav = self.nav.push(NavEntry {
            href: album_href.clone(),
            kind: ItemKind::Album,
            track_group: None,
            album_group,
        });

        let cover = select_cover(&bundle.images).map(|image| {
            self.counts.covers += 1;
            let nav = self.nav.push(NavEntry {
                href: album_href.clone(),
                kind: ItemKind::Album,
                track_group: None,
                album_group,
            });
            (nav, encode_href(&self.relative(&image.path)))
        });

        let mut tracks = bundle.audios.clone();
        tracks.sort_by_key(|a| a.file_name());

        let track_lines: Vec<Markup> = tracks
            .iter()
            .map(|track| {
                self.counts.audios += 1;
                self.reporter.emit(BuildEvent::AudioRendered {
                    count: self.counts.audios,
                    path: track.path.clone(),
                });
                let href = encode_href(&self.relative(&track.path));
                let nav = self.nav.push(NavEntry {
                    href: href.clone(),
                    kind: ItemKind::Audio,
                    track_group: Some(track_group),
                    album_group,
                });
                html! {
                    p {
                        a href=(href)
                          target="_blank"
                          title=(self.tooltip(track))
                          data-nav=(nav) {
                            "\u{25B6}\u{FE0F} " (track.file_name()) " "
                            span.meta { "(" (pretty_size(track.size)) ")" }
                        }
                    }
                }
            })
            .collect();

        html! {
            div.item title=(bundle.dir.display().to_string()) {
                h2 {
                    a href=(album_href) target="_blank" data-nav=(title_nav) { (title) }
                }
                @if let Some((cover_nav, cover_src)) = cover {
                    a href=(album_href)
                      target="_blank"
                      title=(album_rel.display().to_string())
                      data-nav=(cover_nav) {
                        img src=(cover_src) loading="lazy";
                    }
                }
                div.list {
                    @for line in &track_lines { (line) }
                }
            }
        }
    }

    /// One standalone, independently playable video tile.
    fn video_tile(&mut self, video: &MediaAsset) -> Markup {
        self.counts.videos += 1;

        let album_group = self.nav.begin_album_group();
        let href = encode_href(&self.relative(&video.path));
        let nav = self.nav.push(NavEntry {
            href: href.clone(),
            kind: ItemKind::Video,
            track_group: None,
            album_group,
        });

        html! {
            a.item href=(href) target="_blank" title=(self.tooltip(video)) data-nav=(nav) {
                video preload="metadata" controls {
                    source src=(format!("{href}#t=0.1"));
                }
                (video.file_name()) " "
                span.meta { "(" (pretty_size(video.size)) ")" }
            }
        }
    }
}

/// Pick the album's cover image.
///
/// Tries each keyword in [`COVER_KEYWORDS`] order against the image
/// stems, case-insensitively; the first keyword with any match picks the
/// first matching image in listing order. With no keyword match the first
/// image wins; with no images there is no cover. Deterministic given the
/// same listing order.
pub fn select_cover(images: &[MediaAsset]) -> Option<&MediaAsset> {
    for keyword in COVER_KEYWORDS {
        if let Some(image) = images
            .iter()
            .find(|i| i.stem().to_lowercase().contains(keyword))
        {
            return Some(image);
        }
    }
    images.first()
}
