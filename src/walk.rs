//! Depth-first tree traversal producing per-directory media bundles.
//!
//! The walker visits the gallery root and every descendant directory in
//! pre-order, with entries sorted by file name so visitation order — and
//! therefore album order in the output — is reproducible across runs on
//! an unchanged tree.
//!
//! At each visited directory only the immediate child *files* are listed;
//! subdirectories become their own visits. Hidden-marker files are
//! dropped, the rest are classified and stat'ed into [`MediaAsset`]s.
//!
//! Failures are recovered locally, never propagated: an unlistable
//! directory or an unstat'able file is reported through the
//! [`Reporter`] and omitted, and the walk carries on with whatever
//! remains.

use crate::classify::{self, MediaKind};
use crate::filter::PathFilter;
use crate::report::{BuildEvent, Reporter};
use chrono::{DateTime, Local};
use std::fs;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// One media file with the metadata the gallery displays.
#[derive(Debug, Clone)]
pub struct MediaAsset {
    pub path: PathBuf,
    pub kind: MediaKind,
    pub size: u64,
    /// Filesystem birth time where the platform exposes it, otherwise
    /// last-modified time.
    pub created: DateTime<Local>,
}

impl MediaAsset {
    /// Bare file name, lossily decoded.
    pub fn file_name(&self) -> String {
        self.path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default()
    }

    /// File stem (name without extension), lossily decoded.
    pub fn stem(&self) -> String {
        self.path
            .file_stem()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default()
    }
}

/// The classified contents of one visited directory.
///
/// Asset order within each list is the sorted listing order; the
/// assembler re-sorts audio by file name before rendering, which for a
/// single flat listing is the same order.
#[derive(Debug, Clone)]
pub struct DirBundle {
    pub dir: PathBuf,
    pub audios: Vec<MediaAsset>,
    pub images: Vec<MediaAsset>,
    pub videos: Vec<MediaAsset>,
}

impl DirBundle {
    fn new(dir: PathBuf) -> Self {
        Self {
            dir,
            audios: Vec::new(),
            images: Vec::new(),
            videos: Vec::new(),
        }
    }

    fn push(&mut self, asset: MediaAsset) {
        match asset.kind {
            MediaKind::Audio => self.audios.push(asset),
            MediaKind::Image => self.images.push(asset),
            MediaKind::Video => self.videos.push(asset),
            MediaKind::Other => {}
        }
    }
}

/// Walk `root` depth-first, yielding one [`DirBundle`] per visited
/// directory.
///
/// Ignored paths are pruned: an ignored directory is neither yielded nor
/// descended into, and ignored files never reach a bundle. Every visited
/// directory yields a bundle, even an empty one — the assembler decides
/// what deserves a fragment.
pub fn walk_tree<'a>(
    root: &Path,
    filter: &'a PathFilter,
    reporter: &'a Reporter,
) -> impl Iterator<Item = DirBundle> + 'a {
    WalkDir::new(root)
        .follow_links(false)
        .sort_by_file_name()
        .into_iter()
        .filter_entry(move |entry| !filter.is_ignored(entry.path()))
        .filter_map(move |entry| {
            let entry = match entry {
                Ok(e) => e,
                Err(err) => {
                    let path = err
                        .path()
                        .map(Path::to_path_buf)
                        .unwrap_or_default();
                    reporter.emit(BuildEvent::DirectorySkipped {
                        path,
                        reason: err.to_string(),
                    });
                    return None;
                }
            };
            if !entry.file_type().is_dir() {
                return None;
            }
            list_directory(entry.path(), filter, reporter)
        })
}

/// List one directory's immediate child files into a bundle.
///
/// Returns `None` when the directory itself cannot be read; per-file
/// failures only drop the file.
fn list_directory(dir: &Path, filter: &PathFilter, reporter: &Reporter) -> Option<DirBundle> {
    let entries = match fs::read_dir(dir) {
        Ok(entries) => entries,
        Err(err) => {
            reporter.emit(BuildEvent::DirectorySkipped {
                path: dir.to_path_buf(),
                reason: err.to_string(),
            });
            return None;
        }
    };

    let mut children: Vec<PathBuf> = entries.filter_map(|e| e.ok()).map(|e| e.path()).collect();
    children.sort();

    let mut bundle = DirBundle::new(dir.to_path_buf());
    for path in children {
        let name = match path.file_name() {
            Some(n) => n.to_string_lossy().into_owned(),
            None => continue,
        };
        if classify::is_hidden_marker(&name) {
            continue;
        }
        if filter.is_ignored(&path) {
            continue;
        }
        if !path.is_file() {
            continue;
        }
        let kind = classify::classify(&path);
        if kind == MediaKind::Other {
            continue;
        }
        match stat_asset(&path, kind) {
            Ok(asset) => bundle.push(asset),
            Err(err) => reporter.emit(BuildEvent::AssetSkipped {
                path,
                reason: err.to_string(),
            }),
        }
    }
    Some(bundle)
}

fn stat_asset(path: &Path, kind: MediaKind) -> std::io::Result<MediaAsset> {
    let metadata = fs::metadata(path)?;
    let created = metadata
        .created()
        .or_else(|_| metadata.modified())?;
    Ok(MediaAsset {
        path: path.to_path_buf(),
        kind,
        size: metadata.len(),
        created: DateTime::<Local>::from(created),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_helpers::write_file;
    use tempfile::TempDir;

    fn walk_all(root: &Path, filter: &PathFilter) -> Vec<DirBundle> {
        let reporter = Reporter::silent();
        walk_tree(root, filter, &reporter).collect()
    }

    #[test]
    fn visits_root_then_subdirectories_in_name_order() {
        let tmp = TempDir::new().unwrap();
        write_file(tmp.path(), "Zebra/01.mp3");
        write_file(tmp.path(), "Alpha/01.mp3");
        write_file(tmp.path(), "Mid/01.mp3");

        let bundles = walk_all(tmp.path(), &PathFilter::default());
        let dirs: Vec<_> = bundles
            .iter()
            .map(|b| b.dir.file_name().unwrap().to_string_lossy().into_owned())
            .collect();

        assert_eq!(dirs.len(), 4); // root + three albums
        assert_eq!(&dirs[1..], ["Alpha", "Mid", "Zebra"]);
    }

    #[test]
    fn files_are_classified_into_bundle_lists() {
        let tmp = TempDir::new().unwrap();
        write_file(tmp.path(), "Album/01.mp3");
        write_file(tmp.path(), "Album/02.flac");
        write_file(tmp.path(), "Album/cover.jpg");
        write_file(tmp.path(), "Album/clip.mp4");
        write_file(tmp.path(), "Album/notes.txt");

        let bundles = walk_all(tmp.path(), &PathFilter::default());
        let album = bundles.iter().find(|b| b.dir.ends_with("Album")).unwrap();

        assert_eq!(album.audios.len(), 2);
        assert_eq!(album.images.len(), 1);
        assert_eq!(album.videos.len(), 1);
    }

    #[test]
    fn hidden_marker_files_are_dropped() {
        let tmp = TempDir::new().unwrap();
        write_file(tmp.path(), "Album/01.mp3");
        write_file(tmp.path(), "Album/._01.mp3");

        let bundles = walk_all(tmp.path(), &PathFilter::default());
        let album = bundles.iter().find(|b| b.dir.ends_with("Album")).unwrap();

        assert_eq!(album.audios.len(), 1);
        assert_eq!(album.audios[0].file_name(), "01.mp3");
    }

    #[test]
    fn ignored_directory_is_not_yielded_or_descended() {
        let tmp = TempDir::new().unwrap();
        write_file(tmp.path(), "Keep/01.mp3");
        write_file(tmp.path(), ".config/skip.mp3");
        write_file(tmp.path(), ".config/nested/deep.mp3");

        let bundles = walk_all(tmp.path(), &PathFilter::default());
        assert!(bundles.iter().all(|b| !b.dir.to_string_lossy().contains(".config")));
    }

    #[test]
    fn ignored_file_is_dropped_from_its_bundle() {
        let tmp = TempDir::new().unwrap();
        write_file(tmp.path(), "Album/01.mp3");
        write_file(tmp.path(), "Album/bootleg-live.mp3");

        let filter = PathFilter::new(&["bootleg".to_string()]);
        let bundles = walk_all(tmp.path(), &filter);
        let album = bundles.iter().find(|b| b.dir.ends_with("Album")).unwrap();

        assert_eq!(album.audios.len(), 1);
    }

    #[test]
    fn asset_size_matches_file_contents() {
        let tmp = TempDir::new().unwrap();
        std::fs::create_dir(tmp.path().join("Album")).unwrap();
        std::fs::write(tmp.path().join("Album/01.mp3"), vec![0u8; 2048]).unwrap();

        let bundles = walk_all(tmp.path(), &PathFilter::default());
        let album = bundles.iter().find(|b| b.dir.ends_with("Album")).unwrap();

        assert_eq!(album.audios[0].size, 2048);
    }

    #[cfg(unix)]
    #[test]
    fn unreadable_directory_is_skipped_and_reported() {
        use std::os::unix::fs::PermissionsExt;
        use std::sync::mpsc;

        let tmp = TempDir::new().unwrap();
        write_file(tmp.path(), "Open/01.mp3");
        let locked = tmp.path().join("Locked");
        std::fs::create_dir(&locked).unwrap();
        std::fs::set_permissions(&locked, std::fs::Permissions::from_mode(0o000)).unwrap();

        let (tx, rx) = mpsc::channel();
        let reporter = Reporter::new(tx);
        let filter = PathFilter::default();
        let bundles: Vec<_> = walk_tree(tmp.path(), &filter, &reporter).collect();
        drop(reporter);

        // restore so TempDir can clean up
        std::fs::set_permissions(&locked, std::fs::Permissions::from_mode(0o755)).unwrap();

        assert!(bundles.iter().any(|b| b.dir.ends_with("Open")));
        let events: Vec<_> = rx.try_iter().collect();
        assert!(events
            .iter()
            .any(|e| matches!(e, BuildEvent::DirectorySkipped { path, .. } if path.ends_with("Locked"))));
    }
}
