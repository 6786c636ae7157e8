//! Media-kind classification by file extension.
//!
//! The walker hands every directory-listing entry through [`classify`] to
//! sort it into one of the gallery's media kinds. Classification is purely
//! name-based: extension tables, compared case-insensitively. Files are
//! never opened or sniffed.
//!
//! AppleDouble companion files (`._name`) are excluded before
//! classification regardless of extension — see [`is_hidden_marker`].

use std::path::Path;

/// Audio extensions that form album tracks.
pub const AUDIO_EXTENSIONS: &[&str] = &["mp3", "webm", "ogg", "wav", "flac", "m4a", "aac"];

/// Image extensions considered as cover-art candidates.
pub const IMAGE_EXTENSIONS: &[&str] = &["jpg", "jpeg", "png", "webp", "gif"];

/// Video extensions rendered as standalone tiles when enabled.
pub const VIDEO_EXTENSIONS: &[&str] = &["mp4", "mkv", "3gp", "mov", "ogv", "mpg", "mpeg"];

/// Filename prefix marking AppleDouble metadata companions.
const HIDDEN_MARKER: &str = "._";

/// What a file is to the gallery.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MediaKind {
    Audio,
    Image,
    Video,
    Other,
}

/// Classify a path by its extension, case-insensitively.
///
/// Paths with no extension, and extensions outside the three tables,
/// classify as [`MediaKind::Other`].
pub fn classify(path: &Path) -> MediaKind {
    let ext = match path.extension() {
        Some(e) => e.to_string_lossy().to_lowercase(),
        None => return MediaKind::Other,
    };
    if AUDIO_EXTENSIONS.contains(&ext.as_str()) {
        MediaKind::Audio
    } else if IMAGE_EXTENSIONS.contains(&ext.as_str()) {
        MediaKind::Image
    } else if VIDEO_EXTENSIONS.contains(&ext.as_str()) {
        MediaKind::Video
    } else {
        MediaKind::Other
    }
}

/// True for `._`-prefixed filenames, which are dropped unconditionally
/// before classification.
pub fn is_hidden_marker(file_name: &str) -> bool {
    file_name.starts_with(HIDDEN_MARKER)
}
