//! Display formatting for asset metadata: sizes, timestamps, hrefs.
//!
//! Pure helpers shared by the assembler. All three outputs end up inside
//! the rendered document — sizes and timestamps as visible text and
//! tooltips, hrefs as percent-encoded link targets.

use chrono::{DateTime, Local};
use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};
use std::path::Path;

/// Binary size thresholds, largest first. The byte unit carries its
/// singular/plural suffixes separately.
const UNITS: &[(u64, &str)] = &[
    (1 << 50, "P"),
    (1 << 40, "T"),
    (1 << 30, "G"),
    (1 << 20, "M"),
    (1 << 10, "K"),
];

/// Human-readable file size with binary prefixes.
///
/// Picks the largest unit whose threshold the size meets and divides
/// without rounding. Sub-kilobyte sizes spell out `byte`/`bytes`:
///
/// ```
/// use tune_gal::format::pretty_size;
/// assert_eq!(pretty_size(1), "1 byte");
/// assert_eq!(pretty_size(1023), "1023 bytes");
/// assert_eq!(pretty_size(1024), "1K");
/// ```
pub fn pretty_size(bytes: u64) -> String {
    for &(factor, suffix) in UNITS {
        if bytes >= factor {
            return format!("{}{}", bytes / factor, suffix);
        }
    }
    if bytes == 1 {
        "1 byte".to_string()
    } else {
        format!("{bytes} bytes")
    }
}

/// Creation timestamp as shown in tooltips.
pub fn format_created(created: &DateTime<Local>) -> String {
    created.format("%Y-%m-%d %H:%M:%S").to_string()
}

/// Characters escaped in hrefs: everything but unreserved characters and
/// the path separator, so encoded links stay readable directory paths.
const HREF_SET: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'/')
    .remove(b'-')
    .remove(b'.')
    .remove(b'_')
    .remove(b'~');

/// Percent-encode a root-relative path for use as a link target.
///
/// Separators are preserved; spaces and non-ASCII become `%XX` escapes.
pub fn encode_href(relative: &Path) -> String {
    let joined = relative
        .components()
        .map(|c| c.as_os_str().to_string_lossy())
        .collect::<Vec<_>>()
        .join("/");
    utf8_percent_encode(&joined, HREF_SET).to_string()
}
