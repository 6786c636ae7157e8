//! # tune-gal
//!
//! A single-file music gallery generator. Point it at a directory tree
//! and it writes one self-contained HTML document presenting every
//! directory with audio files as a browsable, playable "album" — cover
//! art, ordered track list, tooltips with size and creation time — plus
//! optional standalone video tiles. The page needs nothing but the media
//! files themselves: style, script and the navigation index are inlined.
//!
//! # Architecture: One Deterministic Pass
//!
//! ```text
//! walk       tree  →  DirBundle per directory   (classify + stat)
//! assemble   bundle →  fragments + counts + nav index
//! render     fragments →  <root>/mu.html        (single write)
//! ```
//!
//! The pipeline is strictly sequential: album order in the document is
//! directory-visitation order, and visitation order is name-sorted, so
//! re-running on an unchanged tree reproduces the same document.
//! Recoverable problems (an unlistable directory, an unstat'able file)
//! are reported through a best-effort event channel and simply omitted;
//! only failing to write the output aborts a run.
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`config`] | Per-run configuration, supplied by the CLI |
//! | [`filter`] | Ignore-fragment matching over absolute path strings |
//! | [`classify`] | Extension tables → media kind, hidden-marker rule |
//! | [`walk`] | Depth-first traversal yielding per-directory bundles |
//! | [`format`] | Size / timestamp / href formatting helpers |
//! | [`assemble`] | Bundles → album blocks and video tiles (maud) |
//! | [`nav`] | Navigable-item index + two-level next/prev search |
//! | [`render`] | Static shell, embedded runtime, output write |
//! | [`report`] | Fire-and-forget build events |
//! | [`output`] | CLI output formatting (`format_*` / `print_*`) |
//! | [`pipeline`] | walk → assemble → render orchestration |
//!
//! # Design Decisions
//!
//! ## Maud Over String Templates
//!
//! Fragments and the shell are built with [Maud](https://maud.lambda.xyz/)
//! compile-time templates: malformed markup is a build error and every
//! interpolated string — album titles, file names, tooltips — is escaped
//! by construction.
//!
//! ## The Runtime Gets an Index, Not a DOM Crawl
//!
//! Next/previous navigation in the page (track auto-advance, arrow keys)
//! used to be the kind of logic that lives as an opaque script crawling
//! sibling elements. Here the generator emits `GALLERY_INDEX`, a
//! document-ordered JSON array of every navigable anchor with its track
//! and album group ids, and the embedded runtime searches that. The same
//! two-level search (rest of the track list first, then following albums)
//! is implemented and unit-tested in [`nav`], so the traversal contract
//! is pinned down without a browser.
//!
//! ## Errors Are Events
//!
//! A gallery build should survive one unreadable directory on a
//! half-dead external disk. Traversal and stat failures are demoted to
//! [`report::BuildEvent`]s at the granularity of a single directory or
//! file, drained by a printer thread; the error types that remain
//! (`RenderError`, `BuildError`) cover the only fatal case, the final
//! write.

pub mod assemble;
pub mod classify;
pub mod config;
pub mod filter;
pub mod format;
pub mod nav;
pub mod output;
pub mod pipeline;
pub mod render;
pub mod report;
pub mod walk;

#[cfg(test)]
pub(crate) mod test_helpers;
