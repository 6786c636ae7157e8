//! The navigable-item index embedded in the rendered document.
//!
//! Every anchor the assembler emits is registered here with its enclosing
//! track group (an album's track list) and album group (one top-level
//! gallery block). The index is serialized to JSON and embedded as
//! `GALLERY_INDEX`, and the runtime's next/previous traversal operates on
//! it rather than walking the rendered DOM.
//!
//! [`NavIndex::find_next`] / [`NavIndex::find_prev`] are the reference
//! implementation of the runtime's two-level search: scan the remaining
//! siblings of the current item's track group in the requested direction,
//! and once the group is exhausted, escalate to the following (or
//! preceding) album groups in document order — forward searches scan each
//! group from its start, backward searches from its end.

use serde::Serialize;

/// Media kind of a navigable link target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ItemKind {
    /// An audio track line item.
    Audio,
    /// An image link target.
    Image,
    /// A standalone video tile.
    Video,
    /// A link to an album directory (title or cover anchor).
    Album,
}

/// One navigable anchor. Sequence index = position in the index.
#[derive(Debug, Clone, Serialize)]
pub struct NavEntry {
    pub href: String,
    pub kind: ItemKind,
    /// Track-list group the item sits in, if any. Album and cover links
    /// sit outside any track list.
    #[serde(rename = "track")]
    pub track_group: Option<usize>,
    /// The top-level gallery block containing the item. Each video tile
    /// is its own block.
    #[serde(rename = "album")]
    pub album_group: usize,
}

/// Document-ordered sequence of navigable items plus group id allocation.
#[derive(Debug, Default)]
pub struct NavIndex {
    entries: Vec<NavEntry>,
    next_album_group: usize,
    next_track_group: usize,
}

impl NavIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Allocate the id for the next top-level gallery block.
    pub fn begin_album_group(&mut self) -> usize {
        let id = self.next_album_group;
        self.next_album_group += 1;
        id
    }

    /// Allocate the id for the next track list.
    pub fn begin_track_group(&mut self) -> usize {
        let id = self.next_track_group;
        self.next_track_group += 1;
        id
    }

    /// Register an anchor, returning its sequence index for `data-nav`.
    pub fn push(&mut self, entry: NavEntry) -> usize {
        self.entries.push(entry);
        self.entries.len() - 1
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&NavEntry> {
        self.entries.get(index)
    }

    /// The JSON array embedded into the document as `GALLERY_INDEX`.
    pub fn to_json(&self) -> String {
        serde_json::to_string(&self.entries).unwrap_or_else(|_| "[]".to_string())
    }

    /// Forward search from `from` for the first entry accepted by `pred`.
    ///
    /// Level one scans later entries of the same track group; level two
    /// scans later album groups in document order, each from its start.
    /// Items outside any track group (covers, album links) escalate to
    /// level two directly.
    pub fn find_next<F>(&self, from: usize, pred: F) -> Option<usize>
    where
        F: Fn(&NavEntry) -> bool,
    {
        let current = self.entries.get(from)?;
        if let Some(group) = current.track_group {
            for (i, entry) in self.entries.iter().enumerate().skip(from + 1) {
                if entry.track_group == Some(group) && pred(entry) {
                    return Some(i);
                }
            }
        }
        for (i, entry) in self.entries.iter().enumerate() {
            if entry.album_group > current.album_group && pred(entry) {
                return Some(i);
            }
        }
        None
    }

    /// Backward counterpart of [`find_next`](Self::find_next).
    ///
    /// Level one scans earlier entries of the same track group, nearest
    /// first; level two scans earlier album groups nearest-first, each
    /// from its end.
    pub fn find_prev<F>(&self, from: usize, pred: F) -> Option<usize>
    where
        F: Fn(&NavEntry) -> bool,
    {
        let current = self.entries.get(from)?;
        if let Some(group) = current.track_group {
            for i in (0..from).rev() {
                let entry = &self.entries[i];
                if entry.track_group == Some(group) && pred(entry) {
                    return Some(i);
                }
            }
        }
        for i in (0..self.entries.len()).rev() {
            let entry = &self.entries[i];
            if entry.album_group < current.album_group && pred(entry) {
                return Some(i);
            }
        }
        None
    }
}
