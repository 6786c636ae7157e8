//! Best-effort build progress reporting.
//!
//! The pipeline never prints directly. Producers push [`BuildEvent`]s
//! through a [`Reporter`]; the binary drains them on a printer thread and
//! formats them via [`crate::output`]. Sends are fire-and-forget — a
//! missing or disconnected receiver must never block or fail the build.

use std::path::PathBuf;
use std::sync::mpsc::Sender;

/// Progress and recovery notices emitted while building.
#[derive(Debug, Clone)]
pub enum BuildEvent {
    /// A directory could not be listed; its subtree is omitted.
    DirectorySkipped { path: PathBuf, reason: String },
    /// A single file could not be stat'ed; its line is omitted.
    AssetSkipped { path: PathBuf, reason: String },
    /// One audio line item was rendered. `count` is the running total.
    AudioRendered { count: usize, path: PathBuf },
}

/// Fire-and-forget event sink.
///
/// Cloneable so the walker and assembler can hold their own handles.
#[derive(Debug, Clone)]
pub struct Reporter {
    tx: Option<Sender<BuildEvent>>,
}

impl Reporter {
    pub fn new(tx: Sender<BuildEvent>) -> Self {
        Self { tx: Some(tx) }
    }

    /// A reporter that drops every event. Used by tests and library
    /// callers that don't care about progress.
    pub fn silent() -> Self {
        Self { tx: None }
    }

    /// Send an event if anyone is listening. A closed channel is ignored.
    pub fn emit(&self, event: BuildEvent) {
        if let Some(tx) = &self.tx {
            let _ = tx.send(event);
        }
    }
}
