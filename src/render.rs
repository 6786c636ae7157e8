//! Final document rendering.
//!
//! Wraps the assembled fragments in the static shell — inline stylesheet,
//! the embedded playback runtime with its `GALLERY_INDEX`, the persistent
//! audio bar, a heading naming the gallery root, and the popup video
//! viewer — and writes the result into the gallery root.
//!
//! The stylesheet and runtime are embedded at compile time, so the output
//! references nothing but the media files themselves. Fragments are
//! emitted exactly in the order the assembler produced them; the renderer
//! never reorders or deduplicates.
//!
//! A write failure here is the build's only fatal error.

use crate::assemble::AssembledGallery;
use maud::{DOCTYPE, Markup, PreEscaped, html};
use std::fs;
use std::path::Path;
use thiserror::Error;

const STYLESHEET: &str = include_str!("../static/style.css");
const RUNTIME: &str = include_str!("../static/player.js");

#[derive(Error, Debug)]
pub enum RenderError {
    #[error("cannot write {path}: {source}")]
    Write {
        path: String,
        source: std::io::Error,
    },
}

/// Render the complete, self-contained document.
pub fn render_document(gallery_root: &Path, gallery: &AssembledGallery) -> Markup {
    let script = format!(
        "var GALLERY_INDEX = {};\n{}",
        gallery.nav.to_json(),
        RUNTIME
    );
    html! {
        (DOCTYPE)
        html {
            head {
                meta charset="UTF-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { (gallery_root.display().to_string()) }
                style { (PreEscaped(STYLESHEET)) }
                script { (PreEscaped(script)) }
            }
            body {
                div.fixedplayer {
                    audio id="aplayer" controls src="" {}
                    a href="#" id="aplayer-close" { "\u{00D7}" }
                }
                h1 {
                    a href=".." { ".." }
                    " " (gallery_root.display().to_string())
                }
                div id="maine" {
                    @for fragment in &gallery.fragments { (fragment) }
                }
                div.overlay id="popup1" {
                    div.popup {
                        a.close href="#" id="popup-close" { "\u{00D7}" }
                        div.content id="content" {}
                    }
                }
            }
        }
    }
}

/// Write the document, overwriting any existing file at `path`.
pub fn write_document(path: &Path, document: Markup) -> Result<(), RenderError> {
    fs::write(path, document.into_string()).map_err(|source| RenderError::Write {
        path: path.display().to_string(),
        source,
    })
}
