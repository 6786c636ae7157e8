//! CLI output formatting.
//!
//! Each kind of output has a pure `format_*` function returning lines,
//! and a `print_*` wrapper that writes them. Format functions do no I/O,
//! so tests can assert on exact output without capturing stdout.
//!
//! Progress comes in two flavors, selected by the verbose flag: per-item
//! lines (one per rendered track), or a single in-place counter refreshed
//! every [`PROGRESS_CADENCE`] tracks.

use crate::assemble::GalleryCounts;
use crate::pipeline::BuildOutcome;
use crate::report::BuildEvent;
use std::io::Write;

/// Non-verbose runs refresh the in-place counter every this many tracks.
pub const PROGRESS_CADENCE: usize = 42;

/// Format one build event, or `None` when the event prints nothing at
/// this verbosity.
pub fn format_build_event(event: &BuildEvent, verbose: bool) -> Option<String> {
    match event {
        BuildEvent::DirectorySkipped { path, reason } => {
            Some(format!("skipped directory {}: {}", path.display(), reason))
        }
        BuildEvent::AssetSkipped { path, reason } => {
            Some(format!("skipped {}: {}", path.display(), reason))
        }
        BuildEvent::AudioRendered { count, path } => {
            if verbose {
                Some(path.display().to_string())
            } else if count % PROGRESS_CADENCE == 0 {
                Some(format!("audios:     {count}"))
            } else {
                None
            }
        }
    }
}

/// Print one build event. The non-verbose audio counter overwrites its
/// own line; everything else gets a full line.
pub fn print_build_event(event: &BuildEvent, verbose: bool) {
    let Some(line) = format_build_event(event, verbose) else {
        return;
    };
    match event {
        BuildEvent::AudioRendered { .. } if !verbose => {
            print!("{line}              \r");
            let _ = std::io::stdout().flush();
        }
        _ => println!("{line}"),
    }
}

/// Format the end-of-run report: where the document went (or why there
/// is none) and the aggregate counts.
pub fn format_outcome(outcome: &BuildOutcome) -> Vec<String> {
    match &outcome.output_path {
        None => vec!["No media files found.".to_string()],
        Some(path) => {
            let mut lines = vec![
                format!("Gallery HTML file generated: {}", path.display()),
                String::new(),
            ];
            lines.extend(format_counts(&outcome.counts));
            lines
        }
    }
}

fn format_counts(counts: &GalleryCounts) -> Vec<String> {
    vec![
        format!("Albums:     {}", counts.albums),
        format!("Covers:     {}", counts.covers),
        format!("Audios:     {}", counts.audios),
        format!("Videos:     {}", counts.videos),
    ]
}

/// Print the end-of-run report to stdout.
pub fn print_outcome(outcome: &BuildOutcome) {
    for line in format_outcome(outcome) {
        println!("{line}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn audio_event(count: usize) -> BuildEvent {
        BuildEvent::AudioRendered {
            count,
            path: PathBuf::from("/music/A/01.mp3"),
        }
    }

    #[test]
    fn verbose_prints_every_track_path() {
        let line = format_build_event(&audio_event(1), true);
        assert_eq!(line.as_deref(), Some("/music/A/01.mp3"));
    }

    #[test]
    fn quiet_prints_only_on_cadence() {
        assert_eq!(format_build_event(&audio_event(1), false), None);
        assert_eq!(format_build_event(&audio_event(41), false), None);
        assert_eq!(
            format_build_event(&audio_event(42), false).as_deref(),
            Some("audios:     42")
        );
    }

    #[test]
    fn skip_events_always_print() {
        let event = BuildEvent::DirectorySkipped {
            path: PathBuf::from("/music/locked"),
            reason: "permission denied".to_string(),
        };
        let line = format_build_event(&event, false).unwrap();
        assert!(line.contains("skipped directory"));
        assert!(line.contains("/music/locked"));
        assert!(line.contains("permission denied"));

        let event = BuildEvent::AssetSkipped {
            path: PathBuf::from("/music/A/bad.mp3"),
            reason: "stat failed".to_string(),
        };
        assert!(format_build_event(&event, false).is_some());
        assert!(format_build_event(&event, true).is_some());
    }

    #[test]
    fn outcome_without_output_is_informational() {
        let outcome = BuildOutcome {
            output_path: None,
            counts: GalleryCounts::default(),
        };
        assert_eq!(format_outcome(&outcome), vec!["No media files found."]);
    }

    #[test]
    fn outcome_with_output_reports_path_and_counts() {
        let outcome = BuildOutcome {
            output_path: Some(PathBuf::from("/music/mu.html")),
            counts: GalleryCounts {
                albums: 2,
                covers: 1,
                audios: 5,
                videos: 0,
            },
        };
        let lines = format_outcome(&outcome);
        assert_eq!(lines[0], "Gallery HTML file generated: /music/mu.html");
        assert!(lines.contains(&"Albums:     2".to_string()));
        assert!(lines.contains(&"Audios:     5".to_string()));
    }
}
