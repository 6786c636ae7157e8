use clap::Parser;
use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::mpsc;
use tune_gal::config::{DEFAULT_OUTPUT_FILE, GalleryConfig};
use tune_gal::report::Reporter;
use tune_gal::{output, pipeline};

#[derive(Parser)]
#[command(name = "tune-gal")]
#[command(about = "Music gallery generator")]
#[command(long_about = "\
Music gallery generator

Walks a directory tree and writes one self-contained HTML page into the
gallery root. Every directory containing audio files becomes an album:
its name is the title, a cover is picked from the directory's images
(cover/folder/front/... keywords first, then the first image), and the
tracks are listed in filename order with size and creation-time
tooltips. The page embeds its own player: click a track to play it in a
persistent bar, playback advances across albums, videos (with --videos)
open in a popup viewer with keyboard seeking and fullscreen.

Nothing is copied or transcoded — the page links to the media files in
place, so it keeps working as long as it stays next to them.")]
#[command(version)]
struct Cli {
    /// Gallery root, by default the current folder
    #[arg(default_value = ".")]
    gallery_root: PathBuf,

    /// Output filename, created inside the gallery root
    #[arg(short, long, default_value = DEFAULT_OUTPUT_FILE)]
    output_file: String,

    /// Include standalone video tiles
    #[arg(short = 'm', long)]
    videos: bool,

    /// Extra ignored path fragments, e.g. -i junk1 junk2
    #[arg(short, long = "ignored", value_name = "FRAGMENT", num_args = 0..)]
    ignored: Vec<String>,

    /// Per-item progress instead of the periodic counter
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let mut config = GalleryConfig::new(&cli.gallery_root);
    config.output_file = cli.output_file;
    config.include_videos = cli.videos;
    config.extra_ignored = cli.ignored;
    config.verbose = cli.verbose;

    if !config.gallery_root.is_dir() {
        eprintln!(
            "error: gallery root {} is not a directory",
            config.gallery_root.display()
        );
        return ExitCode::from(1);
    }

    println!("Collecting media in: {}...", config.gallery_root.display());

    let (tx, rx) = mpsc::channel();
    let verbose = config.verbose;
    let printer = std::thread::spawn(move || {
        for event in rx {
            output::print_build_event(&event, verbose);
        }
    });

    let reporter = Reporter::new(tx);
    let result = pipeline::build_gallery(&config, &reporter);

    // Closing the last sender ends the printer's loop.
    drop(reporter);
    let _ = printer.join();

    match result {
        Ok(outcome) => {
            output::print_outcome(&outcome);
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::from(1)
        }
    }
}
