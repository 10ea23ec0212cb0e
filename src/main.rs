#![warn(clippy::complexity)]
#![warn(clippy::perf)]
#![warn(clippy::style)]
#![warn(clippy::suspicious)]
use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;
use tube_map::import::{CoordinatePolicy, LoadOptions};
use tube_map::models::LinePalette;
use tube_map::Session;

/// Filter a transit network by line and print what to draw
#[derive(Debug, Parser)]
#[command(name = "tube_map", version)]
struct Args {
    /// Segment CSV with `Tube Line`, `From Station`, `To Station`, `Distance (km)` and coordinate columns
    dataset: PathBuf,

    /// JSON object of line name to color; defaults to the London Underground palette
    #[arg(long)]
    palette: Option<PathBuf>,

    /// Line to select (repeatable). With none, the whole network is drawn.
    #[arg(short, long = "line")]
    lines: Vec<String>,

    /// Print the lines available for selection and exit
    #[arg(long)]
    list_lines: bool,

    /// Print the subgraph and render attributes as JSON
    #[arg(long)]
    json: bool,

    /// Fail when rows disagree about a station's coordinates
    #[arg(long)]
    strict_coordinates: bool,
}

fn main() -> Result<()> {
    tube_map::logging::init();
    let args = Args::parse();

    let palette = match &args.palette {
        Some(path) => LinePalette::load(path)
            .with_context(|| format!("Failed to load palette {}", path.display()))?,
        None => LinePalette::london(),
    };

    let options = LoadOptions {
        coordinate_policy: if args.strict_coordinates {
            CoordinatePolicy::Reject
        } else {
            CoordinatePolicy::FirstSeen
        },
    };

    let mut session = Session::open(&args.dataset, palette, &options)
        .with_context(|| format!("Failed to load network {}", args.dataset.display()))?;

    if args.list_lines {
        for line in session.line_names() {
            println!("{line}\t{}", session.palette().color_for(line));
        }
        return Ok(());
    }

    for line in &args.lines {
        if !session.select(line) {
            log::warn!("Line '{line}' given more than once");
        }
    }

    let view = session.view();
    if view.showing_all {
        log::info!("No line selected, drawing the whole network");
    }

    println!("{}", view.summary);
    if args.json {
        println!(
            "{}",
            serde_json::to_string_pretty(view.map).context("Failed to serialize map")?
        );
    }

    Ok(())
}
