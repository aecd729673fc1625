//! geodome CLI - geodesic dome mesh checks and part tables.
//!
//! Usage: geodome [--resolution R] <COMMAND> ...
//!
//! Run `geodome --help` for available commands. Set `RUST_LOG=debug` to see
//! the intermediate frames computed during a pivot analysis.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use tracing_subscriber::EnvFilter;

use geodome::analysis::{
    AnalyzeOptions, AngleExpectation, HubCounts, InPlaneStrategy, PartListing, analyze, check_total,
};
use geodome::float_types::{DEFAULT_RESOLUTION, Real, TAU};
use geodome::quantize::Quantizer;
use geodome::report::{TableStyle, render_parts, render_pivot, render_summary};

#[derive(Parser)]
#[command(name = "geodome")]
#[command(author, version, about = "Geodesic dome mesh analysis", long_about = None)]
struct Cli {
    /// Grid spacing used to group lengths (m) and angles (rad)
    #[arg(long, global = true, default_value_t = DEFAULT_RESOLUTION)]
    resolution: Real,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print vertex degrees and edge length classes
    Summary {
        /// Input OBJ files
        #[arg(required = true)]
        inputs: Vec<PathBuf>,
    },

    /// Print angle classes around a hub vertex
    Pivot {
        /// Input OBJ file, every facet must contain the pivot
        input: PathBuf,

        /// Zero-based index of the hub vertex
        #[arg(short, long)]
        pivot: usize,

        /// In-plane angle measurement
        #[arg(short, long, value_enum, default_value = "projected")]
        strategy: Strategy,

        /// Expected off-plane angle in degrees (repeatable)
        #[arg(long)]
        offplane: Vec<Real>,

        /// Expected in-plane angle in degrees (repeatable); also checks the
        /// angles add up to a full turn
        #[arg(long)]
        inplane: Vec<Real>,

        /// Allowed deviation from the expected angles, in radians
        #[arg(long, default_value = "0.01")]
        tolerance: Real,
    },

    /// Print a hub and strut table for several meshes
    Parts {
        /// Meshes as NAME=FILE:HEXAGONS:PENTAGONS
        #[arg(required = true, value_parser = parse_part_entry)]
        entries: Vec<PartEntry>,

        /// Table layout
        #[arg(long, value_enum, default_value = "cad")]
        style: Style,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum Strategy {
    /// Project onto the tangent plane at the pivot
    Projected,
    /// Raw 3D edge directions
    Raw,
}

impl From<Strategy> for InPlaneStrategy {
    fn from(strategy: Strategy) -> Self {
        match strategy {
            Strategy::Projected => InPlaneStrategy::Projected,
            Strategy::Raw => InPlaneStrategy::Raw,
        }
    }
}

#[derive(Clone, Copy, ValueEnum)]
enum Style {
    /// Fixed-width table for the CAD drawing
    Cad,
    /// Markdown table for the readme
    Readme,
}

impl From<Style> for TableStyle {
    fn from(style: Style) -> Self {
        match style {
            Style::Cad => TableStyle::Cad,
            Style::Readme => TableStyle::Readme,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
struct PartEntry {
    name: String,
    path: PathBuf,
    hubs: HubCounts,
}

fn parse_part_entry(value: &str) -> Result<PartEntry, String> {
    let (name, rest) = value
        .split_once('=')
        .ok_or_else(|| format!("expected NAME=FILE:HEXAGONS:PENTAGONS, got \"{value}\""))?;
    let mut fields = rest.rsplitn(3, ':');
    let (Some(pentagons), Some(hexagons), Some(path)) = (fields.next(), fields.next(), fields.next()) else {
        return Err(format!("expected FILE:HEXAGONS:PENTAGONS after \"{name}=\""));
    };
    let count = |field: &str| {
        field
            .parse::<usize>()
            .map_err(|e| format!("invalid hub count \"{field}\": {e}"))
    };
    Ok(PartEntry {
        name: name.to_string(),
        path: PathBuf::from(path),
        hubs: HubCounts {
            hexagons: count(hexagons)?,
            pentagons: count(pentagons)?,
        },
    })
}

fn main() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let quantizer = Quantizer::new(cli.resolution)?;

    match cli.command {
        Commands::Summary { inputs } => {
            let options = AnalyzeOptions {
                quantizer,
                ..AnalyzeOptions::default()
            };
            for input in inputs {
                let report = analyze(&input, &options)?;
                println!("##### {} #####", input.display());
                println!("{}", render_summary(&report.summary));
            }
        },

        Commands::Pivot {
            input,
            pivot,
            strategy,
            offplane,
            inplane,
            tolerance,
        } => {
            let options = AnalyzeOptions {
                quantizer,
                pivot: Some(pivot),
                strategy: strategy.into(),
            };
            let report = analyze(&input, &options)?;
            println!("##### {} pivot {pivot} #####", input.display());
            println!("{} vertices", report.summary.vertex_count);
            println!("{} facets", report.summary.facet_count);
            let Some(analysis) = report.pivot else {
                return Err("pivot analysis was not run".into());
            };
            print!("{}", render_pivot(&analysis));

            if !offplane.is_empty() {
                AngleExpectation::from_degrees(&offplane, tolerance).check("off-plane", &analysis.offplane)?;
            }
            if !inplane.is_empty() {
                AngleExpectation::from_degrees(&inplane, tolerance).check("in-plane", &analysis.inplane)?;
                check_total("total around pivot", analysis.total_inplane_angle(), TAU, tolerance)?;
            }
        },

        Commands::Parts { entries, style } => {
            let options = AnalyzeOptions {
                quantizer,
                ..AnalyzeOptions::default()
            };
            let mut rows = Vec::with_capacity(entries.len());
            for entry in entries {
                let report = analyze(&entry.path, &options)?;
                let listing = PartListing::from_summary(&report.summary, entry.hubs)?;
                tracing::info!(
                    mesh = %entry.name,
                    long = listing.long_struts,
                    short = listing.short_struts,
                    long_length = listing.long_length,
                    short_length = listing.short_length,
                    "part listing"
                );
                rows.push((entry.name, listing));
            }
            print!("{}", render_parts(&rows, style.into()));
        },
    }

    Ok(())
}
