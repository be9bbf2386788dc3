//! Mean side count of the bounded cells of a planar Voronoi diagram.
//!
//! Reads `x y` site lines until the end of the input and prints the average
//! number of sides over all bounded cells with 7 significant digits, or `0`
//! when no cell is bounded.
//!
//! Usage:
//!   voronoi_sides < sites.txt
//!   voronoi_sides --cells sites.txt   Also list every bounded cell on stderr

use anyhow::{Context, Result};
use clap::Parser;
use kinetic_hull::io::{format_significant, read_sites};
use kinetic_hull::triangulation::{bounded_cells, mean_voronoi_sides};
use std::fs::File;
use std::io::{self, BufReader};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "voronoi_sides")]
#[command(about = "Average side count of bounded Voronoi cells")]
struct Args {
    /// Input file (reads stdin when omitted)
    input: Option<PathBuf>,

    /// Significant digits in the printed mean
    #[arg(long, default_value_t = 7)]
    digits: usize,

    /// Log each bounded cell and its side count
    #[arg(long)]
    cells: bool,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let args = Args::parse();

    let sites = match &args.input {
        Some(path) => {
            let file = File::open(path)
                .with_context(|| format!("failed to open {}", path.display()))?;
            read_sites::<f64, _>(BufReader::new(file))?
        }
        None => read_sites::<f64, _>(io::stdin().lock())?,
    };
    tracing::info!(sites = sites.len(), "read input");

    if args.cells {
        for cell in bounded_cells(&sites) {
            eprintln!("site {}: {} sides", cell.site, cell.sides);
        }
    }

    let mean = mean_voronoi_sides(&sites);
    println!("{}", format_significant(mean, args.digits));
    Ok(())
}
