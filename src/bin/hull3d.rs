//! Convex hulls for a batch of 3D point sets.
//!
//! Reads a batch (the number of sets, then each set as a size line followed
//! by `x y z` lines) and prints, per set, the face count followed by one
//! `3 a b c` line per face in lexicographic order.
//!
//! Usage:
//!   hull3d < input.txt              Perturbed construction (default)
//!   hull3d --exact input.txt        Trust the input to be in general position
//!   hull3d --check < input.txt      Verify every hull before printing it
//!
//! Log output goes to stderr and is controlled by `RUST_LOG`.

use anyhow::{bail, Context, Result};
use clap::Parser;
use kinetic_hull::hull::{self, HullConfig, DEFAULT_JITTER, DEFAULT_ROTATION};
use kinetic_hull::io::{read_point_sets, write_faces};
use std::fs::File;
use std::io::{self, BufReader, BufWriter, Write};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "hull3d")]
#[command(about = "Compute 3D convex hulls by divide and conquer")]
struct Args {
    /// Input file (reads stdin when omitted)
    input: Option<PathBuf>,

    /// Skip rotation and jitter; the input must be in general position
    #[arg(long)]
    exact: bool,

    /// Rotation angle in radians applied before construction
    #[arg(long, default_value_t = DEFAULT_ROTATION)]
    rotation: f64,

    /// Jitter relative to the largest absolute coordinate
    #[arg(long, default_value_t = DEFAULT_JITTER)]
    jitter: f64,

    /// Absolute tolerance below which a turn counts as straight; scale it down for tiny inputs
    #[arg(long, default_value_t = f64::EPSILON)]
    epsilon: f64,

    /// Validate each hull (closed surface, no point outside)
    #[arg(long)]
    check: bool,
}

impl Args {
    fn config(&self) -> HullConfig<f64> {
        let config = HullConfig {
            epsilon: self.epsilon,
            ..HullConfig::default()
        };
        if self.exact {
            config
        } else {
            config.with_rotation(self.rotation).with_jitter(self.jitter)
        }
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let args = Args::parse();
    let config = args.config();

    let sets = match &args.input {
        Some(path) => {
            let file = File::open(path)
                .with_context(|| format!("failed to open {}", path.display()))?;
            read_point_sets::<f64, _>(BufReader::new(file))?
        }
        None => read_point_sets::<f64, _>(io::stdin().lock())?,
    };
    tracing::info!(sets = sets.len(), exact = args.exact, "read input");

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());

    for (index, points) in sets.iter().enumerate() {
        let faces = hull::convex_hull_3d_with(points, &config);

        if args.check {
            let extent = points
                .iter()
                .map(|p| p.x.abs().max(p.y.abs()).max(p.z.abs()))
                .fold(1.0, f64::max);
            let report = hull::validate(points, &faces, 1e-6 * extent);
            if points.len() >= 4 && !report.is_valid() {
                bail!("hull {} failed validation: {}", index, report.summary());
            }
            tracing::debug!(index, summary = %report.summary(), "validated hull");
        }

        write_faces(&mut out, &faces)?;
    }

    out.flush()?;
    Ok(())
}
