//! Load a text point cloud and report the result
//!
//! Usage:
//!     load_txt scan.txt
//!     load_txt scan.txt --print
//!     RUST_LOG=debug load_txt scan.txt

use anyhow::Context;
use clap::Parser;
use cloudtxt_io::PointCloudLoader;
use std::path::PathBuf;

/// Read a point cloud stored as a header line followed by `x y z` lines
#[derive(Parser)]
#[command(name = "load_txt")]
#[command(version)]
#[command(about = "Load and validate a text point cloud", long_about = None)]
struct Cli {
    /// Point cloud file to load
    path: PathBuf,

    /// Print every point after loading
    #[arg(short, long)]
    print: bool,

    /// Log level used when RUST_LOG is not set
    #[arg(long, default_value = "info")]
    log_level: String,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&cli.log_level)),
        )
        .with_target(false)
        .init();

    tracing::debug!(path = %cli.path.display(), "loading point cloud");
    let cloud = PointCloudLoader::new()
        .load(&cli.path)
        .with_context(|| format!("failed to load {}", cli.path.display()))?;

    if cli.print {
        print!("{}", cloud);
    }

    Ok(())
}
