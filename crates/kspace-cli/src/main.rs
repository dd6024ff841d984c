//! kspace - k-space filtering and reconstruction CLI
//!
//! Builds filter stacks from YAML files, previews their masks and runs them
//! over raw k-space stored as `.npy`.

use anyhow::{Context, Result};
use clap::{ArgAction, Args, Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

mod commands;

#[derive(Parser)]
#[command(name = "kspace")]
#[command(author, version, about = "MRI k-space filter stacks")]
#[command(long_about = "
Apply ordered stacks of 2D spectral filters to MRI k-space.

Examples:
  kspace windows                                  # List window families
  kspace preview -s stack.yaml -r 256 -c 256 -o mask.npy
  kspace apply raw.npy -s stack.yaml -o filtered.npy --dc-offset 10
  kspace recon raw.npy -s stack.yaml --magnitude mag.npy --phase phase.npy
  kspace -v recon raw.npy --magnitude mag.npy --mask-threshold 0.1
")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Verbose output (-v debug, -vv trace)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    verbose: u8,

    /// Number of threads (0 = auto)
    #[arg(short = 'j', long, global = true, default_value = "0")]
    threads: usize,
}

#[derive(Subcommand)]
enum Commands {
    /// List window families and their shape parameters
    #[command(visible_alias = "w")]
    Windows,

    /// Apply a stack to ones and save the resulting mask
    #[command(visible_alias = "p")]
    Preview(PreviewArgs),

    /// Filter raw k-space
    #[command(visible_alias = "a")]
    Apply(ApplyArgs),

    /// Filter and reconstruct magnitude/phase images
    #[command(visible_alias = "r")]
    Recon(ReconArgs),
}

/// Arguments for the `preview` command.
#[derive(Args)]
struct PreviewArgs {
    /// Stack file (YAML)
    #[arg(short, long)]
    stack: PathBuf,

    /// Grid rows
    #[arg(short, long)]
    rows: usize,

    /// Grid columns
    #[arg(short, long)]
    cols: usize,

    /// Output array (.npy)
    #[arg(short, long)]
    output: PathBuf,
}

/// Arguments for the `apply` command.
#[derive(Args)]
struct ApplyArgs {
    /// Raw k-space (.npy, complex or real)
    input: PathBuf,

    /// Stack file (YAML); empty stack if omitted
    #[arg(short, long)]
    stack: Option<PathBuf>,

    /// Output k-space (.npy, complex)
    #[arg(short, long)]
    output: PathBuf,

    /// Prepend a DC offset correction with this corner size
    #[arg(long)]
    dc_offset: Option<usize>,
}

/// Arguments for the `recon` command.
#[derive(Args)]
struct ReconArgs {
    /// Raw k-space (.npy, complex or real)
    input: PathBuf,

    /// Stack file (YAML); empty stack if omitted
    #[arg(short, long)]
    stack: Option<PathBuf>,

    /// Prepend a DC offset correction with this corner size
    #[arg(long)]
    dc_offset: Option<usize>,

    /// Magnitude image output (.npy)
    #[arg(long)]
    magnitude: PathBuf,

    /// Phase image output (.npy)
    #[arg(long)]
    phase: Option<PathBuf>,

    /// Zero pixels whose magnitude falls below this value
    #[arg(long)]
    mask_threshold: Option<f64>,
}

fn init_tracing(verbose: u8) {
    let default = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    // Configure thread pool
    if cli.threads > 0 {
        rayon::ThreadPoolBuilder::new()
            .num_threads(cli.threads)
            .build_global()
            .context("Failed to configure thread pool")?;
    }

    match cli.command {
        Commands::Windows => commands::windows::run(cli.verbose),
        Commands::Preview(args) => commands::preview::run(args, cli.verbose),
        Commands::Apply(args) => commands::apply::run(args, cli.verbose),
        Commands::Recon(args) => commands::recon::run(args, cli.verbose),
    }
}
