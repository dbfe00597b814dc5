//! Command-line interface for treemark.
//!
//! Loads the TOML configuration, runs the scan, and writes the snapshot
//! artifact to the configured output path.

use clap::Parser;
use std::path::{Path, PathBuf};
use std::process::exit;
use treemark::{Config, TreemarkError, assemble, generate, write_snapshot};

/// treemark — markdown project snapshot generator
#[derive(Parser)]
#[command(name = "treemark", version, about, long_about = None)]
struct Cli {
    /// Path to the TOML configuration file
    config: PathBuf,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if let Err(e) = run(&cli.config) {
        eprintln!("Error: {}", e);
        exit(1);
    }
}

fn init_logging(verbose: bool) {
    let default = if verbose { "treemark=debug" } else { "treemark=info" };
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn run(config_path: &Path) -> Result<(), TreemarkError> {
    let config_dir = config_path.parent().unwrap_or(Path::new("."));
    let config = Config::load(config_path)?;
    let resolved = config.resolve(config_dir)?;
    let snapshot = generate(&resolved.options)?;
    let text = assemble(&snapshot);
    write_snapshot(&resolved.output, &text)?;
    println!("Snapshot written to: {}", resolved.output.display());
    Ok(())
}
