mod commands;
mod input;
mod synthetic;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "pulse", about = "Camera-based heart-rate estimation tool")]
#[command(version)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show recorded sample-series metadata
    Info(commands::info::InfoArgs),
    /// Estimate heart rate from a recorded sample series
    Analyze(commands::analyze::AnalyzeArgs),
    /// Run a simulated acquisition end to end
    Scan(commands::scan::ScanArgs),
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("warn")
    };
    tracing_subscriber::fmt().with_env_filter(filter).init();

    match &cli.command {
        Commands::Info(args) => commands::info::run(args),
        Commands::Analyze(args) => commands::analyze::run(args),
        Commands::Scan(args) => commands::scan::run(args),
    }
}
