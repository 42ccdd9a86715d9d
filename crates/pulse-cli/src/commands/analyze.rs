use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use pulse_core::pipeline::analyze_accepted;
use pulse_core::pipeline::config::AnalysisConfig;

use crate::input::load_series;

#[derive(Args)]
pub struct AnalyzeArgs {
    /// Input CSV file (`timestamp_ms,luminance` per line)
    pub file: PathBuf,

    /// Analysis config file (TOML)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Print the result as JSON
    #[arg(long)]
    pub json: bool,
}

pub fn run(args: &AnalyzeArgs) -> Result<()> {
    let config = load_config(args.config.as_deref())?;

    let series = load_series(&args.file)?;
    tracing::debug!(samples = series.len(), "loaded series");

    let result = analyze_accepted(&series, &config)?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else {
        let (low_bpm, high_bpm) = config.bpm_range();
        println!("Heart rate:  {:.1} BPM", result.bpm);
        println!("Quality:     {:.2}", result.quality);
        println!("Band:        {low_bpm:.0}-{high_bpm:.0} BPM");
    }

    Ok(())
}

pub fn load_config(path: Option<&std::path::Path>) -> Result<AnalysisConfig> {
    match path {
        Some(path) => {
            let contents = std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read config {}", path.display()))?;
            toml::from_str(&contents).context("Invalid analysis config")
        }
        None => Ok(AnalysisConfig::default()),
    }
}
