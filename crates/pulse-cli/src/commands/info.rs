use std::path::PathBuf;

use anyhow::Result;
use clap::Args;
use pulse_core::consts::FALLBACK_SAMPLE_RATE_HZ;
use pulse_core::signal::resample::infer_sample_rate;

use crate::input::load_series;

#[derive(Args)]
pub struct InfoArgs {
    /// Input CSV file (`timestamp_ms,luminance` per line)
    pub file: PathBuf,
}

pub fn run(args: &InfoArgs) -> Result<()> {
    let series = load_series(&args.file)?;

    println!("File:         {}", args.file.display());
    println!("Samples:      {}", series.len());
    if series.is_empty() {
        return Ok(());
    }

    println!("Duration:     {:.1} s", series.duration_seconds());

    let rate = infer_sample_rate(&series.timestamps_seconds(), FALLBACK_SAMPLE_RATE_HZ);
    println!("Sample rate:  {:.1} Hz (inferred)", rate);

    let luminances = series.luminances();
    let mean = luminances.iter().sum::<f64>() / luminances.len() as f64;
    let min = luminances.iter().copied().fold(f64::INFINITY, f64::min);
    let max = luminances.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    println!("Luminance:    mean {mean:.1}, range {min:.1}..{max:.1}");

    Ok(())
}
