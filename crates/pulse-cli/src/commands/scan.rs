use std::path::PathBuf;
use std::sync::mpsc;

use anyhow::{bail, Result};
use clap::Args;
use console::style;
use indicatif::{ProgressBar, ProgressStyle};
use pulse_core::acquisition::{ScanConfig, ScanEvent, ScanSession};
use pulse_core::consts::DEFAULT_SCAN_DURATION_SECS;

use crate::synthetic::SyntheticSource;

#[derive(Args)]
pub struct ScanArgs {
    /// Acquisition window length in seconds
    #[arg(long, default_value_t = DEFAULT_SCAN_DURATION_SECS)]
    pub duration: u64,

    /// Simulated heart rate in BPM
    #[arg(long, default_value = "72")]
    pub bpm: f64,

    /// Additive noise amplitude in raw luminance units
    #[arg(long, default_value = "8")]
    pub noise: f64,

    /// Drop every Nth simulated frame (0 = keep all)
    #[arg(long, default_value = "0")]
    pub drop: usize,

    /// Seed for the simulated jitter and noise
    #[arg(long, default_value = "7")]
    pub seed: u64,

    /// Analysis config file (TOML)
    #[arg(long)]
    pub config: Option<PathBuf>,
}

pub fn run(args: &ScanArgs) -> Result<()> {
    let analysis = super::analyze::load_config(args.config.as_deref())?;

    println!("{}", style("Pulse Scan").cyan().bold());
    println!("  Window:     {} s", args.duration);
    println!("  Simulated:  {:.0} BPM, noise {:.0}", args.bpm, args.noise);
    println!();

    let pb = ProgressBar::new(100);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{msg:10} [{bar:40}] {pos}%")?
            .progress_chars("=> "),
    );
    pb.set_message("Scanning");

    let (event_tx, event_rx) = mpsc::channel();
    let source = Box::new(SyntheticSource::new(
        args.bpm, args.noise, args.drop, args.seed,
    ));
    let session = ScanSession::start(
        source,
        ScanConfig {
            duration_secs: args.duration,
            analysis,
        },
        event_tx,
    )?;

    let mut terminal = None;
    for event in event_rx {
        match event {
            ScanEvent::Started => {}
            ScanEvent::Progress(percent) => pb.set_position(percent as u64),
            event => {
                terminal = Some(event);
                break;
            }
        }
    }
    session.wait();

    match terminal {
        Some(ScanEvent::Result { bpm, quality }) => {
            pb.finish_with_message("Done");
            println!();
            println!(
                "Heart rate:  {} BPM",
                style(format!("{bpm:.1}")).green().bold()
            );
            println!("Quality:     {quality:.2}");
            Ok(())
        }
        Some(ScanEvent::Error { code, message }) => {
            pb.abandon_with_message("Failed");
            bail!("scan failed ({code}): {message}");
        }
        _ => bail!("event channel closed before a terminal event"),
    }
}
