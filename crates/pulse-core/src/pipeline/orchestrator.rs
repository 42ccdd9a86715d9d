use tracing::debug;

use crate::error::{PulseError, Result};
use crate::periodicity::{autocorrelate, find_best_lag};
use crate::quality::signal_quality;
use crate::series::SampleSeries;
use crate::signal::biquad::bandpass_filter;
use crate::signal::detrend::remove_mean;
use crate::signal::resample::resample;

use super::config::AnalysisConfig;
use super::types::AnalysisResult;

/// Run the full analysis pipeline over one acquisition snapshot.
///
/// Stages run strictly in sequence: resample, detrend, bandpass (two forward
/// passes), quality estimation, autocorrelation, lag-to-BPM conversion.
/// Returns the numeric result even when it will be rejected for
/// presentation; [`analyze_accepted`] applies the acceptance gate.
///
/// Fails with `LowSamples` before any numeric stage when the snapshot is
/// shorter than `config.min_samples`, and with `InvalidBand` on a bad band.
pub fn analyze_series(series: &SampleSeries, config: &AnalysisConfig) -> Result<AnalysisResult> {
    config.validate()?;

    if series.len() < config.min_samples {
        return Err(PulseError::LowSamples {
            count: series.len(),
            required: config.min_samples,
        });
    }

    let uniform = resample(series, config.fallback_sample_rate_hz);
    let fs = uniform.sample_rate_hz;

    let mut detrended = uniform.samples;
    remove_mean(&mut detrended);

    let filtered = bandpass_filter(&detrended, config.band_low_hz, config.band_high_hz, fs);
    let quality = signal_quality(&filtered);

    let ac = autocorrelate(&filtered);
    let bpm = match find_best_lag(&ac, fs, config.band_low_hz, config.band_high_hz) {
        Some(lag) => 60.0 * fs / lag as f64,
        None => AnalysisResult::UNDETERMINED_BPM,
    };

    debug!(bpm, quality, rate_hz = fs, "analysis complete");
    Ok(AnalysisResult { bpm, quality })
}

/// Analyze and apply the acceptance gate.
///
/// A result with `bpm <= 0` or `quality < config.min_quality` is mapped to
/// `LowSignal`, carrying the computed values for diagnostics.
pub fn analyze_accepted(series: &SampleSeries, config: &AnalysisConfig) -> Result<AnalysisResult> {
    let result = analyze_series(series, config)?;
    if result.is_accepted(config.min_quality) {
        Ok(result)
    } else {
        Err(PulseError::LowSignal {
            bpm: result.bpm,
            quality: result.quality,
        })
    }
}
