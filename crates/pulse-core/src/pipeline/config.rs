use serde::{Deserialize, Serialize};

use crate::consts::{
    BAND_HIGH_HZ, BAND_LOW_HZ, FALLBACK_SAMPLE_RATE_HZ, MIN_QUALITY, MIN_SAMPLE_COUNT,
};
use crate::error::{PulseError, Result};

/// Tunable parameters of the analysis pipeline.
///
/// The defaults reproduce the stock scanner: a 0.7–4.0 Hz band (42–240 BPM),
/// 30 Hz fallback rate, ten-sample minimum and a 0.5 quality floor.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalysisConfig {
    /// Lower edge of the heart-rate band, in Hz.
    pub band_low_hz: f64,
    /// Upper edge of the heart-rate band, in Hz.
    pub band_high_hz: f64,
    /// Sampling rate assumed when timestamp spacing is degenerate.
    pub fallback_sample_rate_hz: f64,
    /// Minimum raw sample count required before analysis runs.
    pub min_samples: usize,
    /// Quality score below which a computed BPM is rejected.
    pub min_quality: f64,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            band_low_hz: BAND_LOW_HZ,
            band_high_hz: BAND_HIGH_HZ,
            fallback_sample_rate_hz: FALLBACK_SAMPLE_RATE_HZ,
            min_samples: MIN_SAMPLE_COUNT,
            min_quality: MIN_QUALITY,
        }
    }
}

impl AnalysisConfig {
    /// Reject a non-positive or inverted band before any filter is designed.
    pub fn validate(&self) -> Result<()> {
        if self.band_low_hz <= 0.0 || self.band_high_hz <= self.band_low_hz {
            return Err(PulseError::InvalidBand {
                low_hz: self.band_low_hz,
                high_hz: self.band_high_hz,
            });
        }
        Ok(())
    }

    /// The band expressed as a BPM range, for display.
    pub fn bpm_range(&self) -> (f64, f64) {
        (60.0 * self.band_low_hz, 60.0 * self.band_high_hz)
    }
}
