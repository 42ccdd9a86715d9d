use serde::{Deserialize, Serialize};

/// Final output of one analysis pass over an acquisition snapshot.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResult {
    /// Estimated heart rate in beats per minute; `-1.0` when the dominant
    /// periodicity could not be determined.
    pub bpm: f64,
    /// Heuristic waveform cleanliness in `[0, 1]`.
    pub quality: f64,
}

impl AnalysisResult {
    /// BPM value meaning "could not determine".
    pub const UNDETERMINED_BPM: f64 = -1.0;

    /// Whether the estimate passes the presentation gate.
    pub fn is_accepted(&self, min_quality: f64) -> bool {
        self.bpm > 0.0 && self.quality >= min_quality
    }
}
