/// A single luminance observation delivered by the acquisition collaborator.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Sample {
    /// Capture time in milliseconds on the producer's clock. Non-decreasing
    /// within a series; duplicates are tolerated.
    pub timestamp_ms: i64,
    /// Mean luminance over the frame's region of interest, raw sensor units.
    pub luminance: f64,
}

/// Immutable snapshot of one acquisition window, in capture order.
#[derive(Clone, Debug, Default)]
pub struct SampleSeries {
    samples: Vec<Sample>,
}

impl SampleSeries {
    pub fn new(samples: Vec<Sample>) -> Self {
        Self { samples }
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    pub fn samples(&self) -> &[Sample] {
        &self.samples
    }

    /// Span between the first and last capture times, in seconds.
    pub fn duration_seconds(&self) -> f64 {
        match (self.samples.first(), self.samples.last()) {
            (Some(first), Some(last)) => (last.timestamp_ms - first.timestamp_ms) as f64 / 1000.0,
            _ => 0.0,
        }
    }

    /// Capture times converted to seconds.
    pub fn timestamps_seconds(&self) -> Vec<f64> {
        self.samples
            .iter()
            .map(|s| s.timestamp_ms as f64 / 1000.0)
            .collect()
    }

    /// Luminance values in capture order.
    pub fn luminances(&self) -> Vec<f64> {
        self.samples.iter().map(|s| s.luminance).collect()
    }
}

/// Signal resampled onto a uniform grid at an inferred rate.
///
/// Owned by a single analysis invocation and discarded afterwards.
#[derive(Clone, Debug)]
pub struct UniformSignal {
    /// Interpolated values, evenly spaced at `1 / sample_rate_hz`.
    pub samples: Vec<f64>,
    /// Inferred sampling rate in Hz.
    pub sample_rate_hz: f64,
}

impl UniformSignal {
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }
}
