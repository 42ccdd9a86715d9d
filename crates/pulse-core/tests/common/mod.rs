use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use pulse_core::acquisition::{FrameSource, SampleSink};
use pulse_core::error::{PulseError, Result};
use pulse_core::series::{Sample, SampleSeries};

/// Base capture time for synthetic series, in milliseconds.
pub const BASE_TIMESTAMP_MS: i64 = 1_000_000;

/// xorshift64* generator; deterministic per seed.
pub struct XorShift(u64);

impl XorShift {
    pub fn new(seed: u64) -> Self {
        Self(seed.max(1))
    }

    pub fn next_u64(&mut self) -> u64 {
        let mut x = self.0;
        x ^= x >> 12;
        x ^= x << 25;
        x ^= x >> 27;
        self.0 = x;
        x.wrapping_mul(0x2545_f491_4f6c_dd1d)
    }

    /// Uniform in `[-1, 1)`.
    pub fn next_signed(&mut self) -> f64 {
        (self.next_u64() >> 11) as f64 / (1u64 << 52) as f64 - 1.0
    }
}

/// Evenly spaced series: `n` samples `dt_ms` apart, values from `f` over
/// elapsed seconds.
pub fn series_from_fn(n: usize, dt_ms: i64, mut f: impl FnMut(f64) -> f64) -> SampleSeries {
    let samples = (0..n)
        .map(|i| {
            let elapsed_ms = i as i64 * dt_ms;
            Sample {
                timestamp_ms: BASE_TIMESTAMP_MS + elapsed_ms,
                luminance: f(elapsed_ms as f64 / 1000.0),
            }
        })
        .collect();
    SampleSeries::new(samples)
}

/// Cardiac-like test input: a sinusoid at `freq_hz` riding on a DC offset,
/// with uniform noise of amplitude `noise_amp`.
pub fn sinusoid_series(
    duration_s: f64,
    dt_ms: i64,
    freq_hz: f64,
    noise_amp: f64,
    seed: u64,
) -> SampleSeries {
    let n = (duration_s * 1000.0 / dt_ms as f64) as usize + 1;
    let mut rng = XorShift::new(seed);
    series_from_fn(n, dt_ms, |t| {
        512.0 + 40.0 * (2.0 * std::f64::consts::PI * freq_hz * t).sin() + noise_amp * rng.next_signed()
    })
}

/// Source that delivers a prerecorded series synchronously on `start` and
/// records whether `stop` released it.
pub struct ScriptedSource {
    samples: Vec<Sample>,
    stopped: Arc<AtomicBool>,
}

impl ScriptedSource {
    pub fn new(series: &SampleSeries) -> (Self, Arc<AtomicBool>) {
        let stopped = Arc::new(AtomicBool::new(false));
        (
            Self {
                samples: series.samples().to_vec(),
                stopped: Arc::clone(&stopped),
            },
            stopped,
        )
    }
}

impl FrameSource for ScriptedSource {
    fn start(&mut self, sink: SampleSink) -> Result<()> {
        for sample in &self.samples {
            sink.push(sample.timestamp_ms, sample.luminance);
        }
        Ok(())
    }

    fn stop(&mut self) {
        self.stopped.store(true, Ordering::SeqCst);
    }
}

/// Source whose preconditions are never met.
pub struct DeniedSource;

impl FrameSource for DeniedSource {
    fn start(&mut self, _sink: SampleSink) -> Result<()> {
        Err(PulseError::PermissionMissing)
    }

    fn stop(&mut self) {}
}

/// Source whose device fails to bind.
pub struct BrokenSource;

impl FrameSource for BrokenSource {
    fn start(&mut self, _sink: SampleSink) -> Result<()> {
        Err(PulseError::AcquisitionFailed("device bind failed".into()))
    }

    fn stop(&mut self) {}
}
