use tracing::debug;

use crate::consts::MIN_UNIFORM_LEN;
use crate::series::{SampleSeries, UniformSignal};

/// Infer the sampling rate from the median spacing of consecutive capture
/// times. Falls back to `fallback_hz` when the median delta is not positive
/// (duplicate or single timestamps).
pub fn infer_sample_rate(times_s: &[f64], fallback_hz: f64) -> f64 {
    let mut deltas: Vec<f64> = times_s.windows(2).map(|w| w[1] - w[0]).collect();
    if deltas.is_empty() {
        return fallback_hz;
    }
    deltas.sort_by(f64::total_cmp);
    let median = deltas[deltas.len() / 2];
    if median > 0.0 {
        1.0 / median
    } else {
        fallback_hz
    }
}

/// Resample an irregular series onto a uniform grid by linear interpolation.
///
/// The output length is `max(MIN_UNIFORM_LEN, round(duration * fs))`. Target
/// times outside the original span are clamped to the end samples. The
/// caller guarantees a non-empty series.
pub fn resample(series: &SampleSeries, fallback_hz: f64) -> UniformSignal {
    let times = series.timestamps_seconds();
    let values = series.luminances();

    let fs = infer_sample_rate(&times, fallback_hz);
    let duration = times[times.len() - 1] - times[0];
    let n = ((duration * fs).round() as usize).max(MIN_UNIFORM_LEN);
    debug!(rate_hz = fs, len = n, "resampling onto uniform grid");

    let mut samples = Vec::with_capacity(n);
    for k in 0..n {
        let tt = times[0] + k as f64 / fs;
        samples.push(interpolate_at(&times, &values, tt));
    }

    UniformSignal {
        samples,
        sample_rate_hz: fs,
    }
}

/// Linear interpolation at time `tt` between the bracketing originals,
/// found by linear scan (`t[j] <= tt < t[j+1]`, clamped at the ends).
fn interpolate_at(times: &[f64], values: &[f64], tt: f64) -> f64 {
    let mut j = 0;
    while j < times.len() - 1 && times[j + 1] < tt {
        j += 1;
    }
    let jb = (j + 1).min(times.len() - 1);

    let (ta, va) = (times[j], values[j]);
    let (tb, vb) = (times[jb], values[jb]);

    if tb > ta {
        va + (vb - va) * (tt - ta) / (tb - ta)
    } else {
        va
    }
}
