use crate::consts::SMOOTHING_WINDOW;
use crate::signal::smoothing::moving_average;

/// Score how much of the filtered signal's energy survives a short moving
/// average, as a proxy for waveform cleanliness.
///
/// A slow, clean oscillation passes the smoother nearly untouched, so the
/// ratio approaches 1; wide-band noise loses most of its energy. The score
/// is clamped to `[0, 1]` and is 0 for a zero-energy signal.
pub fn signal_quality(filtered: &[f64]) -> f64 {
    let total_energy: f64 = filtered.iter().map(|v| v * v).sum();
    if total_energy > 0.0 {
        let smoothed = moving_average(filtered, SMOOTHING_WINDOW);
        let band_energy: f64 = smoothed.iter().map(|v| v * v).sum();
        (band_energy / total_energy).min(1.0)
    } else {
        0.0
    }
}
