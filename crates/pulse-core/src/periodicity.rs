/// Autocorrelation normalized by the full signal length.
///
/// `ac[lag] = sum(x[i] * x[i + lag]) / N` for `lag` in `0..N`. Naive O(N²);
/// N is bounded by the acquisition duration times the inferred rate, so
/// this stays well under a few thousand samples.
pub fn autocorrelate(signal: &[f64]) -> Vec<f64> {
    let n = signal.len();
    (0..n)
        .map(|lag| {
            let mut sum = 0.0;
            for i in 0..n - lag {
                sum += signal[i] * signal[i + lag];
            }
            sum / n as f64
        })
        .collect()
}

/// Lag of the autocorrelation maximum within the plausible heart-rate range.
///
/// The search covers `max(1, floor(fs/high_hz))..=min(N-1, ceil(fs/low_hz))`.
/// The raw maximum wins, with the smallest lag taken on ties. Returns `None`
/// when the range is empty or no lag in it evaluates to a finite value.
pub fn find_best_lag(ac: &[f64], sample_rate_hz: f64, low_hz: f64, high_hz: f64) -> Option<usize> {
    if ac.is_empty() {
        return None;
    }

    let lag_min = ((sample_rate_hz / high_hz).floor() as usize).max(1);
    let lag_max = ((sample_rate_hz / low_hz).ceil() as usize).min(ac.len() - 1);

    let mut best: Option<(usize, f64)> = None;
    for lag in lag_min..=lag_max {
        let value = ac[lag];
        if !value.is_finite() {
            continue;
        }
        match best {
            Some((_, best_value)) if value <= best_value => {}
            _ => best = Some((lag, value)),
        }
    }

    best.map(|(lag, _)| lag)
}
