mod common;

use approx::assert_relative_eq;
use pulse_core::periodicity::{autocorrelate, find_best_lag};

use common::XorShift;

#[test]
fn zero_lag_is_mean_energy() {
    let signal = [1.0, -2.0, 3.0, -4.0];
    let ac = autocorrelate(&signal);
    assert_eq!(ac.len(), 4);
    assert_relative_eq!(ac[0], (1.0 + 4.0 + 9.0 + 16.0) / 4.0);
}

#[test]
fn periodic_signal_peaks_at_its_period() {
    let rate_hz = 30.0;
    let freq_hz = 1.2;
    let signal: Vec<f64> = (0..900)
        .map(|i| (2.0 * std::f64::consts::PI * freq_hz * i as f64 / rate_hz).sin())
        .collect();

    let ac = autocorrelate(&signal);
    let lag = find_best_lag(&ac, rate_hz, 0.7, 4.0).expect("lag in range");

    // One period of 1.2 Hz at 30 Hz is 25 samples.
    assert_relative_eq!(lag as f64, rate_hz / freq_hz, max_relative = 0.05);
}

#[test]
fn best_lag_stays_inside_the_band() {
    let rate_hz: f64 = 30.0;
    let lag_min = (rate_hz / 4.0).floor() as usize;
    let lag_max = (rate_hz / 0.7).ceil() as usize;

    for seed in 1..=25 {
        let mut rng = XorShift::new(seed);
        let signal: Vec<f64> = (0..600).map(|_| rng.next_signed()).collect();
        let ac = autocorrelate(&signal);
        let lag = find_best_lag(&ac, rate_hz, 0.7, 4.0).expect("lag in range");
        assert!(
            (lag_min.max(1)..=lag_max).contains(&lag),
            "seed {seed}: lag {lag} outside [{lag_min}, {lag_max}]"
        );
    }
}

#[test]
fn empty_or_too_short_range_is_undetermined() {
    assert_eq!(find_best_lag(&[], 30.0, 0.7, 4.0), None);
    // Three lags available but the band starts at lag 7.
    let ac = [1.0, 0.5, 0.2];
    assert_eq!(find_best_lag(&ac, 30.0, 0.7, 4.0), None);
}

#[test]
fn non_finite_values_are_skipped() {
    let mut ac = vec![0.0; 64];
    ac[10] = f64::NAN;
    ac[12] = 3.0;
    let lag = find_best_lag(&ac, 30.0, 0.7, 4.0);
    assert_eq!(lag, Some(12));
}

#[test]
fn ties_resolve_to_the_smallest_lag() {
    let mut ac = vec![0.0; 64];
    ac[9] = 2.0;
    ac[21] = 2.0;
    assert_eq!(find_best_lag(&ac, 30.0, 0.7, 4.0), Some(9));
}
