mod common;

use approx::assert_abs_diff_eq;
use pulse_core::quality::signal_quality;

use common::XorShift;

#[test]
fn zero_signal_scores_zero() {
    assert_abs_diff_eq!(signal_quality(&vec![0.0; 128]), 0.0);
    assert_abs_diff_eq!(signal_quality(&[]), 0.0);
}

#[test]
fn slow_oscillation_scores_high() {
    let sine: Vec<f64> = (0..900)
        .map(|i| (2.0 * std::f64::consts::PI * 1.2 * i as f64 / 30.0).sin())
        .collect();
    let q = signal_quality(&sine);
    assert!(q > 0.9, "slow sine should keep its energy, got {q}");
    assert!(q <= 1.0);
}

#[test]
fn wide_band_noise_scores_low() {
    // A 3-sample average keeps roughly a third of white-noise energy.
    let mut rng = XorShift::new(11);
    let noise: Vec<f64> = (0..4096).map(|_| rng.next_signed()).collect();
    let q = signal_quality(&noise);
    assert!(q < 0.5, "white noise should lose most energy, got {q}");
    assert!(q > 0.0);
}

#[test]
fn score_is_bounded_for_arbitrary_signals() {
    for seed in 1..=20 {
        let mut rng = XorShift::new(seed);
        let n = 64 + (seed as usize * 37) % 400;
        let signal: Vec<f64> = (0..n).map(|_| rng.next_signed() * 1e3).collect();
        let q = signal_quality(&signal);
        assert!((0.0..=1.0).contains(&q), "seed {seed}: quality {q}");
    }
}

#[test]
fn alternating_signal_scores_near_zero() {
    // The fastest representable oscillation averages to almost nothing.
    let alternating: Vec<f64> = (0..300).map(|i| if i % 2 == 0 { 1.0 } else { -1.0 }).collect();
    let q = signal_quality(&alternating);
    assert!(q < 0.15, "Nyquist-rate signal should smooth away, got {q}");
}
