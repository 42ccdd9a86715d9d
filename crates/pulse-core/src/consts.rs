/// Lower edge of the physiological heart-rate band, in Hz (42 BPM).
pub const BAND_LOW_HZ: f64 = 0.7;

/// Upper edge of the physiological heart-rate band, in Hz (240 BPM).
pub const BAND_HIGH_HZ: f64 = 4.0;

/// Sampling rate assumed when timestamp spacing is degenerate (all-zero
/// deltas from duplicate timestamps). Matches typical camera frame delivery.
pub const FALLBACK_SAMPLE_RATE_HZ: f64 = 30.0;

/// Minimum number of raw samples required before any numeric stage runs.
pub const MIN_SAMPLE_COUNT: usize = 10;

/// Minimum length of the uniform signal produced by the resampler.
pub const MIN_UNIFORM_LEN: usize = 32;

/// Quality score below which a computed BPM is rejected.
pub const MIN_QUALITY: f64 = 0.5;

/// Moving-average window used by the quality estimator.
pub const SMOOTHING_WINDOW: usize = 3;

/// A progress event is emitted once per this many appended samples.
pub const PROGRESS_SAMPLE_INTERVAL: usize = 10;

/// Default acquisition window length, in seconds.
pub const DEFAULT_SCAN_DURATION_SECS: u64 = 30;
