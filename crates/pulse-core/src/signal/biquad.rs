use std::f64::consts::PI;

/// Normalized coefficients of a second-order IIR section (`a0` divided out).
#[derive(Clone, Copy, Debug)]
pub struct BiquadCoefficients {
    pub b0: f64,
    pub b1: f64,
    pub b2: f64,
    pub a1: f64,
    pub a2: f64,
}

impl BiquadCoefficients {
    /// Constant-skirt-gain bandpass section centered at `center_hz`.
    ///
    /// RBJ cookbook form: `b0 = alpha`, `b1 = 0`, `b2 = -alpha`,
    /// `a0 = 1 + alpha`, `a1 = -2 cos(w0)`, `a2 = 1 - alpha`.
    pub fn bandpass(center_hz: f64, q: f64, sample_rate_hz: f64) -> Self {
        let w0 = 2.0 * PI * center_hz / sample_rate_hz;
        let alpha = w0.sin() / (2.0 * q);
        let a0 = 1.0 + alpha;

        Self {
            b0: alpha / a0,
            b1: 0.0,
            b2: -alpha / a0,
            a1: -2.0 * w0.cos() / a0,
            a2: (1.0 - alpha) / a0,
        }
    }

    /// Run the section over `input` with zero initial state.
    pub fn apply(&self, input: &[f64]) -> Vec<f64> {
        let mut output = Vec::with_capacity(input.len());
        let (mut x1, mut x2, mut y1, mut y2) = (0.0, 0.0, 0.0, 0.0);

        for &x0 in input {
            let y0 = self.b0 * x0 + self.b1 * x1 + self.b2 * x2 - self.a1 * y1 - self.a2 * y2;
            output.push(y0);
            x2 = x1;
            x1 = x0;
            y2 = y1;
            y1 = y0;
        }

        output
    }
}

/// Bandpass-filter `signal` to the `low_hz..high_hz` band.
///
/// A single biquad designed at the geometric-mean center frequency with
/// `Q = fc / (high - low)`, applied twice in the forward direction to
/// steepen the rolloff. Both passes start from zero state; this is not a
/// zero-phase (forward-reverse) filter.
pub fn bandpass_filter(signal: &[f64], low_hz: f64, high_hz: f64, sample_rate_hz: f64) -> Vec<f64> {
    let center_hz = (low_hz * high_hz).sqrt();
    let q = center_hz / (high_hz - low_hz);
    let coeffs = BiquadCoefficients::bandpass(center_hz, q, sample_rate_hz);

    coeffs.apply(&coeffs.apply(signal))
}
