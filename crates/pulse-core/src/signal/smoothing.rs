/// Moving average over a centered window of `window` samples.
///
/// Windows at the signal boundaries are truncated to the available
/// neighbors rather than zero-padded.
pub fn moving_average(signal: &[f64], window: usize) -> Vec<f64> {
    if signal.is_empty() {
        return Vec::new();
    }

    let half = window / 2;
    (0..signal.len())
        .map(|i| {
            let start = i.saturating_sub(half);
            let end = (i + half).min(signal.len() - 1);
            let slice = &signal[start..=end];
            slice.iter().sum::<f64>() / slice.len() as f64
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn boundary_windows_are_truncated() {
        let out = moving_average(&[3.0, 0.0, 0.0, 0.0, 6.0], 3);
        // First and last windows average two samples, not three.
        assert_eq!(out[0], 1.5);
        assert_eq!(out[4], 3.0);
        assert_eq!(out[2], 0.0);
    }

    #[test]
    fn empty_input_yields_empty_output() {
        assert!(moving_average(&[], 3).is_empty());
    }
}
