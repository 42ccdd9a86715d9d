/// Subtract the arithmetic mean in place, removing the DC offset left by
/// ambient light and sensor bias.
pub fn remove_mean(samples: &mut [f64]) {
    if samples.is_empty() {
        return;
    }
    let mean = samples.iter().sum::<f64>() / samples.len() as f64;
    for s in samples.iter_mut() {
        *s -= mean;
    }
}
