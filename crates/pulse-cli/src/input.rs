use std::path::Path;

use anyhow::{bail, Context, Result};
use pulse_core::series::{Sample, SampleSeries};

/// Load a recorded series from a CSV file of `timestamp_ms,luminance` rows.
///
/// Blank lines and `#` comments are skipped; a single textual header row is
/// tolerated.
pub fn load_series(path: &Path) -> Result<SampleSeries> {
    let contents = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;

    let mut samples = Vec::new();
    for (index, line) in contents.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        let mut fields = line.split(',');
        let (Some(ts), Some(lum)) = (fields.next(), fields.next()) else {
            bail!(
                "{}:{}: expected `timestamp_ms,luminance`",
                path.display(),
                index + 1
            );
        };

        let ts = ts.trim();
        if samples.is_empty() && ts.parse::<i64>().is_err() {
            // Header row.
            continue;
        }

        let timestamp_ms = ts
            .parse()
            .with_context(|| format!("{}:{}: bad timestamp `{ts}`", path.display(), index + 1))?;
        let luminance = lum.trim().parse().with_context(|| {
            format!(
                "{}:{}: bad luminance `{}`",
                path.display(),
                index + 1,
                lum.trim()
            )
        })?;

        samples.push(Sample {
            timestamp_ms,
            luminance,
        });
    }

    Ok(SampleSeries::new(samples))
}
