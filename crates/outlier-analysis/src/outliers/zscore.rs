//! Z-Score with a fixed multiplier (single pass, no masking).
//!
//! A point is an outlier when `|x - mean| / stddev > w`, using the
//! population standard deviation of the whole dataset.

use tracing::debug;

use outlier_core::errors::DetectionError;

use super::types::{OutlierMethod, OutlierResult};
use crate::stats::summary::summarize;

/// Detect outliers using a fixed z-score multiplier.
///
/// `values`: the data points to analyze.
/// `threshold`: multiplier `w`; the comparison is strict, so `w = 0` flags
/// every point not exactly at the mean.
///
/// Returns outlier results in original order. A dataset with zero spread
/// has no outliers.
pub fn detect(values: &[f64], threshold: f64) -> Result<Vec<OutlierResult>, DetectionError> {
    let summary = summarize(values)?;
    if !summary.has_spread() {
        debug!(n = values.len(), "z-score skipped: zero standard deviation");
        return Ok(Vec::new());
    }

    let outliers: Vec<OutlierResult> = values
        .iter()
        .enumerate()
        .filter_map(|(index, &value)| {
            let z = summary.normalized_deviation(value)?;
            (z > threshold).then_some(OutlierResult {
                index,
                value,
                test_statistic: z,
                threshold,
                method: OutlierMethod::ZScore,
            })
        })
        .collect();

    debug!(
        n = values.len(),
        threshold,
        found = outliers.len(),
        "z-score detection complete"
    );
    Ok(outliers)
}

/// Like [`detect`], returning only the flagged values.
pub fn detect_values(values: &[f64], threshold: f64) -> Result<Vec<f64>, DetectionError> {
    Ok(detect(values, threshold)?
        .into_iter()
        .map(|o| o.value)
        .collect())
}
