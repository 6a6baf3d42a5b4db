//! Population mean and standard deviation.
//!
//! Standard deviation always uses divisor `n` so that Grubbs' test and the
//! z-score detector agree on the same data. The mean comes from `statrs`
//! (running-mean update, exact for constant input); the deviation is a
//! second pass around that mean so constant input gives exactly 0.
//! Inputs whose squared deviations overflow are rescaled into `[-1, 1]`
//! and recomputed, so any finite input yields a finite mean and deviation.

use serde::{Deserialize, Serialize};
use statrs::statistics::Statistics;

use outlier_core::errors::StatsError;

/// Count, mean and population standard deviation of a sample.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Summary {
    pub count: usize,
    pub mean: f64,
    pub std_dev: f64,
}

impl Summary {
    /// Absolute deviation of `value` from the mean.
    pub fn deviation(&self, value: f64) -> f64 {
        (value - self.mean).abs()
    }

    /// True when the standard deviation is a usable divisor.
    pub fn has_spread(&self) -> bool {
        self.std_dev.is_finite() && self.std_dev > 0.0
    }

    /// `|value - mean| / std_dev`, or `None` when the sample has no spread.
    pub fn normalized_deviation(&self, value: f64) -> Option<f64> {
        if !self.has_spread() {
            return None;
        }
        let dev = self.deviation(value);
        if dev.is_finite() {
            Some(dev / self.std_dev)
        } else {
            // `value - mean` overflowed; divide first.
            Some((value / self.std_dev - self.mean / self.std_dev).abs())
        }
    }
}

/// Fails on the first NaN or infinite element. Empty input passes.
pub fn ensure_finite(values: &[f64]) -> Result<(), StatsError> {
    match values.iter().position(|v| !v.is_finite()) {
        Some(index) => Err(StatsError::NonFinite { index }),
        None => Ok(()),
    }
}

fn check_input(values: &[f64]) -> Result<(), StatsError> {
    if values.is_empty() {
        return Err(StatsError::EmptyInput);
    }
    ensure_finite(values)
}

/// Arithmetic mean.
///
/// # Errors
/// `EmptyInput` for an empty slice, `NonFinite` if any value is NaN or infinite.
pub fn mean(values: &[f64]) -> Result<f64, StatsError> {
    check_input(values)?;
    Ok(moments(values).0)
}

/// Population standard deviation: square root of the mean squared
/// deviation from the mean.
///
/// # Errors
/// Same as [`mean`].
pub fn population_std_dev(values: &[f64]) -> Result<f64, StatsError> {
    check_input(values)?;
    Ok(moments(values).1)
}

/// Computes count, mean and population standard deviation in one call.
pub fn summarize(values: &[f64]) -> Result<Summary, StatsError> {
    check_input(values)?;
    let (mean, std_dev) = moments(values);
    Ok(Summary {
        count: values.len(),
        mean,
        std_dev,
    })
}

/// Mean and population standard deviation of finite, non-empty `values`.
fn moments(values: &[f64]) -> (f64, f64) {
    let mean = values.iter().mean();
    let std_dev = std_dev_around(values, mean);
    if mean.is_finite() && std_dev.is_finite() {
        return (mean, std_dev);
    }

    // Overflow implies a non-zero element, so `scale > 0`.
    let scale = values.iter().fold(0.0_f64, |acc, v| acc.max(v.abs()));
    let scaled: Vec<f64> = values.iter().map(|v| v / scale).collect();
    let mean = scaled.iter().mean();
    (mean * scale, std_dev_around(&scaled, mean) * scale)
}

fn std_dev_around(values: &[f64], mean: f64) -> f64 {
    let sum_sq: f64 = values.iter().map(|v| (v - mean).powi(2)).sum();
    (sum_sq / values.len() as f64).sqrt()
}
