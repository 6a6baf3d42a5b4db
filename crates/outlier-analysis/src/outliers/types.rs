//! Core types for outlier detection.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A single data point flagged as an outlier.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OutlierResult {
    /// Index into the caller's original values array.
    pub index: usize,
    /// The actual value that was flagged.
    pub value: f64,
    /// Test statistic (Grubbs' G or |z|).
    pub test_statistic: f64,
    /// Value the statistic had to exceed (critical G or the multiplier w).
    pub threshold: f64,
    /// Method that detected this outlier.
    pub method: OutlierMethod,
}

/// Outlier score for one data point: distance to its k-th nearest neighbor.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct KnnScore {
    /// Index into the caller's original values array.
    pub index: usize,
    pub value: f64,
    /// Non-negative distance; larger means more isolated.
    pub score: f64,
}

/// Statistical method used for outlier detection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OutlierMethod {
    Grubbs,
    ZScore,
    KNearestNeighbor,
}

impl OutlierMethod {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Grubbs => "grubbs",
            Self::ZScore => "z_score",
            Self::KNearestNeighbor => "k_nearest_neighbor",
        }
    }
}

impl fmt::Display for OutlierMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Extracts the flagged values, keeping result order.
pub fn outlier_values(results: &[OutlierResult]) -> Vec<f64> {
    results.iter().map(|r| r.value).collect()
}
