//! Full outlier report over one dataset.
//!
//! Runs every configured z-score threshold, every configured k-NN order and
//! Grubbs' test, and returns the results as one serializable value.

use serde::{Deserialize, Serialize};
use tracing::info;

use outlier_core::errors::DetectionError;

use super::detector::OutlierDetector;
use super::grubbs::GrubbsOutcome;
use super::types::{KnnScore, OutlierResult};
use crate::stats::summary::{summarize, Summary};

/// Z-score outliers at one threshold.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ThresholdSweep {
    pub threshold: f64,
    pub outliers: Vec<OutlierResult>,
}

/// k-NN scores at one neighbor order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NeighborSweep {
    pub k: usize,
    pub scores: Vec<KnnScore>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OutlierReport {
    pub summary: Summary,
    pub zscore: Vec<ThresholdSweep>,
    pub knn: Vec<NeighborSweep>,
    pub grubbs: GrubbsOutcome,
}

impl OutlierReport {
    /// Build a report with `detector`'s configuration.
    ///
    /// Fails on the first detector error; no partial report is returned.
    pub fn build(detector: &OutlierDetector, values: &[f64]) -> Result<Self, DetectionError> {
        let config = detector.config();
        let summary = summarize(values)?;

        let zscore = config
            .zscore
            .effective_sweep()
            .into_iter()
            .map(|threshold| {
                Ok(ThresholdSweep {
                    threshold,
                    outliers: detector.zscore_with(values, threshold)?,
                })
            })
            .collect::<Result<Vec<_>, DetectionError>>()?;

        let knn = config
            .knn
            .effective_sweep()
            .into_iter()
            .map(|k| {
                Ok(NeighborSweep {
                    k,
                    scores: detector.knn_with(values, k)?,
                })
            })
            .collect::<Result<Vec<_>, DetectionError>>()?;

        let grubbs = detector.grubbs(values)?;

        info!(
            n = summary.count,
            zscore_sweeps = zscore.len(),
            knn_sweeps = knn.len(),
            grubbs_removed = grubbs.removed.len(),
            "outlier report built"
        );

        Ok(Self {
            summary,
            zscore,
            knn,
            grubbs,
        })
    }

    /// Pretty-printed JSON for consumers that render or store reports.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}
