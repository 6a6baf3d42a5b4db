//! Z-score threshold configuration.

use serde::{Deserialize, Serialize};

use crate::constants::{DEFAULT_Z_SWEEP, DEFAULT_Z_THRESHOLD};

/// Configuration for the fixed-multiplier z-score detector.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct ZScoreConfig {
    /// Multiplier `w` for `|x - mean| / stddev > w`. Default: 2.0.
    pub threshold: Option<f64>,
    /// Thresholds evaluated by a report. Default: [1.0, 2.0, 3.0].
    #[serde(default)]
    pub sweep: Vec<f64>,
}

impl ZScoreConfig {
    /// Returns the effective threshold, defaulting to 2.0.
    pub fn effective_threshold(&self) -> f64 {
        self.threshold.unwrap_or(DEFAULT_Z_THRESHOLD)
    }

    /// Returns the report thresholds, defaulting to 1, 2 and 3.
    pub fn effective_sweep(&self) -> Vec<f64> {
        if self.sweep.is_empty() {
            DEFAULT_Z_SWEEP.to_vec()
        } else {
            self.sweep.clone()
        }
    }
}
