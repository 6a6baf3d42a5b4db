//! k-NN scoring configuration.

use serde::{Deserialize, Serialize};

use crate::constants::{DEFAULT_KNN_K, DEFAULT_KNN_SWEEP};

/// Configuration for k-th nearest neighbor scoring.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct KnnConfig {
    /// Neighbor order (1-based, self included). Default: 2.
    pub k: Option<usize>,
    /// Neighbor orders evaluated by a report. Default: [2, 3].
    #[serde(default)]
    pub sweep: Vec<usize>,
}

impl KnnConfig {
    /// Returns the effective neighbor order, defaulting to 2.
    pub fn effective_k(&self) -> usize {
        self.k.unwrap_or(DEFAULT_KNN_K)
    }

    /// Returns the report neighbor orders, defaulting to 2 and 3.
    pub fn effective_sweep(&self) -> Vec<usize> {
        if self.sweep.is_empty() {
            DEFAULT_KNN_SWEEP.to_vec()
        } else {
            self.sweep.clone()
        }
    }
}
