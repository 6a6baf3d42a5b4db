//! Grubbs' test configuration.

use serde::{Deserialize, Serialize};

use crate::constants::DEFAULT_ALPHA;

/// Configuration for the iterative Grubbs' test.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct GrubbsConfig {
    /// Significance level; must be a tabulated level. Default: 0.05.
    pub alpha: Option<f64>,
}

impl GrubbsConfig {
    /// Returns the effective significance level, defaulting to 0.05.
    pub fn effective_alpha(&self) -> f64 {
        self.alpha.unwrap_or(DEFAULT_ALPHA)
    }
}
