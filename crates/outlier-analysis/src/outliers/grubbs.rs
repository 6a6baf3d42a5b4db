//! Iterative Grubbs' test (n ≥ 3, one outlier removed per pass).
//!
//! Each pass computes `G = max|x - mean| / stddev` over the remaining
//! points and removes the most extreme one while `G` exceeds the tabulated
//! critical value for the current sample size. Standard deviation is the
//! population one (divisor `n`), matching the critical value table.

use serde::{Deserialize, Serialize};
use tracing::debug;

use outlier_core::constants::GRUBBS_MIN_SAMPLE_SIZE;
use outlier_core::errors::{DetectionError, TableError};

use super::critical_values::CriticalValueTable;
use super::types::{OutlierMethod, OutlierResult};
use crate::stats::summary::{ensure_finite, summarize, Summary};

/// Why the removal loop stopped. Every variant is a successful run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "reason")]
pub enum Termination {
    /// The most extreme point did not exceed the critical value.
    NoOutlier,
    /// The remaining points are all equal, so `G` is undefined.
    ZeroVariance,
    /// Fewer than 3 points remain.
    BelowMinimumSize,
    /// The table has no critical value for the current sample size.
    TableExhausted { n: usize },
}

/// Result of running Grubbs' test to completion.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GrubbsOutcome {
    /// Points that survived, in their original relative order.
    pub retained: Vec<f64>,
    /// Removed points in removal order, indexed into the original input.
    pub removed: Vec<OutlierResult>,
    pub termination: Termination,
}

impl GrubbsOutcome {
    /// Removed values in removal order.
    pub fn removed_values(&self) -> Vec<f64> {
        self.removed.iter().map(|r| r.value).collect()
    }

    pub fn has_outliers(&self) -> bool {
        !self.removed.is_empty()
    }
}

/// Run Grubbs' test against the built-in two-sided table.
///
/// `values`: the data points; left untouched.
/// `alpha`: significance level, 0.05 or 0.01.
pub fn test(values: &[f64], alpha: f64) -> Result<GrubbsOutcome, DetectionError> {
    test_with_table(values, alpha, CriticalValueTable::grubbs_two_sided())
}

/// Run Grubbs' test against a caller-supplied critical value table.
///
/// # Errors
/// `UnsupportedLevel` if `alpha` is not in `table` (checked before any
/// iteration), `NonFinite` if any value is NaN or infinite.
pub fn test_with_table(
    values: &[f64],
    alpha: f64,
    table: &CriticalValueTable,
) -> Result<GrubbsOutcome, DetectionError> {
    if !table.supports_level(alpha) {
        return Err(TableError::UnsupportedLevel { alpha }.into());
    }
    ensure_finite(values)?;

    // Parallel vectors: working values and their original indices.
    let mut working = values.to_vec();
    let mut indices: Vec<usize> = (0..values.len()).collect();
    let mut removed = Vec::new();

    let termination = loop {
        let n = working.len();
        if n < GRUBBS_MIN_SAMPLE_SIZE {
            break Termination::BelowMinimumSize;
        }

        let critical = match table.lookup(alpha, n) {
            Ok(critical) => critical,
            Err(TableError::UnsupportedSampleSize { .. }) => {
                break Termination::TableExhausted { n };
            }
            Err(e) => return Err(e.into()),
        };

        let summary = summarize(&working)?;
        let Some((pos, g)) = most_extreme(&working, &summary) else {
            break Termination::ZeroVariance;
        };
        if g <= critical {
            break Termination::NoOutlier;
        }

        let value = working.remove(pos);
        let index = indices.remove(pos);
        debug!(index, value, g, critical, n, "grubbs removed outlier");

        removed.push(OutlierResult {
            index,
            value,
            test_statistic: g,
            threshold: critical,
            method: OutlierMethod::Grubbs,
        });
    };

    debug!(
        removed = removed.len(),
        retained = working.len(),
        ?termination,
        "grubbs finished"
    );

    Ok(GrubbsOutcome {
        retained: working,
        removed,
        termination,
    })
}

/// Position and `G` of the point farthest from the mean. Ties resolve to
/// the lowest position. `None` when the sample has no spread.
fn most_extreme(values: &[f64], summary: &Summary) -> Option<(usize, f64)> {
    let mut best: Option<(usize, f64)> = None;
    for (pos, &v) in values.iter().enumerate() {
        let g = summary.normalized_deviation(v)?;
        if best.map_or(true, |(_, top)| g > top) {
            best = Some((pos, g));
        }
    }
    best
}
