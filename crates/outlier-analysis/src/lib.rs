//! # outlier-analysis
//!
//! Univariate outlier detection: summary statistics, an iterative
//! table-driven Grubbs' test, fixed-multiplier z-score thresholds, and
//! k-th nearest neighbor distance scores.
//!
//! Every detector is a pure function over a borrowed `&[f64]` and returns
//! structured results; nothing here prints or writes files.

pub mod outliers;
pub mod stats;

pub use outliers::{
    CriticalValueTable, GrubbsOutcome, KnnScore, OutlierDetector, OutlierMethod, OutlierReport,
    OutlierResult, Termination,
};
pub use stats::Summary;
