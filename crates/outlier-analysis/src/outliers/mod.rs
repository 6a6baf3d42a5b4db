//! Outlier Detection — three independent methods over one-dimensional data.
//!
//! - Grubbs' test: iteratively removes the most extreme point while its
//!   statistic exceeds a tabulated critical value
//! - Z-Score: flags points more than `w` population standard deviations
//!   from the mean
//! - k-NN: scores every point by the distance to its k-th nearest neighbor
//!
//! `OutlierDetector` runs them with configured parameters and
//! `OutlierReport` bundles a full sweep into one serializable value.

pub mod critical_values;
pub mod detector;
pub mod grubbs;
pub mod knn;
pub mod report;
pub mod types;
pub mod zscore;

pub use critical_values::{CriticalValueTable, LevelRow};
pub use detector::OutlierDetector;
pub use grubbs::{GrubbsOutcome, Termination};
pub use report::{NeighborSweep, OutlierReport, ThresholdSweep};
pub use types::{KnnScore, OutlierMethod, OutlierResult};
