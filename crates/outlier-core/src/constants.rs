//! Shared constants for the Outlier detection engine.

/// Default significance level for Grubbs' test.
pub const DEFAULT_ALPHA: f64 = 0.05;

/// Default z-score multiplier.
pub const DEFAULT_Z_THRESHOLD: f64 = 2.0;

/// Default z-score thresholds for report sweeps.
pub const DEFAULT_Z_SWEEP: [f64; 3] = [1.0, 2.0, 3.0];

/// Default neighbor order for k-NN scoring.
pub const DEFAULT_KNN_K: usize = 2;

/// Default neighbor orders for report sweeps.
pub const DEFAULT_KNN_SWEEP: [usize; 2] = [2, 3];

/// Smallest sample Grubbs' test can evaluate.
pub const GRUBBS_MIN_SAMPLE_SIZE: usize = 3;

/// Project config file name, looked up in the project root.
pub const PROJECT_CONFIG_FILE: &str = "outlier.toml";

/// Environment variable holding the tracing filter.
pub const LOG_ENV_VAR: &str = "OUTLIER_LOG";

/// 17-point reference dataset used by the report fixtures and benches.
pub const REFERENCE_DATASET: [f64; 17] = [
    152.36, 130.38, 101.54, 96.26, 88.03, 85.66, 83.62, 76.53, 74.36, 73.87, 73.36, 73.35, 68.26,
    65.25, 63.68, 63.05, 57.53,
];
