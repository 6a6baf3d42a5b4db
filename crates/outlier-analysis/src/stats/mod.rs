//! Descriptive statistics shared by the detectors.

pub mod summary;

pub use summary::{ensure_finite, mean, population_std_dev, summarize, Summary};
