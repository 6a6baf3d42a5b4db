//! # outlier-core
//!
//! Foundation crate for the Outlier detection engine.
//! Defines errors, config, tracing setup, and constants.
//! `outlier-analysis` depends on this.

pub mod config;
pub mod constants;
pub mod errors;
pub mod tracing;

pub use config::OutlierConfig;
pub use errors::{ConfigError, DetectionError, OutlierErrorCode, StatsError, TableError};
