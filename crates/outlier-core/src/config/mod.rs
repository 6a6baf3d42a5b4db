//! Configuration system for Outlier.
//! TOML-based, 4-layer resolution: CLI > env > project > user > defaults.

pub mod grubbs_config;
pub mod knn_config;
pub mod outlier_config;
pub mod zscore_config;

pub use grubbs_config::GrubbsConfig;
pub use knn_config::KnnConfig;
pub use outlier_config::{CliOverrides, OutlierConfig};
pub use zscore_config::ZScoreConfig;
