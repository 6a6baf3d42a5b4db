//! Error handling for Outlier.
//! One error enum per subsystem, `thiserror` only, zero `anyhow`.

pub mod config_error;
pub mod detection_error;
pub mod error_code;
pub mod stats_error;
pub mod table_error;

pub use config_error::ConfigError;
pub use detection_error::DetectionError;
pub use error_code::OutlierErrorCode;
pub use stats_error::StatsError;
pub use table_error::TableError;
