//! Detection errors.

use super::error_code::{self, OutlierErrorCode};
use super::{StatsError, TableError};

/// Errors that can occur while running an outlier detector.
/// Aggregates subsystem errors via `From` conversions.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum DetectionError {
    #[error("Statistics error: {0}")]
    Stats(#[from] StatsError),

    #[error("Critical value error: {0}")]
    Table(#[from] TableError),

    #[error("Neighbor order k={k} must be in 1..={n}")]
    InvalidNeighborOrder { k: usize, n: usize },

    #[error("Distance between {min} and {max} exceeds the f64 range")]
    DistanceOverflow { min: f64, max: f64 },
}

impl OutlierErrorCode for DetectionError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::Stats(e) => e.error_code(),
            Self::Table(e) => e.error_code(),
            Self::InvalidNeighborOrder { .. } => error_code::INVALID_NEIGHBOR_ORDER,
            Self::DistanceOverflow { .. } => error_code::DISTANCE_OVERFLOW,
        }
    }
}
