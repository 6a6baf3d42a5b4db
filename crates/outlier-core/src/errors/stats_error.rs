//! Summary statistics errors.

use super::error_code::{self, OutlierErrorCode};

/// Errors raised while computing descriptive statistics.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum StatsError {
    #[error("Statistics require at least one value")]
    EmptyInput,

    #[error("Value at index {index} is NaN or infinite")]
    NonFinite { index: usize },
}

impl OutlierErrorCode for StatsError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::EmptyInput => error_code::EMPTY_INPUT,
            Self::NonFinite { .. } => error_code::NON_FINITE_INPUT,
        }
    }
}
