//! Critical value table errors.

use super::error_code::{self, OutlierErrorCode};

/// Errors raised by exact-match lookups into a critical value table.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum TableError {
    #[error("Significance level {alpha} is not tabulated")]
    UnsupportedLevel { alpha: f64 },

    #[error("No critical value for sample size {n} at significance level {alpha}")]
    UnsupportedSampleSize { alpha: f64, n: usize },
}

impl OutlierErrorCode for TableError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::UnsupportedLevel { .. } => error_code::UNSUPPORTED_LEVEL,
            Self::UnsupportedSampleSize { .. } => error_code::UNSUPPORTED_SAMPLE_SIZE,
        }
    }
}
