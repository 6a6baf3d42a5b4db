//! Tests for the Outlier error handling system.

use std::collections::HashSet;

use outlier_core::errors::error_code::{self, OutlierErrorCode};
use outlier_core::errors::*;

#[test]
fn test_all_errors_have_error_code() {
    let stats = StatsError::EmptyInput;
    assert_eq!(stats.error_code(), error_code::EMPTY_INPUT);

    let non_finite = StatsError::NonFinite { index: 3 };
    assert_eq!(non_finite.error_code(), error_code::NON_FINITE_INPUT);

    let level = TableError::UnsupportedLevel { alpha: 0.1 };
    assert_eq!(level.error_code(), error_code::UNSUPPORTED_LEVEL);

    let size = TableError::UnsupportedSampleSize { alpha: 0.05, n: 21 };
    assert_eq!(size.error_code(), error_code::UNSUPPORTED_SAMPLE_SIZE);

    let knn = DetectionError::InvalidNeighborOrder { k: 0, n: 5 };
    assert_eq!(knn.error_code(), error_code::INVALID_NEIGHBOR_ORDER);

    let overflow = DetectionError::DistanceOverflow {
        min: -1e308,
        max: 1e308,
    };
    assert_eq!(overflow.error_code(), error_code::DISTANCE_OVERFLOW);

    let config = ConfigError::FileNotFound {
        path: "/tmp".into(),
    };
    assert_eq!(config.error_code(), error_code::CONFIG_ERROR);
}

#[test]
fn test_from_conversions() {
    let detection: DetectionError = StatsError::EmptyInput.into();
    assert!(matches!(detection, DetectionError::Stats(StatsError::EmptyInput)));

    let detection: DetectionError = TableError::UnsupportedLevel { alpha: 0.2 }.into();
    assert!(matches!(
        detection,
        DetectionError::Table(TableError::UnsupportedLevel { .. })
    ));
}

#[test]
fn test_detection_error_delegates_code() {
    let wrapped: DetectionError = TableError::UnsupportedSampleSize { alpha: 0.01, n: 2 }.into();
    assert_eq!(wrapped.error_code(), error_code::UNSUPPORTED_SAMPLE_SIZE);

    let wrapped: DetectionError = StatsError::NonFinite { index: 0 }.into();
    assert_eq!(wrapped.error_code(), error_code::NON_FINITE_INPUT);
}

#[test]
fn test_coded_string_format() {
    let err = DetectionError::InvalidNeighborOrder { k: 9, n: 4 };
    let s = err.coded_string();
    assert!(s.starts_with("[INVALID_NEIGHBOR_ORDER] "), "got {s}");
    assert!(s.contains("k=9"));
    assert!(s.contains("1..=4"));
}

#[test]
fn test_error_codes_are_unique_per_kind() {
    let codes: HashSet<&str> = [
        error_code::EMPTY_INPUT,
        error_code::NON_FINITE_INPUT,
        error_code::UNSUPPORTED_LEVEL,
        error_code::UNSUPPORTED_SAMPLE_SIZE,
        error_code::INVALID_NEIGHBOR_ORDER,
        error_code::DISTANCE_OVERFLOW,
        error_code::CONFIG_ERROR,
    ]
    .into_iter()
    .collect();
    assert_eq!(codes.len(), 7);
}

#[test]
fn test_display_messages() {
    assert_eq!(
        StatsError::EmptyInput.to_string(),
        "Statistics require at least one value"
    );
    assert_eq!(
        TableError::UnsupportedSampleSize { alpha: 0.05, n: 21 }.to_string(),
        "No critical value for sample size 21 at significance level 0.05"
    );
}
