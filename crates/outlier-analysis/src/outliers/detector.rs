//! Outlier detector with configured parameters.

use outlier_core::config::OutlierConfig;
use outlier_core::errors::DetectionError;

use super::critical_values::CriticalValueTable;
use super::grubbs::{self, GrubbsOutcome};
use super::knn;
use super::report::OutlierReport;
use super::types::{KnnScore, OutlierResult};
use super::zscore;

/// Runs the three detectors with parameters taken from an `OutlierConfig`.
///
/// Holds no mutable state; one detector can serve any number of datasets.
#[derive(Debug, Clone)]
pub struct OutlierDetector {
    config: OutlierConfig,
    table: &'static CriticalValueTable,
}

impl OutlierDetector {
    pub fn new(config: OutlierConfig) -> Self {
        Self {
            config,
            table: CriticalValueTable::grubbs_two_sided(),
        }
    }

    /// Use a different critical value table for Grubbs' test.
    pub fn with_table(mut self, table: &'static CriticalValueTable) -> Self {
        self.table = table;
        self
    }

    pub fn config(&self) -> &OutlierConfig {
        &self.config
    }

    /// Grubbs' test at the configured significance level.
    pub fn grubbs(&self, values: &[f64]) -> Result<GrubbsOutcome, DetectionError> {
        grubbs::test_with_table(values, self.config.grubbs.effective_alpha(), self.table)
    }

    /// Z-score detection at the configured threshold.
    pub fn zscore(&self, values: &[f64]) -> Result<Vec<OutlierResult>, DetectionError> {
        self.zscore_with(values, self.config.zscore.effective_threshold())
    }

    pub fn zscore_with(
        &self,
        values: &[f64],
        threshold: f64,
    ) -> Result<Vec<OutlierResult>, DetectionError> {
        zscore::detect(values, threshold)
    }

    /// k-NN scores at the configured neighbor order.
    pub fn knn(&self, values: &[f64]) -> Result<Vec<KnnScore>, DetectionError> {
        self.knn_with(values, self.config.knn.effective_k())
    }

    pub fn knn_with(&self, values: &[f64], k: usize) -> Result<Vec<KnnScore>, DetectionError> {
        knn::score(values, k)
    }

    /// Run the configured z-score and k-NN sweeps plus Grubbs' test.
    pub fn report(&self, values: &[f64]) -> Result<OutlierReport, DetectionError> {
        OutlierReport::build(self, values)
    }
}

impl Default for OutlierDetector {
    fn default() -> Self {
        Self::new(OutlierConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::outliers::critical_values::LevelRow;
    use outlier_core::errors::TableError;

    #[test]
    fn test_default_parameters() {
        let detector = OutlierDetector::default();
        let values = [1.0, 2.0, 3.0, 100.0];
        let scores = detector.knn(&values).unwrap();
        assert_eq!(scores[3].score, 97.0);
        // default w = 2.0; 100 sits at z ≈ 1.73 here
        assert!(detector.zscore(&values).unwrap().is_empty());
    }

    #[test]
    fn test_configured_alpha_is_used() {
        let config = OutlierConfig::from_toml("[grubbs]\nalpha = 0.02\n").unwrap();
        let detector = OutlierDetector::new(config);
        let err = detector.grubbs(&[1.0, 2.0, 3.0]).unwrap_err();
        assert_eq!(
            err,
            DetectionError::Table(TableError::UnsupportedLevel { alpha: 0.02 })
        );
    }

    #[test]
    fn test_with_custom_table() {
        static ROWS: [LevelRow; 1] = [LevelRow {
            alpha: 0.05,
            entries: &[(5, 1.0)],
        }];
        static LENIENT: CriticalValueTable = CriticalValueTable::new(&ROWS);

        let detector = OutlierDetector::default().with_table(&LENIENT);
        let outcome = detector.grubbs(&[1.0, 2.0, 3.0, 4.0, 9.0]).unwrap();
        assert_eq!(outcome.removed_values(), vec![9.0]);
    }

    #[test]
    fn test_custom_table_level_from_validated_config() {
        static ROWS: [LevelRow; 1] = [LevelRow {
            alpha: 0.1,
            entries: &[(5, 1.0)],
        }];
        static TEN_PERCENT: CriticalValueTable = CriticalValueTable::new(&ROWS);

        let config = OutlierConfig::from_toml("[grubbs]\nalpha = 0.1\n").unwrap();
        OutlierConfig::validate(&config).unwrap();

        let values = [1.0, 2.0, 3.0, 4.0, 9.0];
        let builtin = OutlierDetector::new(config.clone());
        assert_eq!(
            builtin.grubbs(&values).unwrap_err(),
            DetectionError::Table(TableError::UnsupportedLevel { alpha: 0.1 })
        );

        let custom = OutlierDetector::new(config).with_table(&TEN_PERCENT);
        assert_eq!(custom.grubbs(&values).unwrap().removed_values(), vec![9.0]);
    }
}
