//! Top-level Outlier configuration with 4-layer resolution.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use super::{GrubbsConfig, KnnConfig, ZScoreConfig};
use crate::constants::PROJECT_CONFIG_FILE;
use crate::errors::ConfigError;

/// Top-level configuration aggregating the per-method configs.
///
/// Resolution order (highest priority first):
/// 1. CLI flags (applied via `apply_cli_overrides`)
/// 2. Environment variables (`OUTLIER_*`)
/// 3. Project config (`outlier.toml` in project root)
/// 4. User config (`~/.outlier/config.toml`)
/// 5. Compiled defaults
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct OutlierConfig {
    pub grubbs: GrubbsConfig,
    pub zscore: ZScoreConfig,
    pub knn: KnnConfig,
}

/// CLI override arguments that can be applied to a config.
#[derive(Debug, Clone, Default)]
pub struct CliOverrides {
    pub alpha: Option<f64>,
    pub z_threshold: Option<f64>,
    pub knn_k: Option<usize>,
}

impl OutlierConfig {
    /// Load configuration with 4-layer resolution rooted at `root`.
    pub fn load(root: &Path, cli_overrides: Option<&CliOverrides>) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        // Layer 4 (lowest priority): user config
        if let Some(user_config_path) = Self::user_config_path() {
            if user_config_path.exists() {
                match Self::merge_toml_file(&mut config, &user_config_path) {
                    Ok(()) => {}
                    Err(e @ ConfigError::ParseError { .. }) => return Err(e),
                    Err(e) => {
                        ::tracing::warn!(error = %e, "ignoring unreadable user config");
                    }
                }
            }
        }

        // Layer 3: project config
        let project_config_path = root.join(PROJECT_CONFIG_FILE);
        if project_config_path.exists() {
            Self::merge_toml_file(&mut config, &project_config_path)?;
        }

        // Layer 2: environment variables
        Self::apply_env_overrides(&mut config);

        // Layer 1 (highest priority): CLI flags
        if let Some(cli) = cli_overrides {
            Self::apply_cli_overrides(&mut config, cli);
        }

        Self::validate(&config)?;
        ::tracing::debug!(?config, "resolved outlier config");

        Ok(config)
    }

    /// Load configuration from a TOML string (for testing).
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        toml::from_str(toml_str).map_err(|e| ConfigError::ParseError {
            path: "<string>".to_string(),
            message: e.to_string(),
        })
    }

    /// Validate the configuration values.
    ///
    /// `grubbs.alpha` is only range-checked here. Whether a critical value
    /// table has a row for it is decided by the table in use at detection
    /// time (`UnsupportedLevel`), so custom tables can add levels.
    pub fn validate(config: &OutlierConfig) -> Result<(), ConfigError> {
        if let Some(alpha) = config.grubbs.alpha {
            if !(alpha > 0.0 && alpha < 1.0) {
                return Err(ConfigError::ValidationFailed {
                    field: "grubbs.alpha".to_string(),
                    message: "must be strictly between 0 and 1".to_string(),
                });
            }
        }
        let thresholds = config
            .zscore
            .threshold
            .iter()
            .chain(config.zscore.sweep.iter());
        for &w in thresholds {
            if !w.is_finite() || w < 0.0 {
                return Err(ConfigError::ValidationFailed {
                    field: "zscore.threshold".to_string(),
                    message: "must be a finite, non-negative number".to_string(),
                });
            }
        }
        let orders = config.knn.k.iter().chain(config.knn.sweep.iter());
        for &k in orders {
            if k == 0 {
                return Err(ConfigError::ValidationFailed {
                    field: "knn.k".to_string(),
                    message: "must be at least 1".to_string(),
                });
            }
        }
        Ok(())
    }

    /// Returns the user config path: `~/.outlier/config.toml`.
    fn user_config_path() -> Option<PathBuf> {
        home_dir().map(|h| h.join(".outlier").join("config.toml"))
    }

    /// Merge a TOML file into the existing config.
    /// Unknown keys are silently ignored (forward-compatible).
    fn merge_toml_file(config: &mut OutlierConfig, path: &Path) -> Result<(), ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|_| ConfigError::FileNotFound {
            path: path.display().to_string(),
        })?;

        let file_config: OutlierConfig =
            toml::from_str(&content).map_err(|e| ConfigError::ParseError {
                path: path.display().to_string(),
                message: e.to_string(),
            })?;

        Self::merge(config, &file_config);
        Ok(())
    }

    /// Merge `other` into `base`, where `other` values override `base` values
    /// only when `other` has a `Some` (or non-empty) value.
    fn merge(base: &mut OutlierConfig, other: &OutlierConfig) {
        if other.grubbs.alpha.is_some() {
            base.grubbs.alpha = other.grubbs.alpha;
        }
        if other.zscore.threshold.is_some() {
            base.zscore.threshold = other.zscore.threshold;
        }
        if !other.zscore.sweep.is_empty() {
            base.zscore.sweep = other.zscore.sweep.clone();
        }
        if other.knn.k.is_some() {
            base.knn.k = other.knn.k;
        }
        if !other.knn.sweep.is_empty() {
            base.knn.sweep = other.knn.sweep.clone();
        }
    }

    /// Apply `OUTLIER_*` environment variables. Unparsable values are ignored.
    fn apply_env_overrides(config: &mut OutlierConfig) {
        if let Ok(val) = std::env::var("OUTLIER_GRUBBS_ALPHA") {
            if let Ok(v) = val.parse::<f64>() {
                config.grubbs.alpha = Some(v);
            }
        }
        if let Ok(val) = std::env::var("OUTLIER_ZSCORE_THRESHOLD") {
            if let Ok(v) = val.parse::<f64>() {
                config.zscore.threshold = Some(v);
            }
        }
        if let Ok(val) = std::env::var("OUTLIER_KNN_K") {
            if let Ok(v) = val.parse::<usize>() {
                config.knn.k = Some(v);
            }
        }
    }

    /// Apply CLI overrides (highest priority).
    pub fn apply_cli_overrides(config: &mut OutlierConfig, cli: &CliOverrides) {
        if let Some(alpha) = cli.alpha {
            config.grubbs.alpha = Some(alpha);
        }
        if let Some(w) = cli.z_threshold {
            config.zscore.threshold = Some(w);
        }
        if let Some(k) = cli.knn_k {
            config.knn.k = Some(k);
        }
    }
}

/// Cross-platform home directory resolution.
fn home_dir() -> Option<PathBuf> {
    std::env::var_os("HOME")
        .or_else(|| std::env::var_os("USERPROFILE"))
        .map(PathBuf::from)
}
