//! Top-level LabQC configuration with layered resolution.

use std::path::Path;

use serde::{Deserialize, Serialize};

use super::{defaults, ChartConfig, ObservabilityConfig, WestgardConfig};
use crate::errors::ConfigError;
use crate::models::WestgardRule;

/// Top-level configuration aggregating all sub-configs.
///
/// Resolution order (highest priority first):
/// 1. Explicit overrides (applied via `apply_overrides`)
/// 2. Environment variables (`LABQC_*`)
/// 3. Project config (`labqc.toml` in the given root)
/// 4. Compiled defaults
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct LabQcConfig {
    pub westgard: WestgardConfig,
    pub chart: ChartConfig,
    pub observability: ObservabilityConfig,
}

/// Override arguments supplied by an embedding application.
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    pub enabled_rules: Option<Vec<WestgardRule>>,
    pub sd_epsilon: Option<f64>,
    pub chart_sd_lines: Option<u8>,
    pub log_level: Option<String>,
}

impl LabQcConfig {
    /// Load configuration with layered resolution.
    pub fn load(root: &Path, overrides: Option<&ConfigOverrides>) -> Result<Self, ConfigError> {
        let project_config_path = root.join(defaults::PROJECT_CONFIG_FILENAME);
        let mut config = if project_config_path.exists() {
            Self::from_file(&project_config_path)?
        } else {
            Self::default()
        };

        Self::apply_env_overrides(&mut config);

        if let Some(overrides) = overrides {
            Self::apply_overrides(&mut config, overrides);
        }

        Self::validate(&config)?;

        Ok(config)
    }

    /// Load configuration from a TOML string (for testing).
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        toml::from_str(toml_str).map_err(|e| ConfigError::ParseError {
            path: "<string>".to_string(),
            message: e.to_string(),
        })
    }

    /// Read a TOML file. Missing keys fall back to compiled defaults;
    /// unknown keys are ignored.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|_| ConfigError::FileNotFound {
            path: path.display().to_string(),
        })?;

        toml::from_str(&content).map_err(|e| ConfigError::ParseError {
            path: path.display().to_string(),
            message: e.to_string(),
        })
    }

    /// Validate the configuration values.
    pub fn validate(config: &LabQcConfig) -> Result<(), ConfigError> {
        if config.westgard.enabled_rules.is_empty() {
            return Err(ConfigError::ValidationFailed {
                field: "westgard.enabled_rules".to_string(),
                message: "at least one rule must be enabled".to_string(),
            });
        }
        let epsilon = config.westgard.sd_epsilon;
        if !epsilon.is_finite() || epsilon < 0.0 {
            return Err(ConfigError::ValidationFailed {
                field: "westgard.sd_epsilon".to_string(),
                message: "must be a finite, non-negative number".to_string(),
            });
        }
        if !(1..=defaults::MAX_CHART_SD_LINES).contains(&config.chart.sd_lines) {
            return Err(ConfigError::ValidationFailed {
                field: "chart.sd_lines".to_string(),
                message: format!("must be between 1 and {}", defaults::MAX_CHART_SD_LINES),
            });
        }
        Ok(())
    }

    /// Apply environment variable overrides.
    /// Pattern: `LABQC_WESTGARD_RULES=1-3s,2-2s`, `LABQC_CHART_SD_LINES=3`, etc.
    fn apply_env_overrides(config: &mut LabQcConfig) {
        if let Ok(val) = std::env::var("LABQC_WESTGARD_RULES") {
            match parse_rule_list(&val) {
                Ok(rules) => config.westgard.enabled_rules = rules,
                Err(e) => tracing::warn!(error = %e, "ignoring LABQC_WESTGARD_RULES"),
            }
        }
        if let Ok(val) = std::env::var("LABQC_WESTGARD_SD_EPSILON") {
            if let Ok(v) = val.parse::<f64>() {
                config.westgard.sd_epsilon = v;
            }
        }
        if let Ok(val) = std::env::var("LABQC_CHART_SD_LINES") {
            if let Ok(v) = val.parse::<u8>() {
                config.chart.sd_lines = v;
            }
        }
        if let Ok(val) = std::env::var("LABQC_LOG_LEVEL") {
            config.observability.log_level = val;
        }
        if let Ok(val) = std::env::var("LABQC_LOG_JSON") {
            if let Ok(v) = val.parse::<bool>() {
                config.observability.json = v;
            }
        }
    }

    /// Apply explicit overrides (highest priority).
    fn apply_overrides(config: &mut LabQcConfig, overrides: &ConfigOverrides) {
        if let Some(ref rules) = overrides.enabled_rules {
            config.westgard.enabled_rules = rules.clone();
        }
        if let Some(v) = overrides.sd_epsilon {
            config.westgard.sd_epsilon = v;
        }
        if let Some(v) = overrides.chart_sd_lines {
            config.chart.sd_lines = v;
        }
        if let Some(ref v) = overrides.log_level {
            config.observability.log_level = v.clone();
        }
    }

    /// Serialize the config back to TOML.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self).map_err(|e| ConfigError::ParseError {
            path: "<serialization>".to_string(),
            message: e.to_string(),
        })
    }
}

/// Parse a comma-separated list of rule labels. Empty entries are skipped.
fn parse_rule_list(val: &str) -> Result<Vec<WestgardRule>, crate::errors::RuleError> {
    val.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::parse)
        .collect()
}
