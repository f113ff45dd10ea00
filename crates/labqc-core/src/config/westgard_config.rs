use serde::{Deserialize, Serialize};

use super::defaults;
use crate::models::WestgardRule;

/// Westgard evaluation configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct WestgardConfig {
    /// Rules reported by the engine. Default: all six.
    pub enabled_rules: Vec<WestgardRule>,
    /// SD at or below this value yields no violations.
    pub sd_epsilon: f64,
}

impl Default for WestgardConfig {
    fn default() -> Self {
        Self {
            enabled_rules: WestgardRule::ALL.to_vec(),
            sd_epsilon: defaults::DEFAULT_SD_EPSILON,
        }
    }
}

impl WestgardConfig {
    pub fn is_enabled(&self, rule: WestgardRule) -> bool {
        self.enabled_rules.contains(&rule)
    }
}
