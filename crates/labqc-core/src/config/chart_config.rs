use serde::{Deserialize, Serialize};

use super::defaults;

/// Levey-Jennings chart configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ChartConfig {
    /// Number of SD control lines drawn on each side of the mean (1..=4).
    pub sd_lines: u8,
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            sd_lines: defaults::DEFAULT_CHART_SD_LINES,
        }
    }
}
