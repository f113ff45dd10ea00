// Single source of truth for all default values.

// --- Files ---
pub const PROJECT_CONFIG_FILENAME: &str = "labqc.toml";

// --- Westgard ---
/// SD at or below this is treated as zero.
pub const DEFAULT_SD_EPSILON: f64 = f64::EPSILON;

// --- Chart ---
pub const DEFAULT_CHART_SD_LINES: u8 = 3;
pub const MAX_CHART_SD_LINES: u8 = 4;

// --- Observability ---
pub const DEFAULT_LOG_LEVEL: &str = "info";
pub const LOG_ENV_VAR: &str = "LABQC_LOG";
