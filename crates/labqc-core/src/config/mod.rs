//! Configuration system for LabQC.
//! TOML-based, layered resolution: overrides > env > project file > defaults.

pub mod chart_config;
pub mod defaults;
pub mod labqc_config;
pub mod observability_config;
pub mod westgard_config;

pub use chart_config::ChartConfig;
pub use labqc_config::{ConfigOverrides, LabQcConfig};
pub use observability_config::ObservabilityConfig;
pub use westgard_config::WestgardConfig;
