//! # labqc-core
//!
//! Foundation crate for the LabQC analyzer.
//! Defines the QC models, traits, errors, config, constants, and tracing setup.
//! Every other crate in the workspace depends on this.

pub mod config;
pub mod constants;
pub mod errors;
pub mod models;
pub mod traits;
pub mod tracing;

// Re-export the most commonly used types at the crate root.
pub use config::LabQcConfig;
pub use errors::{LabQcResult, QcError};
pub use models::{QcResult, QcSeries, Severity, TargetStatistics, Violation, WestgardRule};
