//! # labqc-westgard
//!
//! Westgard multi-rule statistical quality control.
//!
//! ## Rules
//! 1. **1-2s**: one point beyond ±2 SD (warning only)
//! 2. **1-3s**: one point beyond ±3 SD
//! 3. **2-2s**: two consecutive points beyond 2 SD, same side
//! 4. **R-4s**: range between consecutive points exceeds 4 SD
//! 5. **4-1s**: four consecutive points beyond 1 SD, same side
//! 6. **10-x**: ten consecutive points on one side of the mean
//!
//! The evaluator is a pure function over a series; the engine adds
//! configuration, Levey-Jennings chart output, and tracing.

pub mod baseline;
pub mod dedup;
pub mod engine;
pub mod evaluator;
pub mod levey_jennings;
pub mod provider;
pub mod rules;
pub mod sigma;
pub mod status;

pub use engine::{SeriesReport, WestgardEngine};
pub use evaluator::{evaluate, evaluate_target};
pub use levey_jennings::{ChartPoint, ControlLine, LeveyJenningsChart, Zone};
pub use provider::InMemoryResultsProvider;
pub use sigma::{SigmaMetric, SigmaRating};
pub use status::RunStatus;
