/// LabQC version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// |z| beyond this is a 1-2s warning.
pub const WARNING_LIMIT_SD: f64 = 2.0;

/// |z| beyond this is a 1-3s rejection.
pub const REJECTION_LIMIT_SD: f64 = 3.0;

/// Two consecutive points beyond ±2 SD on the same side (2-2s).
pub const PAIR_LIMIT_SD: f64 = 2.0;

/// Range between consecutive points, in SD units, that triggers R-4s.
pub const RANGE_LIMIT_SD: f64 = 4.0;

/// Four consecutive points beyond ±1 SD on the same side (4-1s).
pub const TREND_LIMIT_SD: f64 = 1.0;

/// Window lengths, counting the current point.
pub const PAIR_WINDOW: usize = 2;
pub const TREND_WINDOW: usize = 4;
pub const SHIFT_WINDOW: usize = 10;

/// Minimum number of baseline runs needed to establish a target.
pub const MIN_BASELINE_POINTS: usize = 2;
