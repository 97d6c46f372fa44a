/// Scaling factor of a ray: 10^27 represents 1.0.
pub const RAY_SCALE: u128 = 1_000_000_000_000_000_000_000_000_000;

/// Rounding constant for ray multiplication (half of one ray).
pub const RAY_HALF_SCALE: u128 = RAY_SCALE / 2;

/// Number of fractional decimal digits carried by a ray.
pub const RAY_DECIMALS: usize = 27;

pub const SECONDS_IN_DAY: u64 = 86_400;

/// Per-second stability fee used by the accrual test suite.
pub const STABILITY_FEE: u128 = 1_000_000_003_022_265_970_023_464_960;

/// Per-second governance fee used by the accrual test suite.
pub const GOVERNANCE_FEE: u128 = 1_000_000_001_547_125_985_827_094_528;
