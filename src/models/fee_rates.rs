use crate::consts::{GOVERNANCE_FEE, STABILITY_FEE};
use crate::models::ray::Ray;

/// Per-second compounding rates, both ray-scaled.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeeRates {
    pub stability_fee: Ray,
    pub governance_fee: Ray,
}

impl Default for FeeRates {
    fn default() -> Self {
        Self {
            stability_fee: Ray::from(STABILITY_FEE),
            governance_fee: Ray::from(GOVERNANCE_FEE),
        }
    }
}

/// Multipliers accrued over one period.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeeMultipliers {
    /// Elapsed seconds the rates were compounded over.
    pub seconds: u64,
    /// Stability fee alone.
    pub stability_fee_mul: Ray,
    /// Stability and governance fees combined.
    pub total_fee_mul: Ray,
}
