use crate::models::fee_rates::FeeMultipliers;
use crate::models::ray::Ray;
use serde::Serialize;

pub const STABILITY_FEE_MUL: &str = "stabilityFeeMul";
pub const TOTAL_FEE_MUL: &str = "totalFeeMul";

/// As written to output CSV
#[derive(Debug, Serialize)]
pub struct OutputRow {
    pub metric: &'static str,
    pub seconds: u64,
    pub raw: String,
    pub decimal: String,
}

impl OutputRow {
    fn new(metric: &'static str, seconds: u64, value: &Ray) -> Self {
        Self {
            metric,
            seconds,
            raw: value.to_string(),
            decimal: value.to_decimal_string(),
        }
    }

    /// One row per multiplier, stability fee first.
    pub fn rows(m: &FeeMultipliers) -> [OutputRow; 2] {
        [
            OutputRow::new(STABILITY_FEE_MUL, m.seconds, &m.stability_fee_mul),
            OutputRow::new(TOTAL_FEE_MUL, m.seconds, &m.total_fee_mul),
        ]
    }
}
