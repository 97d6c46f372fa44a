use crate::consts::SECONDS_IN_DAY;
use crate::models::fee_rates::{FeeMultipliers, FeeRates};
use log::debug;

/// Compounds both per-second rates over `seconds` and combines them.
///
/// The two fees accrue independently per second; their accrued effects
/// combine multiplicatively over the period.
///
/// # Arguments
/// * `rates` - The per-second stability and governance fees.
/// * `seconds` - Elapsed time to compound over.
///
/// # Returns
/// * `FeeMultipliers` - The stability fee multiplier and the combined multiplier.
pub fn compound_fees(rates: &FeeRates, seconds: u64) -> FeeMultipliers {
    debug!(
        "compounding stability_fee={} governance_fee={} over {seconds}s",
        rates.stability_fee, rates.governance_fee
    );

    let stability_fee_mul = rates.stability_fee.rpow(seconds);
    let governance_fee_mul = rates.governance_fee.rpow(seconds);
    debug!("governance fee multiplier: {governance_fee_mul}");

    let total_fee_mul = stability_fee_mul.rmul(&governance_fee_mul);
    FeeMultipliers {
        seconds,
        stability_fee_mul,
        total_fee_mul,
    }
}

/// Human-readable label for a period, e.g. `1 day` or `90 seconds`.
pub fn describe_period(seconds: u64) -> String {
    match seconds {
        SECONDS_IN_DAY => "1 day".to_string(),
        s if s > 0 && s % SECONDS_IN_DAY == 0 => format!("{} days", s / SECONDS_IN_DAY),
        1 => "1 second".to_string(),
        s => format!("{s} seconds"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ray::Ray;

    #[test]
    fn compound_fees_matches_one_day_golden_values() {
        // arrange
        let rates = FeeRates::default();

        // act
        let m = compound_fees(&rates, SECONDS_IN_DAY);

        // assert
        assert_eq!(m.seconds, SECONDS_IN_DAY);
        assert_eq!(
            m.stability_fee_mul.to_string(),
            "1000261157875197197935442824"
        );
        assert_eq!(m.total_fee_mul.to_string(), "1000394873406473592135593799");
    }

    #[test]
    fn compound_fees_half_day() {
        let m = compound_fees(&FeeRates::default(), SECONDS_IN_DAY / 2);

        assert_eq!(
            m.stability_fee_mul.to_string(),
            "1000130570413282186627212415"
        );
        assert_eq!(m.total_fee_mul.to_string(), "1000197417216458119031884925");
    }

    #[test]
    fn compound_fees_over_zero_seconds_is_one() {
        let m = compound_fees(&FeeRates::default(), 0);

        assert_eq!(m.stability_fee_mul, Ray::one());
        assert_eq!(m.total_fee_mul, Ray::one());
    }

    #[test]
    fn compound_fees_over_one_second_multiplies_rates() {
        let rates = FeeRates::default();

        let m = compound_fees(&rates, 1);

        assert_eq!(m.stability_fee_mul, rates.stability_fee);
        assert_eq!(
            m.total_fee_mul,
            rates.stability_fee.rmul(&rates.governance_fee)
        );
    }

    #[test]
    fn compound_fees_with_unit_governance_fee_keeps_stability_multiplier() {
        let rates = FeeRates {
            governance_fee: Ray::one(),
            ..FeeRates::default()
        };

        let m = compound_fees(&rates, SECONDS_IN_DAY);

        assert_eq!(m.total_fee_mul, m.stability_fee_mul);
    }

    #[test]
    fn describe_period_labels() {
        assert_eq!(describe_period(86_400), "1 day");
        assert_eq!(describe_period(172_800), "2 days");
        assert_eq!(describe_period(1), "1 second");
        assert_eq!(describe_period(0), "0 seconds");
        assert_eq!(describe_period(90), "90 seconds");
        assert_eq!(describe_period(86_401), "86401 seconds");
    }
}
