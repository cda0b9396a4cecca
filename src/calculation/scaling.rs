//! Full-time-equivalent salary scaling.
//!
//! Dutch contracts quote full-time-equivalent salaries; a part-time
//! contract's pay is the quoted gross prorated by contracted hours over the
//! canonical 40-hour week.

use rust_decimal::Decimal;

/// The canonical full-time working week, in hours.
pub const FULL_TIME_HOURS_PER_WEEK: u32 = 40;

/// The result of prorating a quoted gross salary to contracted hours.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FteScaling {
    /// Contracted hours divided by the full-time week. Exactly 1 at 40 hours.
    pub scale_factor: Decimal,
    /// The quoted gross monthly salary times the scale factor.
    pub scaled_monthly_gross: Decimal,
}

/// Prorates a quoted gross monthly salary by contracted hours.
///
/// Every divisor of the 40-hour week terminates in decimal, so both results
/// are exact.
///
/// # Examples
///
/// ```
/// use netto_engine::calculation::scale_to_contract_hours;
/// use rust_decimal::Decimal;
///
/// let scaling = scale_to_contract_hours(Decimal::from(4000), 20);
/// assert_eq!(scaling.scale_factor, Decimal::new(5, 1));
/// assert_eq!(scaling.scaled_monthly_gross, Decimal::from(2000));
/// ```
pub fn scale_to_contract_hours(gross_monthly_salary: Decimal, hours_per_week: u32) -> FteScaling {
    let scale_factor =
        Decimal::from(hours_per_week) / Decimal::from(FULL_TIME_HOURS_PER_WEEK);

    FteScaling {
        scaled_monthly_gross: gross_monthly_salary * scale_factor,
        scale_factor,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    /// SC-001: a 40-hour week scales by exactly one
    #[test]
    fn test_full_time_scales_by_exactly_one() {
        let scaling = scale_to_contract_hours(dec("4000"), 40);

        assert_eq!(scaling.scale_factor, dec("1"));
        assert_eq!(scaling.scaled_monthly_gross, dec("4000"));
    }

    /// SC-002: half-time halves the gross
    #[test]
    fn test_half_time_halves_the_gross() {
        let scaling = scale_to_contract_hours(dec("4000"), 20);

        assert_eq!(scaling.scale_factor, dec("0.5"));
        assert_eq!(scaling.scaled_monthly_gross, dec("2000"));
    }

    /// SC-003: odd contracted hours stay exact
    #[test]
    fn test_odd_hours_stay_exact() {
        let scaling = scale_to_contract_hours(dec("3200"), 33);

        assert_eq!(scaling.scale_factor, dec("0.825"));
        assert_eq!(scaling.scaled_monthly_gross, dec("2640.0"));
    }

    /// SC-004: overtime contracts scale above one
    #[test]
    fn test_hours_above_full_time_scale_above_one() {
        let scaling = scale_to_contract_hours(dec("4000"), 60);

        assert_eq!(scaling.scale_factor, dec("1.5"));
        assert_eq!(scaling.scaled_monthly_gross, dec("6000"));
    }
}
