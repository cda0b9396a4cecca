//! The two wage tax credits.
//!
//! The general credit (algemene heffingskorting) is a flat amount that
//! phases out linearly with income. The labour credit (arbeidskorting) is a
//! piecewise-linear curve over labour income: three rising bands, a
//! phase-out band, then zero. Both reduce tax owed, never taxable income.

use rust_decimal::Decimal;

use crate::config::{GeneralCreditConfig, LabourCreditConfig};

use super::rounding::to_cents;

/// Computes the general tax credit for an annual income.
///
/// Returns the full flat amount at or below the phase-out start, zero at or
/// above `zero_from`, and the linearly phased-out amount in between, floored
/// at zero and rounded to cents. The `zero_from` cutoff is an explicit rule:
/// the linear formula alone does not reach exactly zero there.
pub fn general_credit(income: Decimal, config: &GeneralCreditConfig) -> Decimal {
    if income <= config.phase_out_start {
        return config.max_amount;
    }
    if income >= config.zero_from {
        return Decimal::ZERO;
    }
    let phased_out = config.phase_out_rate * (income - config.phase_out_start);
    to_cents((config.max_amount - phased_out).max(Decimal::ZERO))
}

/// Computes the labour tax credit for an annual labour income.
///
/// Zero for non-positive income. Otherwise the first band whose `up_to`
/// exceeds the income applies: `base + rate * (income - band lower bound)`,
/// floored at zero and rounded to cents. Income at or beyond the last band's
/// `up_to` yields zero.
pub fn labour_credit(income: Decimal, config: &LabourCreditConfig) -> Decimal {
    if income <= Decimal::ZERO {
        return Decimal::ZERO;
    }

    let mut lower = Decimal::ZERO;
    for band in &config.bands {
        if income < band.up_to {
            let credit = band.base + band.rate * (income - lower);
            return to_cents(credit.max(Decimal::ZERO));
        }
        lower = band.up_to;
    }

    Decimal::ZERO
}
