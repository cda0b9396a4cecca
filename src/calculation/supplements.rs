//! Marginal-delta taxation of supplemental payments.
//!
//! Supplemental payments (holiday allowance, 13th month) are taxed at the
//! marginal rate implied by stacking them on top of the base salary: the
//! annual tax after credits is recomputed with the supplement included, and
//! the increase is the tax the supplement costs. Each supplement's delta is
//! measured independently against the same base, not cumulatively against
//! the other supplement.

use rust_decimal::Decimal;

use crate::config::TaxYearConfig;

use super::rounding::to_whole_euros;
use super::tax_after_credits::{TaxAssessment, assess_annual_tax};

/// Returns the statutory holiday allowance rate (8% of annual base salary).
pub fn holiday_allowance_rate() -> Decimal {
    Decimal::new(8, 2)
}

/// Computes the gross holiday allowance for a base annual gross, rounded to
/// whole euros.
pub fn holiday_allowance_gross(base_annual_gross: Decimal) -> Decimal {
    to_whole_euros(base_annual_gross * holiday_allowance_rate())
}

/// The result of taxing one supplemental payment at its marginal rate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SupplementResult {
    /// The gross supplement amount.
    pub gross: Decimal,
    /// The extra annual tax the supplement causes on top of the base case.
    pub extra_tax: Decimal,
    /// The net supplement: gross minus the extra tax.
    pub net: Decimal,
}

/// Taxes a supplemental payment by the marginal-delta method.
///
/// Recomputes the annual tax after credits with the supplement stacked on
/// the base annual gross (pension deduction unchanged) and takes the
/// increase over the base assessment as the supplement's tax. The delta is
/// floored at zero, so an enabled supplement can never reduce the annual
/// net.
///
/// # Arguments
///
/// * `gross_supplement` - The gross supplement amount in euros
/// * `base_annual_gross` - The annual gross before any supplements
/// * `pension_deduction` - The pre-tax pension deduction on the base
/// * `base_assessment` - The assessment of the base case alone
/// * `config` - The tax year rule set
pub fn supplement_net(
    gross_supplement: Decimal,
    base_annual_gross: Decimal,
    pension_deduction: Decimal,
    base_assessment: &TaxAssessment,
    config: &TaxYearConfig,
) -> SupplementResult {
    let taxable_with_supplement =
        (base_annual_gross + gross_supplement - pension_deduction).max(Decimal::ZERO);
    let with_supplement = assess_annual_tax(taxable_with_supplement, config);

    let extra_tax = (with_supplement.tax_due - base_assessment.tax_due).max(Decimal::ZERO);

    SupplementResult {
        gross: gross_supplement,
        extra_tax,
        net: gross_supplement - extra_tax,
    }
}
