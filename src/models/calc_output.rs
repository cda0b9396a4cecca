//! Calculation output models for the Net Salary Engine.
//!
//! This module contains the [`CalcOutput`] type and its [`Breakdown`] of
//! every intermediate quantity used to derive the net monthly figure.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Every intermediate quantity of one net salary calculation.
///
/// All monetary fields are decimal euro amounts, recomputed on every call;
/// the caller owns the record and may format it for display as it sees fit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Breakdown {
    /// Contracted hours divided by the 40-hour full-time week.
    pub scale_factor: Decimal,
    /// Gross monthly salary multiplied by the scale factor.
    pub scaled_monthly_gross: Decimal,
    /// Scaled monthly gross times twelve, before any supplements.
    pub base_annual_gross: Decimal,
    /// Net value of the holiday allowance, zero when disabled.
    pub holiday_allowance_net: Decimal,
    /// Net value of the 13th month bonus, zero when disabled.
    pub thirteenth_month_net: Decimal,
    /// Base annual gross plus the gross supplement amounts.
    pub total_annual_gross_incl_extras: Decimal,
    /// Employee pension contribution deducted before tax, in whole euros.
    pub pension_deduction: Decimal,
    /// Base annual gross minus the pension deduction, floored at zero.
    pub taxable_annual_base: Decimal,
    /// Bracket tax on the taxable annual base, before credits.
    pub annual_tax_before_credits: Decimal,
    /// Applied tax credits, capped at the gross tax amount.
    pub credits: Decimal,
    /// Annual tax payable on the base after credits.
    pub annual_tax_after_credits: Decimal,
    /// Annual net including the net supplements.
    pub total_annual_net_incl_extras: Decimal,
}

/// The complete result of one net salary calculation.
///
/// # Example
///
/// ```
/// use netto_engine::models::{Breakdown, CalcOutput};
/// use rust_decimal::Decimal;
///
/// let output = CalcOutput {
///     net_monthly_amount: Decimal::from(3146),
///     breakdown: Breakdown {
///         scale_factor: Decimal::ONE,
///         scaled_monthly_gross: Decimal::from(4000),
///         base_annual_gross: Decimal::from(48000),
///         holiday_allowance_net: Decimal::ZERO,
///         thirteenth_month_net: Decimal::ZERO,
///         total_annual_gross_incl_extras: Decimal::from(48000),
///         pension_deduction: Decimal::ZERO,
///         taxable_annual_base: Decimal::from(48000),
///         annual_tax_before_credits: Decimal::ZERO,
///         credits: Decimal::ZERO,
///         annual_tax_after_credits: Decimal::ZERO,
///         total_annual_net_incl_extras: Decimal::from(48000),
///     },
/// };
/// assert_eq!(output.net_monthly_amount, Decimal::from(3146));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CalcOutput {
    /// The headline net per month for the base salary, excluding supplements,
    /// rounded to whole euros.
    pub net_monthly_amount: Decimal,
    /// Every intermediate quantity used to derive the headline figure.
    pub breakdown: Breakdown,
}
