//! Net monthly salary computation.
//!
//! This module orchestrates one calculation: precondition checks, pension
//! clamping, full-time-equivalent scaling, the annual tax assessment, the
//! marginal-delta supplements, and assembly of the output breakdown.

use rust_decimal::Decimal;
use tracing::{debug, warn};

use crate::config::TaxYearConfig;
use crate::error::{EngineError, EngineResult};
use crate::models::{Breakdown, CalcInput, CalcOutput, InputField};

use super::rounding::to_whole_euros;
use super::scaling::scale_to_contract_hours;
use super::supplements::{SupplementResult, holiday_allowance_gross, supplement_net};
use super::tax_after_credits::assess_annual_tax;

/// The number of monthly salary payments in the base year.
fn months_per_year() -> Decimal {
    Decimal::from(12)
}

/// Computes the net monthly salary for one input under one tax year's rules.
///
/// The headline figure is the base salary's net per month; enabled
/// supplements (holiday allowance, 13th month) are reported as separate
/// annual lump sums in the breakdown, each taxed at its own marginal delta
/// against the base case.
///
/// The computation is a pure function of its two arguments: no I/O, no
/// shared state, and repeat calls yield identical output.
///
/// # Arguments
///
/// * `input` - The validated calculation input
/// * `config` - The tax year rule set
///
/// # Errors
///
/// Returns `InvalidInput` if the gross monthly salary is not greater than
/// zero or the contracted hours fall outside 1..=60. No partial result is
/// produced. An out-of-range pension percentage is clamped, never rejected.
///
/// # Examples
///
/// ```no_run
/// use netto_engine::calculation::compute_net_monthly;
/// use netto_engine::config::ConfigLoader;
/// use netto_engine::models::CalcInput;
/// use rust_decimal::Decimal;
///
/// let loader = ConfigLoader::load("./config/nl").unwrap();
/// let config = loader.year(2025).unwrap();
///
/// let input = CalcInput {
///     gross_monthly_salary: Decimal::from(4000),
///     age: None,
///     hours_per_week: 40,
///     holiday_allowance_enabled: false,
///     pension_contribution_pct: Decimal::ZERO,
///     thirteenth_month_enabled: false,
/// };
///
/// let output = compute_net_monthly(&input, config).unwrap();
/// println!("Net per month: {}", output.net_monthly_amount);
/// ```
pub fn compute_net_monthly(
    input: &CalcInput,
    config: &TaxYearConfig,
) -> EngineResult<CalcOutput> {
    if input.gross_monthly_salary <= Decimal::ZERO {
        return Err(EngineError::InvalidInput {
            field: InputField::GrossMonthlySalary,
            message: "gross monthly salary must be greater than 0".to_string(),
        });
    }
    if !(1..=60).contains(&input.hours_per_week) {
        return Err(EngineError::InvalidInput {
            field: InputField::HoursPerWeek,
            message: "hours per week must be between 1 and 60".to_string(),
        });
    }

    let pension_pct = input
        .pension_contribution_pct
        .clamp(Decimal::ZERO, Decimal::ONE_HUNDRED);
    if pension_pct != input.pension_contribution_pct {
        warn!(
            requested = %input.pension_contribution_pct,
            clamped = %pension_pct,
            "Pension contribution percentage clamped"
        );
    }

    let scaling = scale_to_contract_hours(input.gross_monthly_salary, input.hours_per_week);
    let base_annual_gross = scaling.scaled_monthly_gross * months_per_year();

    // Employee pension is deducted before tax, in whole euros.
    let pension_deduction = to_whole_euros(base_annual_gross * pension_pct / Decimal::ONE_HUNDRED);
    let taxable_annual_base = (base_annual_gross - pension_deduction).max(Decimal::ZERO);

    let base = assess_annual_tax(taxable_annual_base, config);
    let base_annual_net = base_annual_gross - pension_deduction - base.tax_due;

    // Each supplement's marginal delta is measured against the base case
    // alone, never stacked onto the other supplement.
    let holiday = input.holiday_allowance_enabled.then(|| {
        supplement_net(
            holiday_allowance_gross(base_annual_gross),
            base_annual_gross,
            pension_deduction,
            &base,
            config,
        )
    });
    let thirteenth = input.thirteenth_month_enabled.then(|| {
        supplement_net(
            scaling.scaled_monthly_gross,
            base_annual_gross,
            pension_deduction,
            &base,
            config,
        )
    });

    let gross_of = |s: &Option<SupplementResult>| s.as_ref().map_or(Decimal::ZERO, |s| s.gross);
    let net_of = |s: &Option<SupplementResult>| s.as_ref().map_or(Decimal::ZERO, |s| s.net);

    let total_annual_gross_incl_extras =
        base_annual_gross + gross_of(&holiday) + gross_of(&thirteenth);
    let total_annual_net_incl_extras = base_annual_net + net_of(&holiday) + net_of(&thirteenth);

    let net_monthly_amount =
        to_whole_euros(base_annual_net / months_per_year()).max(Decimal::ZERO);

    debug!(
        year = config.year(),
        base_annual_gross = %base_annual_gross,
        taxable_annual_base = %taxable_annual_base,
        tax_due = %base.tax_due,
        net_monthly = %net_monthly_amount,
        "Net salary calculation completed"
    );

    Ok(CalcOutput {
        net_monthly_amount,
        breakdown: Breakdown {
            scale_factor: scaling.scale_factor,
            scaled_monthly_gross: scaling.scaled_monthly_gross,
            base_annual_gross,
            holiday_allowance_net: net_of(&holiday),
            thirteenth_month_net: net_of(&thirteenth),
            total_annual_gross_incl_extras,
            pension_deduction,
            taxable_annual_base,
            annual_tax_before_credits: base.gross_tax,
            credits: base.credits_applied,
            annual_tax_after_credits: base.tax_due,
            total_annual_net_incl_extras,
        },
    })
}
