//! Annual tax assessment: bracket tax minus capped credits.
//!
//! Credits offset computed tax only. They are capped at the gross tax
//! amount, so the assessed tax can never go negative.

use rust_decimal::Decimal;

use crate::config::TaxYearConfig;

use super::bracket_tax::tax_by_brackets;
use super::credits::{general_credit, labour_credit};

/// The result of assessing annual tax on a taxable income.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaxAssessment {
    /// Bracket tax before credits.
    pub gross_tax: Decimal,
    /// The credits actually applied, capped at `gross_tax`.
    pub credits_applied: Decimal,
    /// Tax payable after credits. Never negative.
    pub tax_due: Decimal,
}

/// Assesses the annual tax due on a taxable income under one tax year's rules.
///
/// Computes the bracket tax, the combined general and labour credit
/// entitlement on the same income, caps the entitlement at the gross tax,
/// and returns all three quantities.
///
/// # Arguments
///
/// * `taxable` - The annual taxable income in euros
/// * `config` - The tax year rule set
pub fn assess_annual_tax(taxable: Decimal, config: &TaxYearConfig) -> TaxAssessment {
    let gross_tax = tax_by_brackets(taxable, config.brackets());

    let entitled = general_credit(taxable, config.general_credit())
        + labour_credit(taxable, config.labour_credit());
    let credits_applied = entitled.min(gross_tax);
    let tax_due = (gross_tax - credits_applied).max(Decimal::ZERO);

    TaxAssessment {
        gross_tax,
        credits_applied,
        tax_due,
    }
}
