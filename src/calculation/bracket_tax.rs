//! Progressive bracket tax computation.
//!
//! This module applies a bracket table to an annual taxable income. Each
//! bracket taxes only the span of income falling inside it, so the same euro
//! is never taxed twice and the marginal rate steps up exactly at the bound.

use rust_decimal::Decimal;

use crate::config::TaxBracket;

use super::rounding::to_cents;

/// Computes the annual tax on a taxable income, bracket by bracket.
///
/// Brackets are applied in ascending order; each contributes
/// `span * rate` where the span is the bracket width capped by the income
/// still untaxed. Income at or below zero yields zero tax. The result is
/// rounded to cents.
///
/// # Arguments
///
/// * `taxable` - The annual taxable income in euros
/// * `brackets` - The bracket table, ascending, last bracket unbounded
///
/// # Examples
///
/// ```
/// use netto_engine::calculation::tax_by_brackets;
/// use netto_engine::config::TaxBracket;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let brackets = vec![
///     TaxBracket {
///         upper_bound: Some(Decimal::from(38441)),
///         rate: Decimal::from_str("0.3582").unwrap(),
///     },
///     TaxBracket {
///         upper_bound: None,
///         rate: Decimal::from_str("0.3748").unwrap(),
///     },
/// ];
///
/// let tax = tax_by_brackets(Decimal::from(48000), &brackets);
/// assert_eq!(tax, Decimal::from_str("17352.28").unwrap());
/// ```
pub fn tax_by_brackets(taxable: Decimal, brackets: &[TaxBracket]) -> Decimal {
    let mut remaining = taxable.max(Decimal::ZERO);
    let mut lower = Decimal::ZERO;
    let mut tax = Decimal::ZERO;

    for bracket in brackets {
        let span = match bracket.upper_bound {
            Some(upper) => remaining.min(upper - lower),
            None => remaining,
        };
        if span > Decimal::ZERO {
            tax += span * bracket.rate;
            remaining -= span;
        }
        if let Some(upper) = bracket.upper_bound {
            lower = upper;
        }
        if remaining <= Decimal::ZERO {
            break;
        }
    }

    to_cents(tax)
}
