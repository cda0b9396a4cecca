//! Configuration types for tax year rule sets.
//!
//! This module contains the strongly-typed configuration structures that
//! are deserialized from YAML tax year files.

use rust_decimal::Decimal;
use serde::Deserialize;

use crate::error::{EngineError, EngineResult};

/// One progressive tax bracket.
///
/// Bounds are cumulative annual taxable-income thresholds, not per-bracket
/// widths. The top bracket carries no upper bound.
#[derive(Debug, Clone, Deserialize)]
pub struct TaxBracket {
    /// The cumulative upper bound of this bracket, `None` for the top bracket.
    #[serde(default)]
    pub upper_bound: Option<Decimal>,
    /// The tax rate within this bracket, as a decimal fraction (e.g. 0.3582).
    pub rate: Decimal,
}

/// The general tax credit (algemene heffingskorting) rules.
///
/// A flat amount below `phase_out_start`, phasing out linearly above it, and
/// a hard zero at or above `zero_from`.
#[derive(Debug, Clone, Deserialize)]
pub struct GeneralCreditConfig {
    /// The maximum flat credit amount.
    pub max_amount: Decimal,
    /// The annual income at which the credit starts phasing out.
    pub phase_out_start: Decimal,
    /// The phase-out rate applied to income above `phase_out_start`.
    pub phase_out_rate: Decimal,
    /// The annual income at or above which the credit is zero.
    pub zero_from: Decimal,
}

/// One band of the labour credit (arbeidskorting) curve.
///
/// Within a band the credit is `base + rate * (income - band lower bound)`,
/// where the lower bound is the previous band's `up_to` (zero for the first
/// band). The phase-out band carries a negative rate.
#[derive(Debug, Clone, Deserialize)]
pub struct LabourCreditBand {
    /// The exclusive upper bound of this band.
    pub up_to: Decimal,
    /// The credit amount accrued at the band's lower bound.
    pub base: Decimal,
    /// The marginal credit rate within the band. May be negative.
    pub rate: Decimal,
}

/// The labour credit rules: an ascending sequence of bands.
///
/// Income at or above the last band's `up_to` yields zero credit.
#[derive(Debug, Clone, Deserialize)]
pub struct LabourCreditConfig {
    /// The credit bands, ordered by ascending `up_to`.
    pub bands: Vec<LabourCreditBand>,
}

/// Raw file shape of one tax year configuration.
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct TaxYearFile {
    pub year: i32,
    pub brackets: Vec<TaxBracket>,
    pub general_credit: GeneralCreditConfig,
    pub labour_credit: LabourCreditConfig,
}

/// The complete rule set for one tax year.
///
/// Immutable after construction; the constructor rejects structurally
/// invalid rule sets so every downstream calculation can rely on ordered,
/// well-formed tables.
#[derive(Debug, Clone)]
pub struct TaxYearConfig {
    /// The tax year these rules describe.
    year: i32,
    /// The bracket table, ascending, last bracket unbounded.
    brackets: Vec<TaxBracket>,
    /// The general credit rules.
    general_credit: GeneralCreditConfig,
    /// The labour credit rules.
    labour_credit: LabourCreditConfig,
}

impl TaxYearConfig {
    /// Creates a new TaxYearConfig from its component parts.
    ///
    /// # Errors
    ///
    /// Returns `ConfigInvalid` if:
    /// - the bracket table is empty, a non-final bracket has no upper bound,
    ///   the final bracket has one, bounds are not strictly ascending and
    ///   positive, or a rate falls outside `[0, 1)`
    /// - the general credit thresholds are not ascending or a rate/amount is
    ///   negative
    /// - the labour credit has no bands or band bounds are not strictly
    ///   ascending and positive
    pub fn new(
        year: i32,
        brackets: Vec<TaxBracket>,
        general_credit: GeneralCreditConfig,
        labour_credit: LabourCreditConfig,
    ) -> EngineResult<Self> {
        let invalid = |message: String| EngineError::ConfigInvalid { year, message };

        if brackets.is_empty() {
            return Err(invalid("bracket table is empty".to_string()));
        }

        let mut previous_bound = Decimal::ZERO;
        for (index, bracket) in brackets.iter().enumerate() {
            let is_last = index == brackets.len() - 1;
            if bracket.rate < Decimal::ZERO || bracket.rate >= Decimal::ONE {
                return Err(invalid(format!(
                    "bracket {index} rate {} must be in [0, 1)",
                    bracket.rate
                )));
            }
            match bracket.upper_bound {
                Some(bound) if is_last => {
                    return Err(invalid(format!(
                        "the top bracket must be unbounded, found upper bound {bound}"
                    )));
                }
                Some(bound) => {
                    if bound <= previous_bound {
                        return Err(invalid(format!(
                            "bracket bounds must be strictly ascending: {bound} after {previous_bound}"
                        )));
                    }
                    previous_bound = bound;
                }
                None if !is_last => {
                    return Err(invalid(format!(
                        "bracket {index} has no upper bound but is not the top bracket"
                    )));
                }
                None => {}
            }
        }

        if general_credit.max_amount < Decimal::ZERO
            || general_credit.phase_out_rate < Decimal::ZERO
        {
            return Err(invalid(
                "general credit amount and phase-out rate must be non-negative".to_string(),
            ));
        }
        if general_credit.zero_from <= general_credit.phase_out_start {
            return Err(invalid(format!(
                "general credit zero_from {} must exceed phase_out_start {}",
                general_credit.zero_from, general_credit.phase_out_start
            )));
        }

        if labour_credit.bands.is_empty() {
            return Err(invalid("labour credit has no bands".to_string()));
        }
        let mut previous_up_to = Decimal::ZERO;
        for band in &labour_credit.bands {
            if band.up_to <= previous_up_to {
                return Err(invalid(format!(
                    "labour credit band bounds must be strictly ascending: {} after {}",
                    band.up_to, previous_up_to
                )));
            }
            previous_up_to = band.up_to;
        }

        Ok(Self {
            year,
            brackets,
            general_credit,
            labour_credit,
        })
    }

    /// Returns the tax year these rules describe.
    pub fn year(&self) -> i32 {
        self.year
    }

    /// Returns the bracket table.
    pub fn brackets(&self) -> &[TaxBracket] {
        &self.brackets
    }

    /// Returns the general credit rules.
    pub fn general_credit(&self) -> &GeneralCreditConfig {
        &self.general_credit
    }

    /// Returns the labour credit rules.
    pub fn labour_credit(&self) -> &LabourCreditConfig {
        &self.labour_credit
    }
}
