//! Field-level validation of raw user input.
//!
//! The presentation layer collects the four user-facing fields as strings.
//! This module checks them before a [`CalcInput`] is built, reporting every
//! violation as a `{field, message}` pair keyed by [`InputField`] so the UI
//! can annotate the specific control. Validation failures are non-fatal: no
//! computation is attempted until they are resolved.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::models::{CalcInput, InputField};

/// The highest gross monthly salary accepted as plausible, in euros.
const MAX_PLAUSIBLE_GROSS_MONTHLY: u32 = 100_000;

/// The accepted age window, in years.
const AGE_RANGE: std::ops::RangeInclusive<u32> = 16..=100;

/// The accepted contracted hours window.
const HOURS_RANGE: std::ops::RangeInclusive<u32> = 1..=60;

/// The four user-facing fields as entered, before any parsing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawSalaryInput {
    /// The gross monthly salary field, as entered.
    pub gross_monthly_salary: String,
    /// The age field, as entered.
    pub age: String,
    /// The hours per week field, as entered.
    pub hours_per_week: String,
    /// The pension contribution percentage field, as entered.
    pub pension_contribution_pct: String,
}

/// One field-level validation failure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationError {
    /// The field the message belongs to.
    pub field: InputField,
    /// A human-readable description of the problem.
    pub message: String,
}

/// The outcome of validating one raw input record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationResult {
    /// True when no field failed validation.
    pub is_valid: bool,
    /// Every field-level failure, in field order.
    pub errors: Vec<ValidationError>,
}

impl ValidationResult {
    fn from_errors(errors: Vec<ValidationError>) -> Self {
        Self {
            is_valid: errors.is_empty(),
            errors,
        }
    }
}

/// Validates the four user-facing fields of a raw input record.
///
/// Every violated rule contributes one error; a record with several bad
/// fields reports them all at once.
///
/// # Examples
///
/// ```
/// use netto_engine::validation::{RawSalaryInput, validate_salary_input};
///
/// let raw = RawSalaryInput {
///     gross_monthly_salary: "4000".to_string(),
///     age: "35".to_string(),
///     hours_per_week: "40".to_string(),
///     pension_contribution_pct: "5".to_string(),
/// };
///
/// assert!(validate_salary_input(&raw).is_valid);
/// ```
pub fn validate_salary_input(input: &RawSalaryInput) -> ValidationResult {
    let mut errors = Vec::new();

    match parse_decimal(&input.gross_monthly_salary) {
        Some(gross) if gross > Decimal::ZERO => {
            if gross > Decimal::from(MAX_PLAUSIBLE_GROSS_MONTHLY) {
                errors.push(ValidationError {
                    field: InputField::GrossMonthlySalary,
                    message: "gross monthly salary looks unrealistically high (> 100000)"
                        .to_string(),
                });
            }
        }
        _ => errors.push(ValidationError {
            field: InputField::GrossMonthlySalary,
            message: "enter a valid gross monthly salary (greater than 0)".to_string(),
        }),
    }

    match parse_integer(&input.age) {
        Some(age) if AGE_RANGE.contains(&age) => {}
        _ => errors.push(ValidationError {
            field: InputField::Age,
            message: "enter a valid age (16-100)".to_string(),
        }),
    }

    match parse_integer(&input.hours_per_week) {
        Some(hours) if HOURS_RANGE.contains(&hours) => {}
        _ => errors.push(ValidationError {
            field: InputField::HoursPerWeek,
            message: "hours per week must be between 1 and 60".to_string(),
        }),
    }

    match parse_decimal(&input.pension_contribution_pct) {
        Some(pct) if pct >= Decimal::ZERO && pct <= Decimal::ONE_HUNDRED => {}
        _ => errors.push(ValidationError {
            field: InputField::PensionContributionPct,
            message: "pension contribution must be between 0% and 100%".to_string(),
        }),
    }

    ValidationResult::from_errors(errors)
}

impl RawSalaryInput {
    /// Parses a validated record into a [`CalcInput`].
    ///
    /// The two supplement toggles are not free-text fields and are passed
    /// through as booleans.
    ///
    /// # Errors
    ///
    /// Returns the full validation error list if any field is invalid.
    pub fn to_calc_input(
        &self,
        holiday_allowance_enabled: bool,
        thirteenth_month_enabled: bool,
    ) -> Result<CalcInput, Vec<ValidationError>> {
        let result = validate_salary_input(self);
        if !result.is_valid {
            return Err(result.errors);
        }

        // Validation guarantees every field parses.
        Ok(CalcInput {
            gross_monthly_salary: parse_decimal(&self.gross_monthly_salary)
                .unwrap_or(Decimal::ZERO),
            age: parse_integer(&self.age),
            hours_per_week: parse_integer(&self.hours_per_week).unwrap_or(0),
            holiday_allowance_enabled,
            pension_contribution_pct: parse_decimal(&self.pension_contribution_pct)
                .unwrap_or(Decimal::ZERO),
            thirteenth_month_enabled,
        })
    }
}

fn parse_decimal(raw: &str) -> Option<Decimal> {
    Decimal::from_str(raw.trim()).ok()
}

fn parse_integer(raw: &str) -> Option<u32> {
    raw.trim().parse::<u32>().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_raw() -> RawSalaryInput {
        RawSalaryInput {
            gross_monthly_salary: "4000".to_string(),
            age: "35".to_string(),
            hours_per_week: "40".to_string(),
            pension_contribution_pct: "5".to_string(),
        }
    }

    fn error_fields(result: &ValidationResult) -> Vec<InputField> {
        result.errors.iter().map(|e| e.field).collect()
    }

    /// VA-001: a fully valid record passes
    #[test]
    fn test_valid_record_passes() {
        let result = validate_salary_input(&valid_raw());

        assert!(result.is_valid);
        assert!(result.errors.is_empty());
    }

    /// VA-002: non-numeric gross salary is reported on its field
    #[test]
    fn test_non_numeric_gross_is_reported() {
        let mut raw = valid_raw();
        raw.gross_monthly_salary = "four thousand".to_string();

        let result = validate_salary_input(&raw);

        assert!(!result.is_valid);
        assert_eq!(error_fields(&result), vec![InputField::GrossMonthlySalary]);
    }

    /// VA-003: zero and negative gross salaries are rejected
    #[test]
    fn test_non_positive_gross_is_rejected() {
        for value in ["0", "-100"] {
            let mut raw = valid_raw();
            raw.gross_monthly_salary = value.to_string();

            assert!(!validate_salary_input(&raw).is_valid, "accepted {value}");
        }
    }

    /// VA-004: an implausibly high gross salary is rejected
    #[test]
    fn test_implausibly_high_gross_is_rejected() {
        let mut raw = valid_raw();
        raw.gross_monthly_salary = "100001".to_string();

        let result = validate_salary_input(&raw);

        assert!(!result.is_valid);
        assert!(result.errors[0].message.contains("unrealistically high"));
    }

    /// VA-005: age outside 16..=100 is rejected
    #[test]
    fn test_age_out_of_range_is_rejected() {
        for value in ["15", "101", "abc", ""] {
            let mut raw = valid_raw();
            raw.age = value.to_string();

            let result = validate_salary_input(&raw);
            assert_eq!(error_fields(&result), vec![InputField::Age], "value {value}");
        }
    }

    /// VA-006: hours outside 1..=60 are rejected
    #[test]
    fn test_hours_out_of_range_are_rejected() {
        for value in ["0", "61", "x"] {
            let mut raw = valid_raw();
            raw.hours_per_week = value.to_string();

            let result = validate_salary_input(&raw);
            assert_eq!(error_fields(&result), vec![InputField::HoursPerWeek]);
        }
    }

    /// VA-007: pension outside 0..=100 is rejected
    #[test]
    fn test_pension_out_of_range_is_rejected() {
        for value in ["-1", "100.5", "pct"] {
            let mut raw = valid_raw();
            raw.pension_contribution_pct = value.to_string();

            let result = validate_salary_input(&raw);
            assert_eq!(
                error_fields(&result),
                vec![InputField::PensionContributionPct]
            );
        }
    }

    /// VA-008: every bad field is reported at once
    #[test]
    fn test_all_bad_fields_reported_at_once() {
        let raw = RawSalaryInput {
            gross_monthly_salary: "".to_string(),
            age: "5".to_string(),
            hours_per_week: "0".to_string(),
            pension_contribution_pct: "200".to_string(),
        };

        let result = validate_salary_input(&raw);

        assert_eq!(result.errors.len(), 4);
        assert_eq!(
            error_fields(&result),
            vec![
                InputField::GrossMonthlySalary,
                InputField::Age,
                InputField::HoursPerWeek,
                InputField::PensionContributionPct,
            ]
        );
    }

    /// VA-009: surrounding whitespace is tolerated
    #[test]
    fn test_whitespace_is_tolerated() {
        let mut raw = valid_raw();
        raw.gross_monthly_salary = " 4000.50 ".to_string();
        raw.hours_per_week = " 32 ".to_string();

        assert!(validate_salary_input(&raw).is_valid);
    }

    /// VA-010: a validated record parses into a CalcInput
    #[test]
    fn test_validated_record_parses_into_calc_input() {
        let input = valid_raw().to_calc_input(true, false).unwrap();

        assert_eq!(input.gross_monthly_salary, Decimal::from(4000));
        assert_eq!(input.age, Some(35));
        assert_eq!(input.hours_per_week, 40);
        assert!(input.holiday_allowance_enabled);
        assert!(!input.thirteenth_month_enabled);
        assert_eq!(input.pension_contribution_pct, Decimal::from(5));
    }

    /// VA-011: an invalid record refuses to parse
    #[test]
    fn test_invalid_record_refuses_to_parse() {
        let mut raw = valid_raw();
        raw.hours_per_week = "99".to_string();

        let errors = raw.to_calc_input(false, false).unwrap_err();

        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].field, InputField::HoursPerWeek);
    }

    /// VA-012: validation errors serialize with wire field names
    #[test]
    fn test_validation_errors_serialize_with_wire_names() {
        let mut raw = valid_raw();
        raw.age = "abc".to_string();

        let result = validate_salary_input(&raw);
        let json = serde_json::to_value(&result).unwrap();

        assert_eq!(json["isValid"], serde_json::json!(false));
        assert_eq!(json["errors"][0]["field"], serde_json::json!("age"));
    }
}
