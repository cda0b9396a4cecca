//! Calculation input model and the input field enumeration.
//!
//! This module defines the [`CalcInput`] record supplied by the presentation
//! layer and the [`InputField`] enum used to key errors to specific fields.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifies one of the user-facing input fields.
///
/// Validation and precondition errors are keyed by this enum rather than by
/// free-form strings, so a typo cannot silently fail to reach the right form
/// control. The serialized names match the wire contract.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum InputField {
    /// The gross monthly salary field.
    GrossMonthlySalary,
    /// The age field.
    Age,
    /// The contracted hours per week field.
    HoursPerWeek,
    /// The employee pension contribution percentage field.
    PensionContributionPct,
}

impl InputField {
    /// Returns the wire-contract name of the field.
    pub fn as_str(&self) -> &'static str {
        match self {
            InputField::GrossMonthlySalary => "grossMonthlySalary",
            InputField::Age => "age",
            InputField::HoursPerWeek => "hoursPerWeek",
            InputField::PensionContributionPct => "pensionContributionPct",
        }
    }
}

impl fmt::Display for InputField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One net salary calculation request.
///
/// Created per user interaction (or per test case) and consumed by
/// [`compute_net_monthly`](crate::calculation::compute_net_monthly) together
/// with an immutable tax year configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CalcInput {
    /// The gross monthly salary in euros. Must be greater than zero.
    pub gross_monthly_salary: Decimal,
    /// The employee's age. Not read by the current tax tables; reserved for
    /// AOW-age bracket variants.
    #[serde(default)]
    pub age: Option<u32>,
    /// Contracted hours per week, 1..=60. A 40-hour week is full-time.
    pub hours_per_week: u32,
    /// Whether the statutory 8% holiday allowance is paid.
    pub holiday_allowance_enabled: bool,
    /// The employee pension contribution as a percentage of annual gross.
    /// Clamped to 0..=100 before use.
    pub pension_contribution_pct: Decimal,
    /// Whether a 13th month bonus (one scaled monthly gross) is paid.
    pub thirteenth_month_enabled: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn create_test_input() -> CalcInput {
        CalcInput {
            gross_monthly_salary: dec("4000"),
            age: Some(35),
            hours_per_week: 40,
            holiday_allowance_enabled: false,
            pension_contribution_pct: dec("0"),
            thirteenth_month_enabled: false,
        }
    }

    #[test]
    fn test_deserialize_calc_input_from_wire_names() {
        let json = r#"{
            "grossMonthlySalary": "4000",
            "age": 35,
            "hoursPerWeek": 40,
            "holidayAllowanceEnabled": true,
            "pensionContributionPct": "5.5",
            "thirteenthMonthEnabled": false
        }"#;

        let input: CalcInput = serde_json::from_str(json).unwrap();
        assert_eq!(input.gross_monthly_salary, dec("4000"));
        assert_eq!(input.age, Some(35));
        assert_eq!(input.hours_per_week, 40);
        assert!(input.holiday_allowance_enabled);
        assert_eq!(input.pension_contribution_pct, dec("5.5"));
        assert!(!input.thirteenth_month_enabled);
    }

    #[test]
    fn test_age_defaults_to_none_when_absent() {
        let json = r#"{
            "grossMonthlySalary": "2500",
            "hoursPerWeek": 32,
            "holidayAllowanceEnabled": false,
            "pensionContributionPct": "0",
            "thirteenthMonthEnabled": false
        }"#;

        let input: CalcInput = serde_json::from_str(json).unwrap();
        assert_eq!(input.age, None);
    }

    #[test]
    fn test_serialize_calc_input_round_trip() {
        let input = create_test_input();
        let json = serde_json::to_string(&input).unwrap();
        let deserialized: CalcInput = serde_json::from_str(&json).unwrap();
        assert_eq!(input, deserialized);
    }

    #[test]
    fn test_input_field_display_matches_wire_contract() {
        assert_eq!(
            InputField::GrossMonthlySalary.to_string(),
            "grossMonthlySalary"
        );
        assert_eq!(InputField::Age.to_string(), "age");
        assert_eq!(InputField::HoursPerWeek.to_string(), "hoursPerWeek");
        assert_eq!(
            InputField::PensionContributionPct.to_string(),
            "pensionContributionPct"
        );
    }

    #[test]
    fn test_input_field_serialization() {
        assert_eq!(
            serde_json::to_string(&InputField::HoursPerWeek).unwrap(),
            "\"hoursPerWeek\""
        );
        assert_eq!(
            serde_json::to_string(&InputField::PensionContributionPct).unwrap(),
            "\"pensionContributionPct\""
        );
    }
}
