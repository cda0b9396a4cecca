//! Calculation logic for the Net Salary Engine.
//!
//! This module contains all the calculation functions for deriving a net
//! monthly salary: progressive bracket tax, the two wage tax credits, the
//! credit cap, full-time-equivalent scaling, the marginal-delta treatment of
//! supplemental payments, and the orchestrating net salary computation.

mod bracket_tax;
mod credits;
mod net_salary;
mod rounding;
mod scaling;
mod supplements;
mod tax_after_credits;

pub use bracket_tax::tax_by_brackets;
pub use credits::{general_credit, labour_credit};
pub use net_salary::compute_net_monthly;
pub use rounding::{to_cents, to_whole_euros};
pub use scaling::{FULL_TIME_HOURS_PER_WEEK, FteScaling, scale_to_contract_hours};
pub use supplements::{
    SupplementResult, holiday_allowance_gross, holiday_allowance_rate, supplement_net,
};
pub use tax_after_credits::{TaxAssessment, assess_annual_tax};
