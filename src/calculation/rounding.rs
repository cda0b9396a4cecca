//! The fixed-point rounding policy.
//!
//! All monetary arithmetic is exact `Decimal`; rounding happens at a small
//! number of named points. Bracket tax and credits round to cents. The
//! pension deduction, the holiday allowance gross and the final monthly net
//! round to whole euros. Midpoint rounds away from zero in both cases.

use rust_decimal::{Decimal, RoundingStrategy};

/// Rounds a euro amount to cents.
pub fn to_cents(amount: Decimal) -> Decimal {
    amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}

/// Rounds a euro amount to whole euros.
pub fn to_whole_euros(amount: Decimal) -> Decimal {
    amount.round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
}
