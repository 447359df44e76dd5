//! Lump-sum annual leave payout calculation.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// The result of a lump-sum leave payout calculation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LumpSumResult {
    /// The lump-sum payment for the unused leave.
    pub payment: Decimal,
}

/// Calculates the lump-sum payment for unused annual leave.
///
/// The payout is simply `hourly_rate × leave_hours`; non-negativity of the
/// inputs is enforced by the caller.
///
/// # Examples
///
/// ```
/// use benefits_engine::calculation::calculate_lump_sum;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let payment = calculate_lump_sum(
///     Decimal::from_str("38.46").unwrap(),
///     Decimal::from_str("160").unwrap(),
/// );
/// assert_eq!(payment, Decimal::from_str("6153.60").unwrap());
/// ```
pub fn calculate_lump_sum(hourly_rate: Decimal, leave_hours: Decimal) -> Decimal {
    hourly_rate * leave_hours
}
