//! TSP loan terms and related types.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// The kind of TSP loan being requested.
///
/// The two kinds differ in allowed repayment terms and processing fee;
/// the bounds live in the TSP policy configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LoanType {
    /// A general-purpose loan (shorter terms, lower fee).
    General,
    /// A residential loan for a primary residence (longer terms, higher fee).
    Residential,
}

/// The terms of a requested TSP loan.
///
/// # Example
///
/// ```
/// use benefits_engine::models::{LoanTerms, LoanType};
/// use rust_decimal::Decimal;
///
/// let terms = LoanTerms {
///     loan_type: LoanType::General,
///     amount: Decimal::from(10_000),
///     annual_interest_pct: Decimal::from(5),
///     num_pay_periods: 130,
/// };
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoanTerms {
    /// The kind of loan.
    pub loan_type: LoanType,
    /// The principal amount borrowed, in dollars.
    pub amount: Decimal,
    /// The annual interest rate as a percentage (5 means 5%).
    pub annual_interest_pct: Decimal,
    /// The repayment term in biweekly pay periods.
    pub num_pay_periods: u32,
}
