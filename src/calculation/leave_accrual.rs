//! Annual-leave accrual calculation functionality.
//!
//! This module determines an employee's leave accrual rate in hours per
//! biweekly pay period from their category and tenure band, then totals the
//! accrual over a number of pay periods.
//!
//! ## Rate Structure
//!
//! - **Full-time:** 4 / 6 / 8 hours per period across the three tenure bands.
//! - **Part-time:** one hour per 20 / 13 / 10 hours in a pay status.
//! - **Uncommon tours:** the full-time rate scaled by average tour hours
//!   against the standard 80-hour biweekly tour.
//! - **SES-class:** 8 hours per period regardless of tenure.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::config::{BenefitsPolicy, TenureRates};
use crate::error::{EngineError, EngineResult};
use crate::models::{EmployeeCategory, EmployeeProfile};

/// The result of a leave accrual calculation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LeaveAccrualResult {
    /// The accrual rate in hours per pay period.
    pub rate_per_period: Decimal,
    /// Total accrued leave hours over the requested pay periods.
    pub total_hours: Decimal,
}

/// Selects the tenure-band value for the given years of service.
fn band_value(rates: &TenureRates, years: Decimal, policy: &BenefitsPolicy) -> Decimal {
    if years < policy.leave.tenure_mid_years {
        rates.under_mid
    } else if years < policy.leave.tenure_senior_years {
        rates.mid_to_senior
    } else {
        rates.senior
    }
}

/// Calculates accrued annual leave for an employee over a number of pay periods.
///
/// The per-period rate is determined by the employee's category and tenure
/// band per the policy tables; the result is `rate × pay_periods`.
///
/// # Errors
///
/// Returns [`EngineError::MissingField`] when a part-time profile lacks
/// `hours_in_pay_status` or an uncommon-tour profile lacks
/// `avg_hours_per_period`.
///
/// # Examples
///
/// ```
/// use benefits_engine::calculation::calculate_leave_accrual;
/// use benefits_engine::config::BenefitsPolicy;
/// use benefits_engine::models::{EmployeeCategory, EmployeeProfile};
/// use rust_decimal::Decimal;
///
/// let policy = BenefitsPolicy::default();
/// let profile = EmployeeProfile::new(EmployeeCategory::FullTime, Decimal::from(5));
///
/// let result = calculate_leave_accrual(&profile, 26, &policy).unwrap();
/// assert_eq!(result.total_hours, Decimal::from(156));
/// ```
pub fn calculate_leave_accrual(
    profile: &EmployeeProfile,
    pay_periods: u32,
    policy: &BenefitsPolicy,
) -> EngineResult<LeaveAccrualResult> {
    let years = profile.years_of_service;

    let rate_per_period = match profile.category {
        EmployeeCategory::FullTime => band_value(&policy.leave.full_time_hours, years, policy),
        EmployeeCategory::PartTime => {
            let hours =
                profile
                    .hours_in_pay_status
                    .ok_or_else(|| EngineError::MissingField {
                        field: "hours_in_pay_status".to_string(),
                        message: "required for part-time employees".to_string(),
                    })?;
            hours / band_value(&policy.leave.part_time_divisors, years, policy)
        }
        EmployeeCategory::UncommonTour => {
            let avg_hours =
                profile
                    .avg_hours_per_period
                    .ok_or_else(|| EngineError::MissingField {
                        field: "avg_hours_per_period".to_string(),
                        message: "required for uncommon tours of duty".to_string(),
                    })?;
            band_value(&policy.leave.full_time_hours, years, policy) * avg_hours
                / policy.leave.uncommon_tour_standard_hours
        }
        EmployeeCategory::Ses => policy.leave.ses_hours_per_period,
    };

    Ok(LeaveAccrualResult {
        rate_per_period,
        total_hours: rate_per_period * Decimal::from(pay_periods),
    })
}
