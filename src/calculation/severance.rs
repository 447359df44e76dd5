//! Severance pay calculation functionality.
//!
//! This module computes severance pay for an involuntarily separated
//! employee from salary, length of service, and age.
//!
//! ## Formula
//!
//! - Weekly pay is annual salary divided by the OPM 52.175 divisor.
//! - Basic severance credits one week of pay per year of service for the
//!   first 10 years and two weeks per year beyond 10.
//! - Each full 3-month block of service beyond the completed years adds a
//!   quarter of a double week of pay.
//! - The age adjustment adds 2.5% of the pre-adjustment total for every full
//!   3-month increment of age over 40 (the continuous quarter-count rule;
//!   historical stepwise and interpolated variants are not used).
//! - Total severance is capped at one year of pay (52 weeks), and the weeks
//!   figure is capped at 52.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::config::BenefitsPolicy;
use crate::error::{EngineError, EngineResult};

/// Inputs for a severance pay calculation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeveranceInput {
    /// Annual salary in dollars; must be positive.
    pub annual_salary: Decimal,
    /// Completed years of creditable service.
    pub years_of_service: u32,
    /// Additional months of service beyond the completed years (0–11).
    pub months_of_service: u32,
    /// Age in completed years.
    pub age_years: u32,
    /// Additional months of age beyond the completed years (0–11).
    pub age_months: u32,
}

/// The result of a severance pay calculation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeveranceResult {
    /// Weekly pay derived from the annual salary.
    pub weekly_pay: Decimal,
    /// The basic severance allowance from full years of service.
    pub basic_severance: Decimal,
    /// The total before the age adjustment (basic plus partial-service credit).
    pub pre_age_adjustment: Decimal,
    /// The age adjustment amount.
    pub age_adjustment: Decimal,
    /// Total severance after the age adjustment and the one-year cap.
    pub total_severance: Decimal,
    /// The biweekly payment at which severance is paid out.
    pub biweekly_payment: Decimal,
    /// Total severance expressed in weeks of pay, capped at 52.
    pub weeks_of_severance: Decimal,
}

/// Calculates severance pay from salary, service, and age.
///
/// # Errors
///
/// Returns [`EngineError::CalculationError`] when the salary is not positive
/// or a months field exceeds 11.
///
/// # Examples
///
/// ```
/// use benefits_engine::calculation::{SeveranceInput, calculate_severance};
/// use benefits_engine::config::BenefitsPolicy;
/// use rust_decimal::Decimal;
///
/// let input = SeveranceInput {
///     annual_salary: Decimal::from(100_000),
///     years_of_service: 12,
///     months_of_service: 0,
///     age_years: 45,
///     age_months: 0,
/// };
/// let result = calculate_severance(&input, &BenefitsPolicy::default()).unwrap();
///
/// // 14 weeks basic, plus 50% age adjustment for 20 quarters over 40.
/// assert_eq!(
///     result.total_severance.round_dp(2),
///     (result.pre_age_adjustment * Decimal::new(15, 1)).round_dp(2),
/// );
/// ```
pub fn calculate_severance(
    input: &SeveranceInput,
    policy: &BenefitsPolicy,
) -> EngineResult<SeveranceResult> {
    if input.annual_salary <= Decimal::ZERO {
        return Err(EngineError::CalculationError {
            message: "annual salary must be positive".to_string(),
        });
    }
    if input.months_of_service > 11 || input.age_months > 11 {
        return Err(EngineError::CalculationError {
            message: "months fields must be in the range 0-11".to_string(),
        });
    }

    let severance = &policy.severance;
    let two = Decimal::from(2);

    let weekly_pay = input.annual_salary / severance.weekly_pay_divisor;

    // One week per year up to the single-credit threshold, two weeks per
    // year beyond it.
    let years = Decimal::from(input.years_of_service);
    let single_years = years.min(severance.single_credit_years);
    let double_years = (years - severance.single_credit_years).max(Decimal::ZERO);
    let basic_severance = weekly_pay * (single_years + two * double_years);

    // Each full 3-month block of leftover service credits a quarter of a
    // double week.
    let partial_quarters = Decimal::from(input.months_of_service / 3);
    let partial_credit = partial_quarters * severance.partial_quarter_factor * two * weekly_pay;

    let pre_age_adjustment = basic_severance + partial_credit;

    // Continuous quarter count: full 3-month increments of age over the
    // threshold, clamped at zero below it.
    let quarters_over_threshold = ((i64::from(input.age_years) - severance.age_threshold_years) * 4
        + i64::from(input.age_months / 3))
    .max(0);
    let age_adjustment =
        pre_age_adjustment * severance.age_quarter_factor * Decimal::from(quarters_over_threshold);

    let cap = weekly_pay * severance.cap_weeks;
    let total_severance = (pre_age_adjustment + age_adjustment).min(cap);
    let weeks_of_severance = (total_severance / weekly_pay).min(severance.cap_weeks);

    Ok(SeveranceResult {
        weekly_pay,
        basic_severance,
        pre_age_adjustment,
        age_adjustment,
        total_severance,
        biweekly_payment: two * weekly_pay,
        weeks_of_severance,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn input(salary: &str, years: u32, months: u32, age_years: u32, age_months: u32) -> SeveranceInput {
        SeveranceInput {
            annual_salary: dec(salary),
            years_of_service: years,
            months_of_service: months,
            age_years,
            age_months,
        }
    }

    fn severance(input: &SeveranceInput) -> SeveranceResult {
        calculate_severance(input, &BenefitsPolicy::default()).unwrap()
    }

    // ==========================================================================
    // SEV-001: scenario — $100k, 12 years, age 45
    // ==========================================================================
    #[test]
    fn test_scenario_100k_12_years_age_45() {
        let result = severance(&input("100000", 12, 0, 45, 0));

        let weekly = dec("100000") / dec("52.175");
        // 10 single years + 2 double years = 14 weeks.
        assert_eq!(result.basic_severance, weekly * dec("14"));
        assert_eq!(result.pre_age_adjustment, result.basic_severance);

        // 20 quarters over 40 at 2.5% each = 50% adjustment.
        let expected_adj = result.pre_age_adjustment * dec("0.025") * dec("20");
        assert_eq!(result.age_adjustment, expected_adj);

        let total = result.pre_age_adjustment + expected_adj;
        assert_eq!(result.total_severance, total);
        assert!(result.total_severance < dec("100000"));
        assert_eq!(result.biweekly_payment, weekly * dec("2"));
    }

    // ==========================================================================
    // SEV-002: zero service yields zero basic severance
    // ==========================================================================
    #[test]
    fn test_zero_years_zero_basic() {
        let result = severance(&input("80000", 0, 0, 35, 0));

        assert_eq!(result.basic_severance, Decimal::ZERO);
        assert_eq!(result.total_severance, Decimal::ZERO);
        assert_eq!(result.weeks_of_severance, Decimal::ZERO);
    }

    // ==========================================================================
    // SEV-003: weekly pay uses the 52.175 divisor, not 52
    // ==========================================================================
    #[test]
    fn test_weekly_pay_uses_opm_divisor() {
        let result = severance(&input("52175", 1, 0, 30, 0));
        assert_eq!(result.weekly_pay, dec("1000"));
        assert_eq!(result.basic_severance, dec("1000"));
    }

    // ==========================================================================
    // SEV-004: partial-service credit per full 3-month block
    // ==========================================================================
    #[test]
    fn test_partial_months_credit_in_quarter_blocks() {
        let weekly = dec("52175") / dec("52.175");

        // 2 months: no full block, no credit.
        let r2 = severance(&input("52175", 5, 2, 30, 0));
        assert_eq!(r2.pre_age_adjustment, weekly * dec("5"));

        // 3 months: one block, 0.25 × 2 weeks = half a week.
        let r3 = severance(&input("52175", 5, 3, 30, 0));
        assert_eq!(r3.pre_age_adjustment, weekly * dec("5.5"));

        // 11 months: three blocks, 1.5 weeks.
        let r11 = severance(&input("52175", 5, 11, 30, 0));
        assert_eq!(r11.pre_age_adjustment, weekly * dec("6.5"));
    }

    // ==========================================================================
    // SEV-005: age adjustment boundaries
    // ==========================================================================
    #[test]
    fn test_no_age_adjustment_at_or_below_40() {
        let r39 = severance(&input("90000", 10, 0, 39, 11));
        assert_eq!(r39.age_adjustment, Decimal::ZERO);

        let r40 = severance(&input("90000", 10, 0, 40, 0));
        assert_eq!(r40.age_adjustment, Decimal::ZERO);

        // 40y2m: still short of a full quarter.
        let r40_2 = severance(&input("90000", 10, 0, 40, 2));
        assert_eq!(r40_2.age_adjustment, Decimal::ZERO);
    }

    #[test]
    fn test_first_age_quarter_at_40y3m() {
        let result = severance(&input("90000", 10, 0, 40, 3));
        let expected = result.pre_age_adjustment * dec("0.025");
        assert_eq!(result.age_adjustment, expected);
    }

    // ==========================================================================
    // SEV-006: caps — total at one year of pay, weeks at 52
    // ==========================================================================
    #[test]
    fn test_total_capped_at_52_weeks_of_pay() {
        // 30 years at age 60 blows well past the cap without it.
        let result = severance(&input("100000", 30, 0, 60, 0));
        let weekly = dec("100000") / dec("52.175");

        assert_eq!(result.total_severance, weekly * dec("52"));
        assert_eq!(result.weeks_of_severance, dec("52"));
        assert!(result.total_severance < dec("100000"));
    }

    #[test]
    fn test_weeks_never_exceed_52() {
        for (years, age) in [(5u32, 45u32), (15, 50), (25, 55), (40, 64)] {
            let result = severance(&input("75000", years, 6, age, 6));
            assert!(
                result.weeks_of_severance <= dec("52"),
                "weeks exceeded cap for years={} age={}",
                years,
                age
            );
        }
    }

    // ==========================================================================
    // SEV-007: input validation
    // ==========================================================================
    #[test]
    fn test_zero_salary_rejected() {
        let result = calculate_severance(&input("0", 5, 0, 45, 0), &BenefitsPolicy::default());
        assert!(matches!(
            result.unwrap_err(),
            EngineError::CalculationError { .. }
        ));
    }

    #[test]
    fn test_months_out_of_range_rejected() {
        let result = calculate_severance(&input("80000", 5, 12, 45, 0), &BenefitsPolicy::default());
        assert!(matches!(
            result.unwrap_err(),
            EngineError::CalculationError { .. }
        ));
    }
}
