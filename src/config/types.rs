//! Policy configuration types.
//!
//! This module contains the strongly-typed policy structures that are
//! deserialized from YAML configuration files. Every constant the
//! calculators need — accrual bands, the OPM weekly-pay divisor, loan
//! bounds and fees, the fiscal-year cutoff — lives here rather than as a
//! literal inside a calculator, so a policy-year change is a config edit.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Deserialize;

use crate::models::LoanType;

/// Metadata about the policy tables.
#[derive(Debug, Clone, Deserialize)]
pub struct PolicyMetadata {
    /// A short code identifying the policy set (e.g., "opm-2025").
    pub code: String,
    /// The human-readable name of the policy set.
    pub name: String,
    /// The version or effective date of the policy set.
    pub version: String,
    /// URL to the authoritative OPM documentation.
    pub source_url: String,
}

/// A value that varies with the three federal-service tenure bands.
///
/// The bands are: under `tenure_mid_years` of service, from `tenure_mid_years`
/// to `tenure_senior_years`, and `tenure_senior_years` or more (thresholds on
/// [`LeavePolicy`]).
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct TenureRates {
    /// Value for service below the first threshold.
    pub under_mid: Decimal,
    /// Value for service between the two thresholds.
    pub mid_to_senior: Decimal,
    /// Value for service at or beyond the second threshold.
    pub senior: Decimal,
}

/// Annual-leave accrual policy.
#[derive(Debug, Clone, Deserialize)]
pub struct LeavePolicy {
    /// Years of service at which the middle accrual band begins.
    pub tenure_mid_years: Decimal,
    /// Years of service at which the senior accrual band begins.
    pub tenure_senior_years: Decimal,
    /// Full-time accrual in hours per pay period, by tenure band.
    pub full_time_hours: TenureRates,
    /// Part-time divisors: one leave hour accrues per this many hours in a
    /// pay status, by tenure band.
    pub part_time_divisors: TenureRates,
    /// The standard biweekly hours an uncommon tour is scaled against.
    pub uncommon_tour_standard_hours: Decimal,
    /// Accrual in hours per pay period for SES-class positions, any tenure.
    pub ses_hours_per_period: Decimal,
}

/// Severance pay policy.
#[derive(Debug, Clone, Deserialize)]
pub struct SeverancePolicy {
    /// Divisor converting annual salary to weekly pay (OPM uses 52.175,
    /// not the calendar 52).
    pub weekly_pay_divisor: Decimal,
    /// Years of service paid at one week of pay per year.
    pub single_credit_years: Decimal,
    /// Maximum severance expressed in weeks of pay.
    pub cap_weeks: Decimal,
    /// Age beyond which the age adjustment applies, in years.
    pub age_threshold_years: i64,
    /// Adjustment factor per full three-month increment over the threshold.
    pub age_quarter_factor: Decimal,
    /// Credit per full three-month block of partial service, as a fraction
    /// of a double week of pay.
    pub partial_quarter_factor: Decimal,
}

/// Policy bounds for one TSP loan type.
#[derive(Debug, Clone, Deserialize)]
pub struct LoanTypePolicy {
    /// Minimum repayment term in pay periods (inclusive).
    pub min_periods: u32,
    /// Maximum repayment term in pay periods (inclusive).
    pub max_periods: u32,
    /// One-time processing fee deducted at issuance, in dollars.
    pub processing_fee: Decimal,
}

/// TSP loan policy across loan types.
#[derive(Debug, Clone, Deserialize)]
pub struct LoanPolicy {
    /// Minimum loan amount in dollars.
    pub min_amount: Decimal,
    /// Maximum loan amount in dollars.
    pub max_amount: Decimal,
    /// Bounds for general-purpose loans.
    pub general: LoanTypePolicy,
    /// Bounds for residential loans.
    pub residential: LoanTypePolicy,
}

impl LoanPolicy {
    /// Returns the bounds for the given loan type.
    pub fn bounds_for(&self, loan_type: LoanType) -> &LoanTypePolicy {
        match loan_type {
            LoanType::General => &self.general,
            LoanType::Residential => &self.residential,
        }
    }
}

/// TSP policy.
#[derive(Debug, Clone, Deserialize)]
pub struct TspPolicy {
    /// Biweekly pay periods per calendar year.
    pub pay_periods_per_year: u32,
    /// Loan bounds and fees.
    pub loan: LoanPolicy,
}

/// The fiscal-year end used as the DRP payout horizon.
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct FiscalYearEnd {
    /// The month of the fiscal-year end (September is 9).
    pub month: u32,
    /// The day of the fiscal-year end.
    pub day: u32,
}

impl FiscalYearEnd {
    /// Returns the fiscal-year-end date falling in the given calendar year.
    pub fn in_year(&self, year: i32) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(year, self.month, self.day)
    }
}

/// The complete benefits policy consumed by the calculators.
///
/// Loaded from YAML by [`crate::config::ConfigLoader`]; the `Default`
/// implementation carries the same values as the shipped `config/opm`
/// files so library users and tests need no filesystem access.
#[derive(Debug, Clone)]
pub struct BenefitsPolicy {
    /// Policy metadata.
    pub metadata: PolicyMetadata,
    /// Annual-leave accrual policy.
    pub leave: LeavePolicy,
    /// Severance pay policy.
    pub severance: SeverancePolicy,
    /// TSP policy.
    pub tsp: TspPolicy,
    /// The fiscal-year end used for DRP comparisons.
    pub fiscal_year_end: FiscalYearEnd,
}

impl Default for BenefitsPolicy {
    fn default() -> Self {
        Self {
            metadata: PolicyMetadata {
                code: "opm-2025".to_string(),
                name: "OPM Federal Benefits Policy".to_string(),
                version: "2025-01-01".to_string(),
                source_url: "https://www.opm.gov/policy-data-oversight/pay-leave/".to_string(),
            },
            leave: LeavePolicy {
                tenure_mid_years: Decimal::from(3),
                tenure_senior_years: Decimal::from(15),
                full_time_hours: TenureRates {
                    under_mid: Decimal::from(4),
                    mid_to_senior: Decimal::from(6),
                    senior: Decimal::from(8),
                },
                part_time_divisors: TenureRates {
                    under_mid: Decimal::from(20),
                    mid_to_senior: Decimal::from(13),
                    senior: Decimal::from(10),
                },
                uncommon_tour_standard_hours: Decimal::from(80),
                ses_hours_per_period: Decimal::from(8),
            },
            severance: SeverancePolicy {
                weekly_pay_divisor: Decimal::new(52_175, 3),
                single_credit_years: Decimal::from(10),
                cap_weeks: Decimal::from(52),
                age_threshold_years: 40,
                age_quarter_factor: Decimal::new(25, 3),
                partial_quarter_factor: Decimal::new(25, 2),
            },
            tsp: TspPolicy {
                pay_periods_per_year: 26,
                loan: LoanPolicy {
                    min_amount: Decimal::from(1000),
                    max_amount: Decimal::from(50_000),
                    general: LoanTypePolicy {
                        min_periods: 26,
                        max_periods: 130,
                        processing_fee: Decimal::from(50),
                    },
                    residential: LoanTypePolicy {
                        min_periods: 131,
                        max_periods: 390,
                        processing_fee: Decimal::from(100),
                    },
                },
            },
            fiscal_year_end: FiscalYearEnd { month: 9, day: 30 },
        }
    }
}
