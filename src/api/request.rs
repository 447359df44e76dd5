//! Request types for the Benefits Calculation Engine API.
//!
//! This module defines the JSON request structures for the calculation
//! endpoints, one per calculator.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::calculation::{DrpComparisonInput, FrontloadInput, GrowthInput, SeveranceInput};
use crate::models::{
    ContributionSpec, EmployeeCategory, EmployeeProfile, LoanTerms, LoanType, ServicePeriod,
};

/// Request body for the `/leave/accrual` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LeaveAccrualRequest {
    /// The employee's accrual category.
    pub category: EmployeeCategory,
    /// Completed years of creditable service.
    pub years_of_service: Decimal,
    /// Hours in a pay status per period; required for part-time employees.
    #[serde(default)]
    pub hours_in_pay_status: Option<Decimal>,
    /// Average biweekly tour hours; required for uncommon tours of duty.
    #[serde(default)]
    pub avg_hours_per_period: Option<Decimal>,
    /// Number of pay periods to accrue over.
    pub pay_periods: u32,
}

impl From<&LeaveAccrualRequest> for EmployeeProfile {
    fn from(req: &LeaveAccrualRequest) -> Self {
        EmployeeProfile {
            category: req.category,
            years_of_service: req.years_of_service,
            hours_in_pay_status: req.hours_in_pay_status,
            avg_hours_per_period: req.avg_hours_per_period,
        }
    }
}

/// Request body for the `/leave/lump-sum` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LumpSumRequest {
    /// The employee's hourly rate of pay.
    pub hourly_rate: Decimal,
    /// Unused annual leave hours to pay out.
    pub leave_hours: Decimal,
}

/// Request body for the `/severance` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SeveranceRequest {
    /// Annual salary in dollars.
    pub annual_salary: Decimal,
    /// Completed years of creditable service.
    pub years_of_service: u32,
    /// Additional months of service (0–11).
    #[serde(default)]
    pub months_of_service: u32,
    /// Age in completed years.
    pub age_years: u32,
    /// Additional months of age (0–11).
    #[serde(default)]
    pub age_months: u32,
}

impl From<SeveranceRequest> for SeveranceInput {
    fn from(req: SeveranceRequest) -> Self {
        SeveranceInput {
            annual_salary: req.annual_salary,
            years_of_service: req.years_of_service,
            months_of_service: req.months_of_service,
            age_years: req.age_years,
            age_months: req.age_months,
        }
    }
}

/// A prior service period in an SCD request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServicePeriodRequest {
    /// First day of the period (inclusive).
    pub start_date: NaiveDate,
    /// Last day of the period (inclusive).
    pub end_date: NaiveDate,
}

impl From<ServicePeriodRequest> for ServicePeriod {
    fn from(req: ServicePeriodRequest) -> Self {
        ServicePeriod {
            start_date: req.start_date,
            end_date: req.end_date,
        }
    }
}

/// Request body for the `/scd` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScdRequest {
    /// Start date of the current appointment.
    pub current_start_date: NaiveDate,
    /// Prior creditable service periods.
    #[serde(default)]
    pub prior_periods: Vec<ServicePeriodRequest>,
    /// Date the calculation is made as of.
    pub as_of_date: NaiveDate,
}

/// Request body for the `/tsp/growth` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GrowthRequest {
    /// Starting account balance.
    pub current_balance: Decimal,
    /// Annual contribution, flat or percentage-based.
    pub contributions: ContributionSpec,
    /// Projection horizon in whole years.
    pub years: u32,
    /// Annual growth rate as a percentage.
    pub annual_growth_pct: Decimal,
    /// Optional annual inflation rate as a percentage.
    #[serde(default)]
    pub inflation_pct: Option<Decimal>,
}

impl From<GrowthRequest> for GrowthInput {
    fn from(req: GrowthRequest) -> Self {
        GrowthInput {
            current_balance: req.current_balance,
            contributions: req.contributions,
            years: req.years,
            annual_growth_pct: req.annual_growth_pct,
            inflation_pct: req.inflation_pct,
        }
    }
}

/// Request body for the `/tsp/loan` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoanRequest {
    /// General-purpose or residential loan.
    pub loan_type: LoanType,
    /// Loan amount.
    pub amount: Decimal,
    /// Annual interest rate as a percentage.
    pub annual_interest_pct: Decimal,
    /// Repayment term in biweekly pay periods.
    pub num_pay_periods: u32,
    /// Current TSP balance.
    pub current_balance: Decimal,
    /// Assumed annual growth rate as a percentage.
    pub annual_growth_pct: Decimal,
    /// Biweekly contribution on the no-loan track.
    pub biweekly_contribution_no_loan: Decimal,
    /// Biweekly contribution while repaying the loan.
    pub biweekly_contribution_with_loan: Decimal,
}

impl LoanRequest {
    /// Splits the request into loan terms and account-side inputs.
    pub fn into_parts(self) -> (LoanTerms, crate::calculation::LoanSimulationInput) {
        (
            LoanTerms {
                loan_type: self.loan_type,
                amount: self.amount,
                annual_interest_pct: self.annual_interest_pct,
                num_pay_periods: self.num_pay_periods,
            },
            crate::calculation::LoanSimulationInput {
                current_balance: self.current_balance,
                annual_growth_pct: self.annual_growth_pct,
                biweekly_contribution_no_loan: self.biweekly_contribution_no_loan,
                biweekly_contribution_with_loan: self.biweekly_contribution_with_loan,
            },
        )
    }
}

/// Request body for the `/tsp/frontload` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FrontloadRequest {
    /// Annual salary the agency match is computed from.
    pub annual_salary: Decimal,
    /// Total employee investment target for the year.
    pub target_investment: Decimal,
    /// Maximum employee contribution per pay period.
    pub max_biweekly: Decimal,
    /// Agency match as a percentage of salary.
    pub match_pct: Decimal,
    /// Assumed annual growth rate as a percentage.
    pub annual_growth_pct: Decimal,
    /// Whether the agency match is included in the growing balance.
    #[serde(default)]
    pub include_match_in_growth: bool,
}

impl From<FrontloadRequest> for FrontloadInput {
    fn from(req: FrontloadRequest) -> Self {
        FrontloadInput {
            annual_salary: req.annual_salary,
            target_investment: req.target_investment,
            max_biweekly: req.max_biweekly,
            match_pct: req.match_pct,
            annual_growth_pct: req.annual_growth_pct,
            include_match_in_growth: req.include_match_in_growth,
        }
    }
}

/// Request body for the `/drp/comparison` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DrpRequest {
    /// Biweekly salary on administrative leave.
    pub biweekly_salary: Decimal,
    /// Date the deferred resignation would begin.
    pub drp_start_date: NaiveDate,
    /// Estimated severance payment under a reduction in force.
    pub severance_estimate: Decimal,
    /// Pay periods worked before a RIF separation.
    pub rif_pay_periods: u32,
    /// Optional override of the fiscal-year-end payout horizon; defaults to
    /// the policy calendar for the DRP start year.
    #[serde(default)]
    pub fiscal_year_end: Option<NaiveDate>,
}

impl From<&DrpRequest> for DrpComparisonInput {
    fn from(req: &DrpRequest) -> Self {
        DrpComparisonInput {
            biweekly_salary: req.biweekly_salary,
            drp_start_date: req.drp_start_date,
            severance_estimate: req.severance_estimate,
            rif_pay_periods: req.rif_pay_periods,
        }
    }
}
