//! Calculation logic for the Benefits Calculation Engine.
//!
//! This module contains all the calculator functions: annual-leave accrual
//! rate lookup, lump-sum leave payout, severance pay with age adjustment and
//! caps, service computation date (SCD) adjustment, TSP compound-growth
//! projection, TSP loan amortization with opportunity-cost tracking, TSP
//! front-load schedule optimization, and DRP-versus-severance comparison.

mod drp_comparison;
mod leave_accrual;
mod lump_sum;
mod scd;
mod severance;
mod tsp_frontload;
mod tsp_growth;
mod tsp_loan;

pub use drp_comparison::{DrpComparison, DrpComparisonInput, DrpOutcome, compare_drp};
pub use leave_accrual::{LeaveAccrualResult, calculate_leave_accrual};
pub use lump_sum::{LumpSumResult, calculate_lump_sum};
pub use scd::{ScdResult, ServiceCreditRow, calculate_scd};
pub use severance::{SeveranceInput, SeveranceResult, calculate_severance};
pub use tsp_frontload::{
    FrontloadComparison, FrontloadInput, ScheduleRow, optimize_tsp_frontload,
};
pub use tsp_growth::{GrowthInput, GrowthProjection, GrowthYearRow, project_tsp_growth};
pub use tsp_loan::{LoanLedgerRow, LoanSimulation, LoanSimulationInput, simulate_tsp_loan};
