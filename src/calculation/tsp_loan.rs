//! TSP loan amortization and opportunity-cost simulation.
//!
//! A TSP loan is repaid to the borrower's own account through biweekly
//! payroll deductions, so the true cost of borrowing is not the interest
//! (which the borrower keeps) but the growth the withdrawn principal misses
//! while it is out of the account, plus the processing fee and any reduced
//! contributions during repayment.
//!
//! The simulator runs two parallel account tracks over a common horizon:
//! one where no loan is taken and one where the loan principal leaves the
//! account up front and repayments flow back in period by period. The
//! difference between the two ending balances is the opportunity cost.

use rust_decimal::{Decimal, MathematicalOps};
use serde::{Deserialize, Serialize};

use crate::config::BenefitsPolicy;
use crate::error::{EngineError, EngineResult};
use crate::models::LoanTerms;

/// Account-side inputs for a loan simulation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoanSimulationInput {
    /// Current TSP balance; the loan cannot exceed it.
    pub current_balance: Decimal,
    /// Assumed annual growth rate as a percentage.
    pub annual_growth_pct: Decimal,
    /// Biweekly contribution on the no-loan track.
    pub biweekly_contribution_no_loan: Decimal,
    /// Biweekly contribution while the loan is being repaid.
    pub biweekly_contribution_with_loan: Decimal,
}

/// One biweekly period of the simulation ledger.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoanLedgerRow {
    /// Pay period number, starting at 1.
    pub period: u32,
    /// Interest accrued on the outstanding balance this period.
    pub interest: Decimal,
    /// Principal repaid this period.
    pub principal_paid: Decimal,
    /// Loan balance still outstanding after this period's payment.
    pub outstanding_balance: Decimal,
    /// Account balance on the no-loan track.
    pub balance_without_loan: Decimal,
    /// Account balance on the with-loan track.
    pub balance_with_loan: Decimal,
}

/// The result of a TSP loan simulation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoanSimulation {
    /// Level biweekly payment.
    pub payment: Decimal,
    /// One-time processing fee for the loan type.
    pub processing_fee: Decimal,
    /// Total repaid over the term (principal plus interest).
    pub total_repaid: Decimal,
    /// Ending balance on the no-loan track.
    pub final_balance_without_loan: Decimal,
    /// Ending balance on the with-loan track.
    pub final_balance_with_loan: Decimal,
    /// Difference between the two ending balances.
    pub opportunity_cost: Decimal,
    /// Period-by-period ledger over the full horizon.
    pub ledger: Vec<LoanLedgerRow>,
}

/// Simulates a TSP loan against a no-loan baseline.
///
/// The biweekly payment is the standard level-payment amortization of the
/// loan amount at the biweekly interest rate. The simulation horizon is the
/// loan term rounded to the nearest whole year of pay periods, so both
/// tracks are compared over the same span.
///
/// # Errors
///
/// Returns [`EngineError::InvalidLoan`] when the amount is outside the
/// policy limits, exceeds the current balance, or the term is outside the
/// bounds for the loan type.
pub fn simulate_tsp_loan(
    terms: &LoanTerms,
    input: &LoanSimulationInput,
    policy: &BenefitsPolicy,
) -> EngineResult<LoanSimulation> {
    let loan_policy = &policy.tsp.loan;
    if terms.amount < loan_policy.min_amount || terms.amount > loan_policy.max_amount {
        return Err(EngineError::InvalidLoan {
            message: format!(
                "loan amount must be between {} and {}",
                loan_policy.min_amount, loan_policy.max_amount
            ),
        });
    }
    if terms.amount > input.current_balance {
        return Err(EngineError::InvalidLoan {
            message: "loan amount cannot exceed the current balance".to_string(),
        });
    }
    let bounds = loan_policy.bounds_for(terms.loan_type);
    if terms.num_pay_periods < bounds.min_periods || terms.num_pay_periods > bounds.max_periods {
        return Err(EngineError::InvalidLoan {
            message: format!(
                "term must be between {} and {} pay periods",
                bounds.min_periods, bounds.max_periods
            ),
        });
    }

    let ppy = policy.tsp.pay_periods_per_year;
    let hundred = Decimal::from(100);
    let periods_per_year = Decimal::from(ppy);
    let rate = terms.annual_interest_pct / hundred / periods_per_year;
    let growth = input.annual_growth_pct / hundred / periods_per_year;
    let growth_factor = Decimal::ONE + growth;

    let term = terms.num_pay_periods;
    let payment = if rate > Decimal::ZERO {
        terms.amount * rate / (Decimal::ONE - (Decimal::ONE + rate).powi(-i64::from(term)))
    } else {
        terms.amount / Decimal::from(term)
    };

    // Round the term up or down to the nearest whole year of periods, never
    // shorter than the term itself.
    let mut horizon = ((term + ppy / 2) / ppy).max(1) * ppy;
    if horizon < term {
        horizon += ppy;
    }

    let mut outstanding = terms.amount;
    let mut total_repaid = Decimal::ZERO;
    let mut balance_no_loan = input.current_balance;
    let mut balance_with_loan = input.current_balance - (terms.amount + bounds.processing_fee);
    let mut ledger = Vec::with_capacity(horizon as usize);

    for period in 1..=horizon {
        let (interest, principal_paid, contribution) = if period <= term {
            let interest = outstanding * rate;
            // The final payment clears whatever remains.
            let principal = if period == term {
                outstanding
            } else {
                (payment - interest).min(outstanding)
            };
            outstanding -= principal;
            total_repaid += interest + principal;
            (interest, principal, input.biweekly_contribution_with_loan)
        } else {
            (
                Decimal::ZERO,
                Decimal::ZERO,
                input.biweekly_contribution_no_loan,
            )
        };

        balance_no_loan = (balance_no_loan + input.biweekly_contribution_no_loan) * growth_factor;
        balance_with_loan = (balance_with_loan + contribution + principal_paid) * growth_factor;

        ledger.push(LoanLedgerRow {
            period,
            interest,
            principal_paid,
            outstanding_balance: outstanding,
            balance_without_loan: balance_no_loan,
            balance_with_loan,
        });
    }

    Ok(LoanSimulation {
        payment,
        processing_fee: bounds.processing_fee,
        total_repaid,
        final_balance_without_loan: balance_no_loan,
        final_balance_with_loan: balance_with_loan,
        opportunity_cost: balance_no_loan - balance_with_loan,
        ledger,
    })
}
