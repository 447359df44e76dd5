//! TSP front-load contribution schedule optimization.
//!
//! Agency matching is earned per pay period, so contributing the whole
//! annual target in the first few periods forfeits the match for the rest
//! of the year. The optimal front-load keeps every period's contribution at
//! or above the match floor, pushes the surplus into the earliest periods
//! up to the biweekly cap, and is compared against a level schedule over
//! the same year.

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, MathematicalOps, RoundingStrategy};
use serde::{Deserialize, Serialize};

use crate::config::BenefitsPolicy;
use crate::error::{EngineError, EngineResult};

/// Inputs for a front-load optimization.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FrontloadInput {
    /// Annual salary the agency match is computed from.
    pub annual_salary: Decimal,
    /// Total employee investment target for the year.
    pub target_investment: Decimal,
    /// Maximum employee contribution allowed per pay period.
    pub max_biweekly: Decimal,
    /// Agency match as a percentage of salary (5 means 5%).
    pub match_pct: Decimal,
    /// Assumed annual growth rate as a percentage.
    pub annual_growth_pct: Decimal,
    /// Whether the agency match is included in the growing balance.
    pub include_match_in_growth: bool,
}

/// One pay period of a contribution schedule.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScheduleRow {
    /// Pay period number, starting at 1.
    pub period: u32,
    /// Employee contribution this period.
    pub employee_contribution: Decimal,
    /// Agency match this period.
    pub employer_match: Decimal,
    /// Balance at the end of this period.
    pub balance: Decimal,
}

/// The result of a front-load optimization.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FrontloadComparison {
    /// The per-period agency match, earned in every period by both schedules.
    pub match_per_period: Decimal,
    /// The front-loaded schedule.
    pub front_schedule: Vec<ScheduleRow>,
    /// The level (even) schedule.
    pub even_schedule: Vec<ScheduleRow>,
    /// Ending balance under the front-loaded schedule.
    pub front_ending_balance: Decimal,
    /// Ending balance under the even schedule.
    pub even_ending_balance: Decimal,
    /// Front-loaded ending balance less the even ending balance.
    pub front_load_advantage: Decimal,
}

/// Builds and compares front-loaded and even contribution schedules.
///
/// Both schedules deliver exactly `target_investment` over the year and earn
/// the full agency match every period. The front-loaded schedule contributes
/// the per-period maximum until the surplus over the match floor is
/// exhausted, then drops to the floor.
///
/// # Errors
///
/// Returns [`EngineError::InvalidTarget`] when the target is below the
/// annual match floor or above what the biweekly cap allows.
pub fn optimize_tsp_frontload(
    input: &FrontloadInput,
    policy: &BenefitsPolicy,
) -> EngineResult<FrontloadComparison> {
    let periods = policy.tsp.pay_periods_per_year;
    let periods_dec = Decimal::from(periods);
    let hundred = Decimal::from(100);

    let match_per_period = input.annual_salary * input.match_pct / hundred / periods_dec;
    let match_floor_annual = match_per_period * periods_dec;

    if input.target_investment < match_floor_annual {
        return Err(EngineError::InvalidTarget {
            message: format!(
                "target {} is below the annual match floor of {}",
                input.target_investment, match_floor_annual
            ),
        });
    }

    let surplus = input.target_investment - match_floor_annual;
    let headroom = (input.max_biweekly - match_per_period).max(Decimal::ZERO);
    if surplus > headroom * periods_dec {
        return Err(EngineError::InvalidTarget {
            message: format!(
                "target {} exceeds the annual capacity at {} per period",
                input.target_investment, input.max_biweekly
            ),
        });
    }

    // Surplus fills the earliest periods to the cap; at most one partial
    // period bridges down to the match floor.
    let (full_periods, remainder) = if headroom > Decimal::ZERO && surplus > Decimal::ZERO {
        let full = (surplus / headroom)
            .floor()
            .to_u32()
            .unwrap_or(periods);
        (full.min(periods), surplus - Decimal::from(full.min(periods)) * headroom)
    } else {
        (0, Decimal::ZERO)
    };

    let front_contributions: Vec<Decimal> = (1..=periods)
        .map(|period| {
            if period <= full_periods {
                match_per_period + headroom
            } else if period == full_periods + 1 && remainder > Decimal::ZERO {
                match_per_period + remainder
            } else {
                match_per_period
            }
        })
        .collect();

    // Level schedule: a rounded-down per-period amount with the residue in
    // the final period, so the total still lands exactly on target.
    let even_amount = (input.target_investment / periods_dec)
        .round_dp_with_strategy(2, RoundingStrategy::ToZero);
    let even_contributions: Vec<Decimal> = (1..=periods)
        .map(|period| {
            if period < periods {
                even_amount
            } else {
                input.target_investment - even_amount * Decimal::from(periods - 1)
            }
        })
        .collect();

    let growth_factor = (Decimal::ONE + input.annual_growth_pct / hundred)
        .powd(Decimal::ONE / periods_dec);
    let matched = if input.include_match_in_growth {
        match_per_period
    } else {
        Decimal::ZERO
    };

    let build = |contributions: &[Decimal]| -> Vec<ScheduleRow> {
        let mut balance = Decimal::ZERO;
        contributions
            .iter()
            .enumerate()
            .map(|(index, contribution)| {
                balance = (balance + contribution + matched) * growth_factor;
                ScheduleRow {
                    period: index as u32 + 1,
                    employee_contribution: *contribution,
                    employer_match: match_per_period,
                    balance,
                }
            })
            .collect()
    };

    let front_schedule = build(&front_contributions);
    let even_schedule = build(&even_contributions);
    let front_ending_balance = front_schedule
        .last()
        .map(|row| row.balance)
        .unwrap_or_default();
    let even_ending_balance = even_schedule
        .last()
        .map(|row| row.balance)
        .unwrap_or_default();

    Ok(FrontloadComparison {
        match_per_period,
        front_schedule,
        even_schedule,
        front_ending_balance,
        even_ending_balance,
        front_load_advantage: front_ending_balance - even_ending_balance,
    })
}
