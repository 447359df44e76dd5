//! TSP compound-growth projection.
//!
//! Projects a Thrift Savings Plan balance forward year by year with annual
//! compounding: each year the contribution is added, then the combined
//! balance grows at the annual rate. An optional inflation rate discounts
//! the nominal ending value to today's dollars.

use rust_decimal::{Decimal, MathematicalOps};
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};
use crate::models::ContributionSpec;

/// Inputs for a TSP growth projection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GrowthInput {
    /// Starting account balance.
    pub current_balance: Decimal,
    /// Annual contribution, flat or derived from salary percentages.
    pub contributions: ContributionSpec,
    /// Projection horizon in whole years; must be at least 1.
    pub years: u32,
    /// Annual growth rate as a percentage (7 means 7%).
    pub annual_growth_pct: Decimal,
    /// Optional annual inflation rate as a percentage, for the real value.
    pub inflation_pct: Option<Decimal>,
}

/// One year of the projection series.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GrowthYearRow {
    /// Year number, starting at 1.
    pub year: u32,
    /// Balance at the start of the year.
    pub starting_balance: Decimal,
    /// Contribution added during the year.
    pub contribution: Decimal,
    /// Growth earned during the year.
    pub growth: Decimal,
    /// Balance at the end of the year.
    pub ending_balance: Decimal,
}

/// The result of a TSP growth projection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GrowthProjection {
    /// Nominal ending value after the full horizon.
    pub nominal_value: Decimal,
    /// Inflation-adjusted ending value, when an inflation rate was given.
    pub real_value: Option<Decimal>,
    /// Sum of all contributions over the horizon.
    pub total_contributions: Decimal,
    /// Total growth earned (nominal value less the initial balance and
    /// contributions).
    pub total_growth: Decimal,
    /// Year-by-year projection series.
    pub series: Vec<GrowthYearRow>,
}

/// Projects a TSP balance forward with annual compounding.
///
/// # Errors
///
/// Returns [`EngineError::CalculationError`] when `years` is zero, or when
/// a rate is −100% or below (a −100% inflation rate would make the
/// deflator zero).
///
/// # Examples
///
/// ```
/// use benefits_engine::calculation::project_tsp_growth;
/// use benefits_engine::calculation::GrowthInput;
/// use benefits_engine::models::ContributionSpec;
/// use rust_decimal::Decimal;
///
/// let input = GrowthInput {
///     current_balance: Decimal::from(100_000),
///     contributions: ContributionSpec::Flat {
///         annual_amount: Decimal::from(10_000),
///     },
///     years: 1,
///     annual_growth_pct: Decimal::from(7),
///     inflation_pct: None,
/// };
/// let projection = project_tsp_growth(&input).unwrap();
/// assert_eq!(projection.nominal_value, Decimal::from(117_700));
/// ```
pub fn project_tsp_growth(input: &GrowthInput) -> EngineResult<GrowthProjection> {
    if input.years == 0 {
        return Err(EngineError::CalculationError {
            message: "projection horizon must be at least one year".to_string(),
        });
    }

    let hundred = Decimal::from(100);
    let minus_hundred = -hundred;
    if input.annual_growth_pct <= minus_hundred {
        return Err(EngineError::CalculationError {
            message: "annual growth rate must be greater than -100%".to_string(),
        });
    }
    if let Some(inflation) = input.inflation_pct {
        if inflation <= minus_hundred {
            return Err(EngineError::CalculationError {
                message: "inflation rate must be greater than -100%".to_string(),
            });
        }
    }

    let growth_factor = Decimal::ONE + input.annual_growth_pct / hundred;
    let annual_contribution = input.contributions.annual_amount();

    let mut balance = input.current_balance;
    let mut total_contributions = Decimal::ZERO;
    let mut series = Vec::with_capacity(input.years as usize);

    for year in 1..=input.years {
        let starting_balance = balance;
        let ending_balance = (balance + annual_contribution) * growth_factor;
        let growth = ending_balance - starting_balance - annual_contribution;

        series.push(GrowthYearRow {
            year,
            starting_balance,
            contribution: annual_contribution,
            growth,
            ending_balance,
        });

        total_contributions += annual_contribution;
        balance = ending_balance;
    }

    let real_value = input.inflation_pct.map(|inflation| {
        let deflator = (Decimal::ONE + inflation / hundred).powi(i64::from(input.years));
        balance / deflator
    });

    Ok(GrowthProjection {
        nominal_value: balance,
        real_value,
        total_contributions,
        total_growth: balance - input.current_balance - total_contributions,
        series,
    })
}
