//! Deferred Resignation Program versus severance comparison.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Which path pays more.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DrpOutcome {
    /// Deferred resignation pays more.
    Drp,
    /// Severance after a reduction in force pays more.
    Severance,
    /// The two paths pay the same.
    Equal,
}

/// Inputs for a DRP comparison.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DrpComparisonInput {
    /// Biweekly salary on administrative leave.
    pub biweekly_salary: Decimal,
    /// Date the deferred resignation would begin.
    pub drp_start_date: NaiveDate,
    /// Estimated severance payment under a reduction in force.
    pub severance_estimate: Decimal,
    /// Pay periods the employee would keep working before a RIF separation.
    pub rif_pay_periods: u32,
}

/// The result of a DRP comparison.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DrpComparison {
    /// Whole pay periods of paid administrative leave remaining under DRP.
    pub remaining_pay_periods: i64,
    /// Total pay under the DRP path.
    pub total_drp_pay: Decimal,
    /// Pay earned before separation under the RIF path.
    pub total_rif_pay: Decimal,
    /// RIF pay plus the severance estimate.
    pub adjusted_severance: Decimal,
    /// Which path pays more.
    pub outcome: DrpOutcome,
}

/// Compares total pay under deferred resignation against a RIF with
/// severance.
///
/// DRP pays the biweekly salary through the fiscal-year end; the RIF path
/// pays the salary for the periods worked plus the severance estimate. A
/// start date past the fiscal-year end leaves zero DRP periods.
pub fn compare_drp(input: &DrpComparisonInput, fiscal_year_end: NaiveDate) -> DrpComparison {
    let remaining_pay_periods =
        ((fiscal_year_end - input.drp_start_date).num_days() / 14).max(0);

    let total_drp_pay = input.biweekly_salary * Decimal::from(remaining_pay_periods);
    let total_rif_pay = input.biweekly_salary * Decimal::from(input.rif_pay_periods);
    let adjusted_severance = total_rif_pay + input.severance_estimate;

    let outcome = if total_drp_pay > adjusted_severance {
        DrpOutcome::Drp
    } else if total_drp_pay < adjusted_severance {
        DrpOutcome::Severance
    } else {
        DrpOutcome::Equal
    };

    DrpComparison {
        remaining_pay_periods,
        total_drp_pay,
        total_rif_pay,
        adjusted_severance,
        outcome,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn fiscal_year_end() -> NaiveDate {
        date(2025, 9, 30)
    }

    // ==========================================================================
    // DRP-001: remaining periods count whole 14-day blocks to fiscal-year end
    // ==========================================================================
    #[test]
    fn test_remaining_periods_whole_blocks() {
        let input = DrpComparisonInput {
            biweekly_salary: dec("4000"),
            // 2025-02-01 to 2025-09-30 is 241 days: 17 whole periods.
            drp_start_date: date(2025, 2, 1),
            severance_estimate: dec("30000"),
            rif_pay_periods: 6,
        };
        let result = compare_drp(&input, fiscal_year_end());

        assert_eq!(result.remaining_pay_periods, 17);
        assert_eq!(result.total_drp_pay, dec("68000"));
        assert_eq!(result.total_rif_pay, dec("24000"));
        assert_eq!(result.adjusted_severance, dec("54000"));
        assert_eq!(result.outcome, DrpOutcome::Drp);
    }

    // ==========================================================================
    // DRP-002: large severance flips the outcome
    // ==========================================================================
    #[test]
    fn test_severance_wins_when_estimate_is_large() {
        let input = DrpComparisonInput {
            biweekly_salary: dec("4000"),
            drp_start_date: date(2025, 8, 1),
            severance_estimate: dec("60000"),
            rif_pay_periods: 2,
        };
        let result = compare_drp(&input, fiscal_year_end());

        assert!(result.total_drp_pay < result.adjusted_severance);
        assert_eq!(result.outcome, DrpOutcome::Severance);
    }

    // ==========================================================================
    // DRP-003: a start past the fiscal-year end leaves zero DRP periods
    // ==========================================================================
    #[test]
    fn test_start_after_fiscal_year_end() {
        let input = DrpComparisonInput {
            biweekly_salary: dec("4000"),
            drp_start_date: date(2025, 10, 15),
            severance_estimate: dec("0"),
            rif_pay_periods: 0,
        };
        let result = compare_drp(&input, fiscal_year_end());

        assert_eq!(result.remaining_pay_periods, 0);
        assert_eq!(result.total_drp_pay, dec("0"));
        assert_eq!(result.outcome, DrpOutcome::Equal);
    }

    // ==========================================================================
    // DRP-004: exact tie reports Equal
    // ==========================================================================
    #[test]
    fn test_exact_tie() {
        let input = DrpComparisonInput {
            biweekly_salary: dec("4000"),
            // 2025-09-02 to 2025-09-30 is 28 days: 2 periods, 8000 DRP pay.
            drp_start_date: date(2025, 9, 2),
            severance_estimate: dec("4000"),
            rif_pay_periods: 1,
        };
        let result = compare_drp(&input, fiscal_year_end());

        assert_eq!(result.remaining_pay_periods, 2);
        assert_eq!(result.total_drp_pay, dec("8000"));
        assert_eq!(result.adjusted_severance, dec("8000"));
        assert_eq!(result.outcome, DrpOutcome::Equal);
    }
}
