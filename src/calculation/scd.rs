//! Service computation date adjustment.

use chrono::{Duration, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::models::ServicePeriod;

/// One row of the service-credit breakdown.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServiceCreditRow {
    /// First day of the period.
    pub start_date: NaiveDate,
    /// Last day of the period.
    pub end_date: NaiveDate,
    /// Creditable days contributed by the period.
    pub creditable_days: i64,
    /// Whether this row is the current, still-open appointment.
    pub is_current: bool,
}

/// The result of a service computation date calculation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScdResult {
    /// The adjusted service computation date.
    pub adjusted_scd: NaiveDate,
    /// Total creditable days from the prior periods, or from the current
    /// appointment when there are none.
    pub total_creditable_days: i64,
    /// Per-period breakdown, with the current appointment listed last.
    pub breakdown: Vec<ServiceCreditRow>,
}

/// Computes an adjusted service computation date.
///
/// Prior creditable service rolls the SCD back from the current appointment's
/// start date by the total number of prior creditable days. With no prior
/// periods the SCD is the current start date itself. Inverted periods
/// (end before start) contribute zero days rather than failing.
pub fn calculate_scd(
    current_start: NaiveDate,
    prior_periods: &[ServicePeriod],
    as_of: NaiveDate,
) -> ScdResult {
    let current_days = ((as_of - current_start).num_days() + 1).max(0);

    let mut breakdown: Vec<ServiceCreditRow> = prior_periods
        .iter()
        .map(|period| ServiceCreditRow {
            start_date: period.start_date,
            end_date: period.end_date,
            creditable_days: period.creditable_days(),
            is_current: false,
        })
        .collect();

    let prior_total: i64 = breakdown.iter().map(|row| row.creditable_days).sum();

    breakdown.push(ServiceCreditRow {
        start_date: current_start,
        end_date: as_of,
        creditable_days: current_days,
        is_current: true,
    });

    let (adjusted_scd, total_creditable_days) = if prior_periods.is_empty() {
        (current_start, current_days)
    } else {
        (current_start - Duration::days(prior_total), prior_total)
    };

    ScdResult {
        adjusted_scd,
        total_creditable_days,
        breakdown,
    }
}
