//! Service period model for SCD calculations.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A span of creditable prior federal service, inclusive of both endpoints.
///
/// # Example
///
/// ```
/// use benefits_engine::models::ServicePeriod;
/// use chrono::NaiveDate;
///
/// let period = ServicePeriod {
///     start_date: NaiveDate::from_ymd_opt(2019, 1, 1).unwrap(),
///     end_date: NaiveDate::from_ymd_opt(2019, 12, 31).unwrap(),
/// };
/// assert_eq!(period.creditable_days(), 365);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServicePeriod {
    /// The first day of the service period (inclusive).
    pub start_date: NaiveDate,
    /// The last day of the service period (inclusive).
    pub end_date: NaiveDate,
}

impl ServicePeriod {
    /// Returns the number of creditable days in this period.
    ///
    /// Both endpoints count, so a one-day period credits 1 day. An inverted
    /// range (end before start) credits 0 days rather than failing.
    pub fn creditable_days(&self) -> i64 {
        ((self.end_date - self.start_date).num_days() + 1).max(0)
    }
}
