//! Employee profile model and related types.
//!
//! This module defines the [`EmployeeProfile`] struct and [`EmployeeCategory`]
//! enum used by the leave-accrual calculator.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// The employee category used to select a leave accrual rule.
///
/// The set of categories is exhaustive: every profile carries exactly one
/// of these, so rate selection can never fall through to an undefined rate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EmployeeCategory {
    /// Full-time employment on a standard 80-hour biweekly tour.
    FullTime,
    /// Part-time employment; accrual scales with hours in a pay status.
    PartTime,
    /// An uncommon tour of duty; accrual scales with the tour's average
    /// biweekly hours relative to the standard 80.
    UncommonTour,
    /// SES, Senior Level, and Scientific/Professional positions.
    Ses,
}

/// An employee profile supplying the inputs for leave accrual.
///
/// The optional fields are category-specific: `hours_in_pay_status` must be
/// present for [`EmployeeCategory::PartTime`] profiles and
/// `avg_hours_per_period` for [`EmployeeCategory::UncommonTour`] profiles.
/// Calculators fail with a `MissingField` error when a required field is
/// absent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmployeeProfile {
    /// The employee category.
    pub category: EmployeeCategory,
    /// Completed years of federal service (may be fractional).
    pub years_of_service: Decimal,
    /// Hours in a pay status per pay period (part-time only).
    #[serde(default)]
    pub hours_in_pay_status: Option<Decimal>,
    /// Average hours per biweekly pay period (uncommon tours only).
    #[serde(default)]
    pub avg_hours_per_period: Option<Decimal>,
}

impl EmployeeProfile {
    /// Creates a profile with no category-specific hours fields.
    ///
    /// # Examples
    ///
    /// ```
    /// use benefits_engine::models::{EmployeeCategory, EmployeeProfile};
    /// use rust_decimal::Decimal;
    ///
    /// let profile = EmployeeProfile::new(EmployeeCategory::FullTime, Decimal::from(5));
    /// assert!(profile.hours_in_pay_status.is_none());
    /// ```
    pub fn new(category: EmployeeCategory, years_of_service: Decimal) -> Self {
        Self {
            category,
            years_of_service,
            hours_in_pay_status: None,
            avg_hours_per_period: None,
        }
    }
}
