//! Contribution specification for TSP growth projections.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// How annual TSP contributions are specified for a growth projection.
///
/// Either a flat dollar amount per year, or a salary with employee and
/// employer percentages. Each variant names exactly the fields it needs.
///
/// # Example
///
/// ```
/// use benefits_engine::models::ContributionSpec;
/// use rust_decimal::Decimal;
///
/// let spec = ContributionSpec::Percentages {
///     salary: Decimal::from(100_000),
///     employee_pct: Decimal::from(5),
///     employer_pct: Decimal::from(5),
/// };
/// assert_eq!(spec.annual_amount(), Decimal::from(10_000));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ContributionSpec {
    /// A flat dollar amount contributed each year.
    Flat {
        /// The annual contribution in dollars.
        annual_amount: Decimal,
    },
    /// Contributions derived from salary percentages.
    Percentages {
        /// The annual salary in dollars.
        salary: Decimal,
        /// The employee contribution as a percentage of salary.
        employee_pct: Decimal,
        /// The employer (agency) contribution as a percentage of salary.
        employer_pct: Decimal,
    },
}

impl ContributionSpec {
    /// Returns the total annual contribution in dollars.
    pub fn annual_amount(&self) -> Decimal {
        match self {
            Self::Flat { annual_amount } => *annual_amount,
            Self::Percentages {
                salary,
                employee_pct,
                employer_pct,
            } => salary * (employee_pct + employer_pct) / Decimal::from(100),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn test_flat_annual_amount() {
        let spec = ContributionSpec::Flat {
            annual_amount: dec("6500"),
        };
        assert_eq!(spec.annual_amount(), dec("6500"));
    }

    #[test]
    fn test_percentage_annual_amount() {
        let spec = ContributionSpec::Percentages {
            salary: dec("80000"),
            employee_pct: dec("5"),
            employer_pct: dec("4"),
        };
        assert_eq!(spec.annual_amount(), dec("7200"));
    }

    #[test]
    fn test_tagged_deserialization() {
        let json = r#"{"type": "flat", "annual_amount": "5000"}"#;
        let spec: ContributionSpec = serde_json::from_str(json).unwrap();
        assert_eq!(spec.annual_amount(), dec("5000"));

        let json = r#"{
            "type": "percentages",
            "salary": "100000",
            "employee_pct": "5",
            "employer_pct": "5"
        }"#;
        let spec: ContributionSpec = serde_json::from_str(json).unwrap();
        assert_eq!(spec.annual_amount(), dec("10000"));
    }
}
