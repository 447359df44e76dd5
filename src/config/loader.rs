//! Policy configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading benefits
//! policy tables from YAML files.

use std::fs;
use std::path::Path;

use crate::error::{EngineError, EngineResult};

use super::types::{
    BenefitsPolicy, FiscalYearEnd, LeavePolicy, PolicyMetadata, SeverancePolicy, TspPolicy,
};

/// Loads and provides access to the benefits policy.
///
/// The `ConfigLoader` reads YAML configuration files from a directory and
/// exposes the assembled [`BenefitsPolicy`].
///
/// # Directory Structure
///
/// ```text
/// config/opm/
/// ├── metadata.yaml   # Policy identification
/// ├── leave.yaml      # Annual-leave accrual bands
/// ├── severance.yaml  # Severance factors and caps
/// ├── tsp.yaml        # TSP pay-period and loan policy
/// └── calendar.yaml   # Fiscal-year end
/// ```
///
/// # Example
///
/// ```no_run
/// use benefits_engine::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config/opm").unwrap();
/// println!("Policy: {} ({})", loader.metadata().name, loader.metadata().version);
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    policy: BenefitsPolicy,
}

impl ConfigLoader {
    /// Loads the policy from the specified directory.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the configuration directory (e.g., "./config/opm")
    ///
    /// # Returns
    ///
    /// Returns a `ConfigLoader` instance on success, or an error if any
    /// required file is missing (`ConfigNotFound`) or contains invalid YAML
    /// (`ConfigParseError`).
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();

        let metadata = Self::load_yaml::<PolicyMetadata>(&path.join("metadata.yaml"))?;
        let leave = Self::load_yaml::<LeavePolicy>(&path.join("leave.yaml"))?;
        let severance = Self::load_yaml::<SeverancePolicy>(&path.join("severance.yaml"))?;
        let tsp = Self::load_yaml::<TspPolicy>(&path.join("tsp.yaml"))?;
        let fiscal_year_end = Self::load_yaml::<FiscalYearEnd>(&path.join("calendar.yaml"))?;

        Ok(Self {
            policy: BenefitsPolicy {
                metadata,
                leave,
                severance,
                tsp,
                fiscal_year_end,
            },
        })
    }

    /// Loads and parses a YAML file.
    fn load_yaml<T: serde::de::DeserializeOwned>(path: &Path) -> EngineResult<T> {
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        serde_yaml::from_str(&content).map_err(|e| EngineError::ConfigParseError {
            path: path_str,
            message: e.to_string(),
        })
    }

    /// Returns the assembled benefits policy.
    pub fn policy(&self) -> &BenefitsPolicy {
        &self.policy
    }

    /// Returns the policy metadata.
    pub fn metadata(&self) -> &PolicyMetadata {
        &self.policy.metadata
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;
    use std::str::FromStr;

    fn config_path() -> &'static str {
        "./config/opm"
    }

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn test_load_valid_configuration() {
        let result = ConfigLoader::load(config_path());
        assert!(result.is_ok(), "Failed to load config: {:?}", result.err());

        let loader = result.unwrap();
        assert_eq!(loader.metadata().code, "opm-2025");
    }

    #[test]
    fn test_loaded_policy_matches_default() {
        let loader = ConfigLoader::load(config_path()).unwrap();
        let loaded = loader.policy();
        let default = BenefitsPolicy::default();

        assert_eq!(
            loaded.severance.weekly_pay_divisor,
            default.severance.weekly_pay_divisor
        );
        assert_eq!(loaded.severance.cap_weeks, default.severance.cap_weeks);
        assert_eq!(
            loaded.tsp.pay_periods_per_year,
            default.tsp.pay_periods_per_year
        );
        assert_eq!(loaded.tsp.loan.max_amount, default.tsp.loan.max_amount);
        assert_eq!(
            loaded.leave.full_time_hours.senior,
            default.leave.full_time_hours.senior
        );
        assert_eq!(loaded.fiscal_year_end.month, default.fiscal_year_end.month);
        assert_eq!(loaded.fiscal_year_end.day, default.fiscal_year_end.day);
    }

    #[test]
    fn test_loaded_accrual_bands() {
        let loader = ConfigLoader::load(config_path()).unwrap();
        let leave = &loader.policy().leave;

        assert_eq!(leave.tenure_mid_years, dec("3"));
        assert_eq!(leave.tenure_senior_years, dec("15"));
        assert_eq!(leave.part_time_divisors.under_mid, dec("20"));
        assert_eq!(leave.part_time_divisors.mid_to_senior, dec("13"));
        assert_eq!(leave.part_time_divisors.senior, dec("10"));
        assert_eq!(leave.uncommon_tour_standard_hours, dec("80"));
    }

    #[test]
    fn test_load_missing_directory_returns_error() {
        let result = ConfigLoader::load("/nonexistent/path");
        assert!(result.is_err());

        match result {
            Err(EngineError::ConfigNotFound { path }) => {
                assert!(path.contains("metadata.yaml"));
            }
            _ => panic!("Expected ConfigNotFound error"),
        }
    }
}
