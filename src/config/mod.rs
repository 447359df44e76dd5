//! Policy configuration for the Benefits Calculation Engine.
//!
//! This module provides the strongly-typed policy tables (accrual rates,
//! severance factors, TSP loan bounds) that every calculator receives
//! explicitly, and a loader for reading them from YAML files.
//!
//! # Example
//!
//! ```no_run
//! use benefits_engine::config::ConfigLoader;
//!
//! let config = ConfigLoader::load("./config/opm").unwrap();
//! println!("Loaded policy: {}", config.metadata().name);
//! ```

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{
    BenefitsPolicy, FiscalYearEnd, LeavePolicy, LoanPolicy, LoanTypePolicy, PolicyMetadata,
    SeverancePolicy, TenureRates, TspPolicy,
};
