//! Core data models for the Benefits Calculation Engine.
//!
//! This module contains all the domain models used throughout the engine.

mod contribution;
mod employee;
mod loan;
mod service;

pub use contribution::ContributionSpec;
pub use employee::{EmployeeCategory, EmployeeProfile};
pub use loan::{LoanTerms, LoanType};
pub use service::ServicePeriod;
