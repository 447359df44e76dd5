//! Benefits Calculation Engine for federal employees
//!
//! This crate provides the calculation core for federal-employee benefit
//! decisions: annual-leave accrual and lump-sum payout, severance pay,
//! service computation date (SCD) adjustment, and Thrift Savings Plan (TSP)
//! growth, loan, and front-loading projections.

#![warn(missing_docs)]

pub mod api;
pub mod calculation;
pub mod config;
pub mod error;
pub mod models;
