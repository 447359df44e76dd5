//! HTTP API module for the Benefits Calculation Engine.
//!
//! This module provides the REST API endpoints for the benefits
//! calculators, one POST endpoint per calculation.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::{
    DrpRequest, FrontloadRequest, GrowthRequest, LeaveAccrualRequest, LoanRequest, LumpSumRequest,
    ScdRequest, ServicePeriodRequest, SeveranceRequest,
};
pub use response::{ApiError, CalculationEnvelope};
pub use state::AppState;
