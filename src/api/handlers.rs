//! HTTP request handlers for the Benefits Calculation Engine API.
//!
//! This module contains the handler functions for all API endpoints, one
//! per calculator, plus the router wiring them together.

use axum::{
    Json, Router,
    extract::{State, rejection::JsonRejection},
    http::{StatusCode, header},
    response::{IntoResponse, Response},
    routing::post,
};
use chrono::Datelike;
use serde::Serialize;
use tracing::{info, warn};
use uuid::Uuid;

use crate::calculation::{
    LumpSumResult, calculate_leave_accrual, calculate_lump_sum, calculate_scd,
    calculate_severance, compare_drp, optimize_tsp_frontload, project_tsp_growth,
    simulate_tsp_loan,
};
use crate::error::{EngineError, EngineResult};
use crate::models::{EmployeeProfile, ServicePeriod};

use super::request::{
    DrpRequest, FrontloadRequest, GrowthRequest, LeaveAccrualRequest, LoanRequest, LumpSumRequest,
    ScdRequest, SeveranceRequest,
};
use super::response::{ApiError, ApiErrorResponse, CalculationEnvelope};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/leave/accrual", post(leave_accrual_handler))
        .route("/leave/lump-sum", post(lump_sum_handler))
        .route("/severance", post(severance_handler))
        .route("/scd", post(scd_handler))
        .route("/tsp/growth", post(tsp_growth_handler))
        .route("/tsp/loan", post(tsp_loan_handler))
        .route("/tsp/frontload", post(tsp_frontload_handler))
        .route("/drp/comparison", post(drp_comparison_handler))
        .with_state(state)
}

/// Unwraps a JSON payload, turning extractor rejections into 400 responses.
fn parse_request<T>(
    payload: Result<Json<T>, JsonRejection>,
    correlation_id: Uuid,
) -> Result<T, Response> {
    match payload {
        Ok(Json(request)) => Ok(request),
        Err(rejection) => {
            let error = match rejection {
                JsonRejection::JsonDataError(err) => {
                    // The body text carries the detailed error from serde
                    let body_text = err.body_text();
                    warn!(
                        correlation_id = %correlation_id,
                        error = %body_text,
                        "JSON data error"
                    );
                    if body_text.contains("missing field") {
                        ApiError::validation_error(body_text)
                    } else {
                        ApiError::malformed_json(body_text)
                    }
                }
                JsonRejection::JsonSyntaxError(err) => {
                    warn!(
                        correlation_id = %correlation_id,
                        error = %err,
                        "JSON syntax error"
                    );
                    ApiError::malformed_json(format!("Invalid JSON syntax: {}", err))
                }
                JsonRejection::MissingJsonContentType(_) => {
                    ApiError::new("MISSING_CONTENT_TYPE", "Content-Type must be application/json")
                }
                _ => ApiError::malformed_json("Failed to parse request body"),
            };
            Err((
                StatusCode::BAD_REQUEST,
                [(header::CONTENT_TYPE, "application/json")],
                Json(error),
            )
                .into_response())
        }
    }
}

/// Wraps a calculation outcome in the response envelope or an error body.
fn respond<T: Serialize>(correlation_id: Uuid, outcome: EngineResult<T>) -> Response {
    match outcome {
        Ok(result) => (
            StatusCode::OK,
            [(header::CONTENT_TYPE, "application/json")],
            Json(CalculationEnvelope::new(correlation_id, result)),
        )
            .into_response(),
        Err(err) => {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "Calculation failed"
            );
            let api_error: ApiErrorResponse = err.into();
            (
                api_error.status,
                [(header::CONTENT_TYPE, "application/json")],
                Json(api_error.error),
            )
                .into_response()
        }
    }
}

/// Handler for the POST /leave/accrual endpoint.
async fn leave_accrual_handler(
    State(state): State<AppState>,
    payload: Result<Json<LeaveAccrualRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing leave accrual request");

    let request = match parse_request(payload, correlation_id) {
        Ok(request) => request,
        Err(response) => return response,
    };

    let profile: EmployeeProfile = (&request).into();
    respond(
        correlation_id,
        calculate_leave_accrual(&profile, request.pay_periods, state.policy()),
    )
}

/// Handler for the POST /leave/lump-sum endpoint.
async fn lump_sum_handler(
    State(_state): State<AppState>,
    payload: Result<Json<LumpSumRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing lump-sum request");

    let request = match parse_request(payload, correlation_id) {
        Ok(request) => request,
        Err(response) => return response,
    };

    let payment = calculate_lump_sum(request.hourly_rate, request.leave_hours);
    respond(correlation_id, Ok(LumpSumResult { payment }))
}

/// Handler for the POST /severance endpoint.
async fn severance_handler(
    State(state): State<AppState>,
    payload: Result<Json<SeveranceRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing severance request");

    let request = match parse_request(payload, correlation_id) {
        Ok(request) => request,
        Err(response) => return response,
    };

    respond(
        correlation_id,
        calculate_severance(&request.into(), state.policy()),
    )
}

/// Handler for the POST /scd endpoint.
async fn scd_handler(
    State(_state): State<AppState>,
    payload: Result<Json<ScdRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing SCD request");

    let request = match parse_request(payload, correlation_id) {
        Ok(request) => request,
        Err(response) => return response,
    };

    let prior_periods: Vec<ServicePeriod> =
        request.prior_periods.into_iter().map(Into::into).collect();
    let result = calculate_scd(
        request.current_start_date,
        &prior_periods,
        request.as_of_date,
    );
    respond(correlation_id, Ok(result))
}

/// Handler for the POST /tsp/growth endpoint.
async fn tsp_growth_handler(
    State(_state): State<AppState>,
    payload: Result<Json<GrowthRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing TSP growth request");

    let request = match parse_request(payload, correlation_id) {
        Ok(request) => request,
        Err(response) => return response,
    };

    respond(correlation_id, project_tsp_growth(&request.into()))
}

/// Handler for the POST /tsp/loan endpoint.
async fn tsp_loan_handler(
    State(state): State<AppState>,
    payload: Result<Json<LoanRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing TSP loan request");

    let request = match parse_request(payload, correlation_id) {
        Ok(request) => request,
        Err(response) => return response,
    };

    let (terms, account) = request.into_parts();
    respond(
        correlation_id,
        simulate_tsp_loan(&terms, &account, state.policy()),
    )
}

/// Handler for the POST /tsp/frontload endpoint.
async fn tsp_frontload_handler(
    State(state): State<AppState>,
    payload: Result<Json<FrontloadRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing TSP front-load request");

    let request = match parse_request(payload, correlation_id) {
        Ok(request) => request,
        Err(response) => return response,
    };

    respond(
        correlation_id,
        optimize_tsp_frontload(&request.into(), state.policy()),
    )
}

/// Handler for the POST /drp/comparison endpoint.
async fn drp_comparison_handler(
    State(state): State<AppState>,
    payload: Result<Json<DrpRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing DRP comparison request");

    let request = match parse_request(payload, correlation_id) {
        Ok(request) => request,
        Err(response) => return response,
    };

    // Default the horizon to the policy fiscal-year end in the DRP start year.
    let fiscal_year_end = request.fiscal_year_end.or_else(|| {
        state
            .policy()
            .fiscal_year_end
            .in_year(request.drp_start_date.year())
    });
    let fiscal_year_end = match fiscal_year_end {
        Some(date) => date,
        None => {
            return respond::<()>(
                correlation_id,
                Err(EngineError::CalculationError {
                    message: "fiscal-year-end policy does not name a valid date".to_string(),
                }),
            );
        }
    };

    respond(correlation_id, Ok(compare_drp(&(&request).into(), fiscal_year_end)))
}
