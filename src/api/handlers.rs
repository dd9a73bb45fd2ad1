//! HTTP request handlers for the tip pool API.
//!
//! This module contains the handler functions for all API endpoints.

use axum::{
    Json, Router,
    extract::{State, rejection::JsonRejection},
    http::{StatusCode, header},
    response::IntoResponse,
    routing::{get, post},
};
use chrono::Utc;
use tracing::{info, warn};
use uuid::Uuid;

use crate::calculation::compute;
use crate::models::{CalculationResult, ShiftInput};

use super::request::CalculationRequest;
use super::response::{ApiError, ApiErrorResponse, HealthResponse};
use super::state::AppState;

/// The engine version reported in every result.
pub const ENGINE_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/calculate", post(calculate_handler))
        .route("/health", get(health_handler))
        .with_state(state)
}

/// Handler for GET /health endpoint.
async fn health_handler(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        engine_version: ENGINE_VERSION.to_string(),
        bind_address: state.config().config().bind_address(),
    })
}

/// Handler for POST /calculate endpoint.
///
/// Accepts one shift's input and returns its settled payouts.
async fn calculate_handler(
    payload: Result<Json<CalculationRequest>, JsonRejection>,
) -> impl IntoResponse {
    // Generate correlation ID for request tracking
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing calculation request");

    // Handle JSON parsing errors
    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => {
            let error = match rejection {
                JsonRejection::JsonDataError(err) => {
                    // Get the body text which contains the detailed error from serde
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
            return (
                StatusCode::BAD_REQUEST,
                [(header::CONTENT_TYPE, "application/json")],
                Json(error),
            )
                .into_response();
        }
    };

    let input: ShiftInput = request.into();

    if let Err(err) = input.validate() {
        warn!(
            correlation_id = %correlation_id,
            error = %err,
            "Shift input failed validation"
        );
        let api_error: ApiErrorResponse = err.into();
        return api_error.into_response();
    }

    let outcome = compute(&input);

    info!(
        correlation_id = %correlation_id,
        bartenders = input.bar_team.bartenders.len(),
        servers = input.servers.len(),
        events = input.events.len(),
        support = input.support.len(),
        bar_pool = outcome.output.pools.bar_pool,
        support_pool = outcome.output.pools.support_pool,
        warnings = outcome.audit_trace.warnings.len(),
        duration_us = outcome.audit_trace.duration_us,
        "Calculation completed successfully"
    );

    let result = CalculationResult {
        calculation_id: correlation_id,
        timestamp: Utc::now(),
        engine_version: ENGINE_VERSION.to_string(),
        shift: outcome.output,
        audit_trace: outcome.audit_trace,
    };

    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "application/json")],
        Json(result),
    )
        .into_response()
}
