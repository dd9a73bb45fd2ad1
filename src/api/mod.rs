//! HTTP API module for the tip pool engine.
//!
//! This module exposes the calculation pipeline over REST: `POST /calculate`
//! settles one shift, `GET /health` reports liveness.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::{ENGINE_VERSION, create_router};
pub use request::CalculationRequest;
pub use response::{ApiError, ApiErrorResponse, HealthResponse};
pub use state::AppState;
