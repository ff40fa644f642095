//! HTTP route handlers.

use axum::{
    Json, Router,
    extract::State,
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
};
use tower_http::trace::TraceLayer;
use tracing::warn;

use crate::cache::PlanError;
use crate::domain::{ArrivalSchedule, DomainError};
use crate::planner::{OptimizeError, SignalConfig};

use super::dto::*;
use super::state::AppState;

/// Create the application router.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/config", get(show_config))
        .route("/optimize", post(optimize_schedule))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Health check endpoint.
async fn health() -> &'static str {
    "ok"
}

/// Active signal configuration.
async fn show_config(State(state): State<AppState>) -> Json<SignalConfig> {
    Json(state.optimizer.config().clone())
}

/// Optimize a phase schedule for the given arrival forecast.
///
/// Horizons beyond the configured `max_horizon` are refused here; search
/// cost grows steeply with horizon.
async fn optimize_schedule(
    State(state): State<AppState>,
    Json(req): Json<OptimizeRequest>,
) -> Result<Json<OptimizeResponse>, AppError> {
    let max_horizon = state.optimizer.config().max_horizon;
    let horizon = req.horizon.unwrap_or(req.arrivals_a.len());
    if horizon > max_horizon {
        return Err(AppError::BadRequest {
            message: format!("horizon {horizon} exceeds maximum of {max_horizon} steps"),
        });
    }

    let schedule = ArrivalSchedule::from_signed(&req.arrivals_a, &req.arrivals_b)?;

    let plan = state.optimizer.plan(horizon, &schedule).await?;

    Ok(Json(OptimizeResponse::from(plan.as_ref())))
}

/// Application error type.
#[derive(Debug)]
pub enum AppError {
    BadRequest { message: String },
    Unprocessable { message: String },
    Internal { message: String },
}

impl From<DomainError> for AppError {
    fn from(e: DomainError) -> Self {
        AppError::BadRequest {
            message: e.to_string(),
        }
    }
}

impl From<OptimizeError> for AppError {
    fn from(e: OptimizeError) -> Self {
        if e.is_invalid_argument() {
            AppError::BadRequest {
                message: e.to_string(),
            }
        } else {
            AppError::Unprocessable {
                message: e.to_string(),
            }
        }
    }
}

impl From<PlanError> for AppError {
    fn from(e: PlanError) -> Self {
        match e {
            PlanError::Optimize(e) => AppError::from(e),
            PlanError::Task(_) => AppError::Internal {
                message: e.to_string(),
            },
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        let (status, message) = match self {
            AppError::BadRequest { message } => (StatusCode::BAD_REQUEST, message),
            AppError::Unprocessable { message } => (StatusCode::UNPROCESSABLE_ENTITY, message),
            AppError::Internal { message } => (StatusCode::INTERNAL_SERVER_ERROR, message),
        };

        warn!(%status, %message, "request failed");

        let body = Json(ErrorResponse { error: message });
        (status, body).into_response()
    }
}
