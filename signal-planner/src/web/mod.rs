//! Web layer for the signal planner.
//!
//! Provides HTTP endpoints for optimizing phase schedules.

mod dto;
mod routes;
mod state;

pub use dto::*;
pub use routes::{AppError, create_router};
pub use state::AppState;
