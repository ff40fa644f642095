//! Core domain types for the signal planner.
//!
//! These types describe an intersection at one instant (queue lengths and
//! the active signal phase) and the exogenous arrivals it must absorb.

mod error;
mod phase;
mod schedule;
mod state;

pub use error::{DomainError, Stream};
pub use phase::Phase;
pub use schedule::ArrivalSchedule;
pub use state::State;
