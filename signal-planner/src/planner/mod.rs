//! Signal-phase optimizer using forward dynamic programming.
//!
//! This module implements the core planning algorithm that answers:
//! "Given forecast arrivals on both streams, which phase sequence keeps
//! total waiting lowest over the horizon, and what does it cost?"
//!
//! The search expands a frontier of reachable (queue, queue, phase) states
//! one time step at a time, keeping only the cheapest cost per state.

mod config;
mod frontier;
mod optimize;
mod plan;
mod transition;


pub use config::{ConfigError, SignalConfig};
pub use frontier::{Frontier, FrontierEntry};
pub use optimize::{OptimizeError, Optimizer, Outcome, SearchStats, optimize};
pub use plan::{Plan, PlanStep};
pub use transition::{transition, waiting_cost};
