//! Traffic signal phase planner.
//!
//! Computes the minimum cumulative vehicle-waiting cost for a two-phase
//! intersection over a fixed planning horizon, given per-step arrival
//! forecasts for the north-south and east-west streams.

pub mod cache;
pub mod domain;
pub mod planner;
pub mod web;
