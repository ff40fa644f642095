//! Intersection state type.

use std::fmt;

use serde::Serialize;

use super::Phase;

/// The intersection at one instant: both queue lengths and the active phase.
///
/// Queue lengths are unsigned, so a discharge can only ever floor at zero.
/// Equality, hashing and ordering cover all three fields, which is what lets
/// a [`Frontier`](crate::planner::Frontier) collapse duplicate states.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct State {
    /// Vehicles waiting on stream A (north-south).
    pub queue_a: u64,

    /// Vehicles waiting on stream B (east-west).
    pub queue_b: u64,

    /// Current signal phase.
    pub phase: Phase,
}

impl State {
    /// Create a state from its parts.
    pub fn new(queue_a: u64, queue_b: u64, phase: Phase) -> Self {
        Self {
            queue_a,
            queue_b,
            phase,
        }
    }

    /// The state every optimization starts from: empty queues, all red.
    pub fn initial() -> Self {
        Self::new(0, 0, Phase::AllRed)
    }
}

impl fmt::Display for State {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[A={} B={} {}]", self.queue_a, self.queue_b, self.phase)
    }
}
