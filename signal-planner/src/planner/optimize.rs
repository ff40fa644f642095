//! Forward dynamic-programming search over intersection states.
//!
//! Starting from a single seed state, each time step expands every state in
//! the current frontier through all three phases, charges the successor's
//! waiting cost, and collapses the results into the next frontier keeping
//! only the cheapest cost per distinct state. After the last step the
//! cheapest terminal state gives the minimum cumulative waiting cost.

use tracing::{debug, info, warn};

use crate::domain::{ArrivalSchedule, DomainError, Phase, State, Stream};

use super::config::SignalConfig;
use super::frontier::Frontier;
use super::plan::Plan;
use super::transition::{transition, waiting_cost};

/// Error from optimization.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum OptimizeError {
    /// Horizon of zero steps
    #[error("horizon must be at least one step")]
    ZeroHorizon,

    /// An arrival stream does not cover the horizon exactly
    #[error("stream {stream} has {actual} arrival steps, expected {expected}")]
    HorizonMismatch {
        stream: Stream,
        expected: usize,
        actual: usize,
    },

    /// A phase sequence does not cover the schedule exactly
    #[error("phase sequence has {actual} steps, schedule has {expected}")]
    PhaseCountMismatch { expected: usize, actual: usize },

    /// Invalid arrival data
    #[error(transparent)]
    Domain(#[from] DomainError),

    /// No state is reachable at the horizon
    #[error("no feasible schedule: no state reachable at step {horizon}")]
    NoFeasibleSchedule { horizon: usize },
}

impl OptimizeError {
    /// Returns true if the caller supplied malformed input.
    pub fn is_invalid_argument(&self) -> bool {
        !matches!(self, OptimizeError::NoFeasibleSchedule { .. })
    }
}

/// Counters describing how much work one run did.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// Frontier states expanded across all steps.
    pub states_expanded: usize,

    /// Successor states generated (three per expanded state).
    pub transitions: usize,

    /// Largest frontier seen at any step.
    pub peak_frontier: usize,
}

/// Result of a completed optimization run.
///
/// Holds every frontier from step 0 through the horizon so that an optimal
/// phase plan can be recovered; the terminal frontier is also exposed for
/// inspection.
#[derive(Debug, Clone)]
pub struct Outcome {
    layers: Vec<Frontier>,
    best: State,
    min_cost: u64,
    stats: SearchStats,
}

impl Outcome {
    /// Minimum cumulative waiting cost over the horizon.
    pub fn min_cost(&self) -> u64 {
        self.min_cost
    }

    /// Cheapest terminal state.
    pub fn best_state(&self) -> State {
        self.best
    }

    /// Number of steps optimized.
    pub fn horizon(&self) -> usize {
        self.layers.len() - 1
    }

    /// Frontier at the horizon.
    pub fn terminal(&self) -> &Frontier {
        &self.layers[self.layers.len() - 1]
    }

    /// Frontier at step `t`, for `t` in `0..=horizon`.
    pub fn layer(&self, t: usize) -> Option<&Frontier> {
        self.layers.get(t)
    }

    /// Work counters for the run.
    pub fn stats(&self) -> SearchStats {
        self.stats
    }

    /// Recover one optimal phase schedule.
    pub fn plan(&self) -> Plan {
        Plan::reconstruct(&self.layers, self.best)
    }

    /// Discard intermediate frontiers, keeping only the terminal one.
    pub fn into_terminal(mut self) -> Frontier {
        self.layers.pop().unwrap_or_default()
    }
}

/// Finite-horizon signal optimizer.
#[derive(Debug, Clone, Default)]
pub struct Optimizer {
    config: SignalConfig,
}

impl Optimizer {
    /// Create a new optimizer.
    pub fn new(config: SignalConfig) -> Self {
        Self { config }
    }

    /// The configuration this optimizer runs with.
    pub fn config(&self) -> &SignalConfig {
        &self.config
    }

    /// Run the search over `horizon` steps of `schedule`.
    ///
    /// The schedule must cover exactly `horizon` steps. Input is validated
    /// before any state is expanded. Every frontier is retained so that an
    /// optimal plan can be recovered; use [`Optimizer::min_cost`] when only
    /// the cost is needed.
    pub fn run(
        &self,
        horizon: usize,
        schedule: &ArrivalSchedule,
    ) -> Result<Outcome, OptimizeError> {
        let (layers, stats) = self.search(horizon, schedule, true)?;
        let (best, min_cost) = terminal_best(&layers, horizon)?;

        Ok(Outcome {
            layers,
            best,
            min_cost,
            stats,
        })
    }

    /// Minimum cumulative waiting cost over `horizon` steps of `schedule`.
    ///
    /// Holds only the current and next frontier at any time.
    pub fn min_cost(
        &self,
        horizon: usize,
        schedule: &ArrivalSchedule,
    ) -> Result<u64, OptimizeError> {
        let (layers, _) = self.search(horizon, schedule, false)?;
        terminal_best(&layers, horizon).map(|(_, cost)| cost)
    }

    /// Expand frontiers step by step.
    ///
    /// With `retain` set, the returned vector holds every frontier from step 0
    /// to the horizon; otherwise it holds only the terminal frontier.
    pub(super) fn search(
        &self,
        horizon: usize,
        schedule: &ArrivalSchedule,
        retain: bool,
    ) -> Result<(Vec<Frontier>, SearchStats), OptimizeError> {
        check_horizon(horizon, schedule.len(), schedule.len())?;

        if horizon > self.config.max_horizon {
            warn!(
                horizon,
                max_horizon = self.config.max_horizon,
                "horizon exceeds declared maximum (not enforced)"
            );
        }

        let mut stats = SearchStats::default();
        let mut layers: Vec<Frontier> = Vec::with_capacity(if retain { horizon + 1 } else { 1 });
        layers.push(Frontier::seeded(State::initial()));
        let mut queue_bound_reported = false;

        let steps = schedule.stream_a().iter().zip(schedule.stream_b());
        for (t, (&arrival_a, &arrival_b)) in steps.enumerate() {
            let current = &layers[layers.len() - 1];
            let next = self.expand(current, arrival_a, arrival_b);

            stats.states_expanded += current.len();
            stats.transitions += current.len() * Phase::ALL.len();
            stats.peak_frontier = stats.peak_frontier.max(next.len());

            if !queue_bound_reported && next.max_queue() > self.config.max_queue {
                queue_bound_reported = true;
                warn!(
                    step = t,
                    max_queue = self.config.max_queue,
                    "queue length exceeds declared maximum (not enforced)"
                );
            }

            debug!(
                step = t,
                arrival_a,
                arrival_b,
                frontier = next.len(),
                "expanded step"
            );

            if retain {
                layers.push(next);
            } else {
                layers[0] = next;
            }
        }

        info!(
            horizon,
            states_expanded = stats.states_expanded,
            peak_frontier = stats.peak_frontier,
            "search complete"
        );

        Ok((layers, stats))
    }

    /// Successor frontier of `current` under one step's arrivals.
    fn expand(&self, current: &Frontier, arrival_a: u32, arrival_b: u32) -> Frontier {
        let discharge = self.config.discharge_per_step;
        let mut next = Frontier::new();

        for (state, entry) in current.iter() {
            for phase in Phase::ALL {
                let successor = transition(state, arrival_a, arrival_b, phase, discharge);
                let step_cost = waiting_cost(successor.queue_a, successor.queue_b);
                next.relax(successor, entry.cost.saturating_add(step_cost), Some(*state));
            }
        }
        next
    }

    /// Total waiting cost of following `phases` through `schedule`.
    ///
    /// Useful for comparing a fixed-time signal plan against the optimum.
    pub fn evaluate(
        &self,
        schedule: &ArrivalSchedule,
        phases: &[Phase],
    ) -> Result<u64, OptimizeError> {
        if phases.len() != schedule.len() {
            return Err(OptimizeError::PhaseCountMismatch {
                expected: schedule.len(),
                actual: phases.len(),
            });
        }

        let mut state = State::initial();
        let mut total: u64 = 0;
        let steps = schedule.stream_a().iter().zip(schedule.stream_b());
        for (&phase, (&arrival_a, &arrival_b)) in phases.iter().zip(steps) {
            state = transition(
                &state,
                arrival_a,
                arrival_b,
                phase,
                self.config.discharge_per_step,
            );
            total = total.saturating_add(waiting_cost(state.queue_a, state.queue_b));
        }
        Ok(total)
    }
}

/// Minimum cumulative waiting cost with the default configuration.
///
/// Both arrival sequences must have exactly `horizon` entries.
pub fn optimize(
    horizon: usize,
    arrivals_a: &[u32],
    arrivals_b: &[u32],
) -> Result<u64, OptimizeError> {
    check_horizon(horizon, arrivals_a.len(), arrivals_b.len())?;
    let schedule = ArrivalSchedule::new(arrivals_a.to_vec(), arrivals_b.to_vec())?;
    Optimizer::default().min_cost(horizon, &schedule)
}

/// Cheapest state in the last frontier, or `NoFeasibleSchedule` if it is empty.
fn terminal_best(layers: &[Frontier], horizon: usize) -> Result<(State, u64), OptimizeError> {
    layers
        .last()
        .and_then(Frontier::best)
        .ok_or(OptimizeError::NoFeasibleSchedule { horizon })
}

fn check_horizon(horizon: usize, len_a: usize, len_b: usize) -> Result<(), OptimizeError> {
    if horizon == 0 {
        return Err(OptimizeError::ZeroHorizon);
    }
    for (stream, actual) in [(Stream::A, len_a), (Stream::B, len_b)] {
        if actual != horizon {
            return Err(OptimizeError::HorizonMismatch {
                stream,
                expected: horizon,
                actual,
            });
        }
    }
    Ok(())
}
