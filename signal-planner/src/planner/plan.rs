//! Recovered phase plans.
//!
//! The optimizer's minimum cost is always available. A [`Plan`] goes one
//! step further and lists the phase chosen at every step of one optimal
//! schedule, recovered by following frontier back-pointers from the
//! cheapest terminal state.

use serde::Serialize;

use crate::domain::{Phase, State};

use super::frontier::Frontier;
use super::transition::waiting_cost;

/// One step of an optimal schedule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PlanStep {
    /// Zero-based time step.
    pub step: usize,

    /// Phase selected for this step.
    pub phase: Phase,

    /// Queue on stream A after this step.
    pub queue_a: u64,

    /// Queue on stream B after this step.
    pub queue_b: u64,

    /// Waiting cost incurred by this step alone.
    pub step_cost: u64,

    /// Cost accumulated through the end of this step.
    pub cumulative_cost: u64,
}

/// An optimal phase schedule and its total cost.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Plan {
    /// Minimum cumulative waiting cost over the horizon.
    pub total_cost: u64,

    /// Steps in time order.
    pub steps: Vec<PlanStep>,
}

impl Plan {
    /// Walk back-pointers from `terminal` through `layers` (step 0 first).
    ///
    /// `layers[t]` must be the frontier at step `t`, with `terminal` reachable
    /// in the last layer.
    pub(crate) fn reconstruct(layers: &[Frontier], terminal: State) -> Self {
        let mut steps = Vec::with_capacity(layers.len().saturating_sub(1));
        let mut current = terminal;

        for t in (1..layers.len()).rev() {
            let Some(entry) = layers[t].get(&current) else {
                break;
            };
            steps.push(PlanStep {
                step: t - 1,
                phase: current.phase,
                queue_a: current.queue_a,
                queue_b: current.queue_b,
                step_cost: waiting_cost(current.queue_a, current.queue_b),
                cumulative_cost: entry.cost,
            });
            match entry.parent {
                Some(parent) => current = parent,
                None => break,
            }
        }
        steps.reverse();
        debug_assert_eq!(steps.len() + 1, layers.len(), "broken back-pointer chain");

        let total_cost = steps.last().map_or(0, |s| s.cumulative_cost);
        Self { total_cost, steps }
    }

    /// Number of steps in the plan.
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    /// Returns true if the plan has no steps.
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// The phase sequence, one per step.
    pub fn phases(&self) -> Vec<Phase> {
        self.steps.iter().map(|s| s.phase).collect()
    }

    /// Number of times the phase changes between consecutive steps.
    pub fn phase_changes(&self) -> usize {
        self.steps
            .windows(2)
            .filter(|w| w[0].phase != w[1].phase)
            .count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn step(step: usize, phase: Phase, cumulative_cost: u64) -> PlanStep {
        PlanStep {
            step,
            phase,
            queue_a: 0,
            queue_b: 0,
            step_cost: 0,
            cumulative_cost,
        }
    }

    #[test]
    fn reconstruct_follows_parents() {
        let s0 = State::initial();
        let s1 = State::new(2, 0, Phase::BGreen);
        let s2 = State::new(0, 1, Phase::AGreen);

        let layer0 = Frontier::seeded(s0);
        let mut layer1 = Frontier::new();
        layer1.relax(s1, 2, Some(s0));
        let mut layer2 = Frontier::new();
        layer2.relax(s2, 3, Some(s1));

        let plan = Plan::reconstruct(&[layer0, layer1, layer2], s2);

        assert_eq!(plan.total_cost, 3);
        assert_eq!(plan.phases(), vec![Phase::BGreen, Phase::AGreen]);
        assert_eq!(plan.steps[0].step, 0);
        assert_eq!(plan.steps[0].queue_a, 2);
        assert_eq!(plan.steps[0].step_cost, 2);
        assert_eq!(plan.steps[1].step_cost, 1);
        assert_eq!(plan.steps[1].cumulative_cost, 3);
    }

    #[test]
    fn phase_changes_counts_switches() {
        let plan = Plan {
            total_cost: 0,
            steps: vec![
                step(0, Phase::AGreen, 0),
                step(1, Phase::AGreen, 0),
                step(2, Phase::BGreen, 0),
                step(3, Phase::AllRed, 0),
            ],
        };
        assert_eq!(plan.len(), 4);
        assert_eq!(plan.phase_changes(), 2);
    }

    #[test]
    fn serializes_phase_names() {
        let plan = Plan {
            total_cost: 5,
            steps: vec![step(0, Phase::AllRed, 5)],
        };
        let json = serde_json::to_value(&plan).unwrap();
        assert_eq!(json["total_cost"], 5);
        assert_eq!(json["steps"][0]["phase"], "ALL_RED");
    }
}
