//! Per-step frontier of reachable states.
//!
//! A frontier maps each distinct state reachable at one time step to the
//! cheapest cumulative cost known to reach it. Inserting through
//! [`Frontier::relax`] is the Bellman step: a state's cost only ever moves
//! down, and an equal-cost arrival never displaces the first one found.

use std::collections::BTreeMap;
use std::collections::btree_map::Entry;

use crate::domain::State;

/// Best-known way of reaching one frontier state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrontierEntry {
    /// Minimum cumulative cost to reach the state.
    pub cost: u64,

    /// State at the previous step on the cheapest path.
    /// `None` only for the seed state at step 0.
    pub parent: Option<State>,
}

/// Reachable states at one time step with their minimum cumulative costs.
///
/// Backed by an ordered map so that iteration, and therefore which of two
/// equal-cost paths is discovered first, is the same on every run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Frontier {
    entries: BTreeMap<State, FrontierEntry>,
}

impl Frontier {
    /// Create an empty frontier.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create the step-0 frontier: `seed` at zero cost with no parent.
    pub fn seeded(seed: State) -> Self {
        let mut frontier = Self::new();
        frontier.entries.insert(
            seed,
            FrontierEntry {
                cost: 0,
                parent: None,
            },
        );
        frontier
    }

    /// Upsert-with-min.
    ///
    /// Records `cost` for `state` if the state is new or `cost` is strictly
    /// lower than the stored one. Returns true if the frontier changed.
    pub fn relax(&mut self, state: State, cost: u64, parent: Option<State>) -> bool {
        match self.entries.entry(state) {
            Entry::Vacant(slot) => {
                slot.insert(FrontierEntry { cost, parent });
                true
            }
            Entry::Occupied(mut slot) => {
                if cost < slot.get().cost {
                    slot.insert(FrontierEntry { cost, parent });
                    true
                } else {
                    false
                }
            }
        }
    }

    /// Minimum known cost for `state`, if reachable.
    pub fn cost(&self, state: &State) -> Option<u64> {
        self.entries.get(state).map(|e| e.cost)
    }

    /// Full entry for `state`, if reachable.
    pub fn get(&self, state: &State) -> Option<&FrontierEntry> {
        self.entries.get(state)
    }

    /// Number of distinct states.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if no state is reachable.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate states in ascending state order.
    pub fn iter(&self) -> impl Iterator<Item = (&State, &FrontierEntry)> {
        self.entries.iter()
    }

    /// Cheapest state and its cost.
    ///
    /// Equal costs resolve to the smallest state. Returns `None` when empty.
    pub fn best(&self) -> Option<(State, u64)> {
        self.entries
            .iter()
            .min_by_key(|(state, entry)| (entry.cost, **state))
            .map(|(state, entry)| (*state, entry.cost))
    }

    /// Largest queue length on either stream among the frontier's states.
    pub fn max_queue(&self) -> u64 {
        self.entries
            .keys()
            .map(|s| s.queue_a.max(s.queue_b))
            .max()
            .unwrap_or(0)
    }
}
