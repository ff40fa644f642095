//! Transition and cost functions of the queue model.
//!
//! Discharge is an instantaneous, saturating subtraction: the selected green
//! stream loses up to `discharge` vehicles after the step's arrivals join.

use crate::domain::{Phase, State};

/// Successor of `state` after one step's arrivals and the chosen `next` phase.
///
/// Pure and total: both queues absorb their arrivals, then the stream given
/// green by `next` is reduced by `discharge`, flooring at zero.
pub fn transition(
    state: &State,
    arrival_a: u32,
    arrival_b: u32,
    next: Phase,
    discharge: u64,
) -> State {
    let mut queue_a = state.queue_a.saturating_add(u64::from(arrival_a));
    let mut queue_b = state.queue_b.saturating_add(u64::from(arrival_b));

    match next {
        Phase::AGreen => queue_a = queue_a.saturating_sub(discharge),
        Phase::BGreen => queue_b = queue_b.saturating_sub(discharge),
        Phase::AllRed => {}
    }

    State::new(queue_a, queue_b, next)
}

/// Instantaneous waiting cost: both streams weighted equally.
pub fn waiting_cost(queue_a: u64, queue_b: u64) -> u64 {
    queue_a.saturating_add(queue_b)
}

#[cfg(test)]
mod tests {
    use super::*;

    const CAPACITY: u64 = 10;

    #[test]
    fn a_green_discharges_only_a() {
        let s = State::new(12, 7, Phase::AllRed);
        let next = transition(&s, 3, 2, Phase::AGreen, CAPACITY);
        assert_eq!(next, State::new(5, 9, Phase::AGreen));
    }

    #[test]
    fn b_green_discharges_only_b() {
        let s = State::new(12, 7, Phase::AGreen);
        let next = transition(&s, 3, 5, Phase::BGreen, CAPACITY);
        assert_eq!(next, State::new(15, 2, Phase::BGreen));
    }

    #[test]
    fn all_red_discharges_neither() {
        let s = State::new(1, 2, Phase::BGreen);
        let next = transition(&s, 3, 4, Phase::AllRed, CAPACITY);
        assert_eq!(next, State::new(4, 6, Phase::AllRed));
    }

    #[test]
    fn discharge_saturates_at_zero() {
        let s = State::new(3, 0, Phase::AllRed);
        let next = transition(&s, 0, 0, Phase::AGreen, CAPACITY);
        assert_eq!(next.queue_a, 0);
    }

    #[test]
    fn arrivals_join_before_discharge() {
        // 5 arrive and are cleared in the same step.
        let next = transition(&State::initial(), 5, 0, Phase::AGreen, CAPACITY);
        assert_eq!(next, State::new(0, 0, Phase::AGreen));
    }

    #[test]
    fn zero_capacity_never_discharges() {
        let next = transition(&State::new(4, 4, Phase::AllRed), 1, 1, Phase::AGreen, 0);
        assert_eq!(next, State::new(5, 5, Phase::AGreen));
    }

    #[test]
    fn result_phase_is_chosen_phase() {
        for phase in Phase::ALL {
            let next = transition(&State::new(1, 1, Phase::AGreen), 0, 0, phase, CAPACITY);
            assert_eq!(next.phase, phase);
        }
    }

    #[test]
    fn cost_is_sum_of_queues() {
        assert_eq!(waiting_cost(0, 0), 0);
        assert_eq!(waiting_cost(5, 0), 5);
        assert_eq!(waiting_cost(3, 4), 7);
    }
}
