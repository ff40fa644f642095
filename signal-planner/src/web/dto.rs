//! Data transfer objects for web requests and responses.

use serde::{Deserialize, Serialize};

use crate::planner::{Plan, PlanStep};

/// Request to optimize a phase schedule.
#[derive(Debug, Deserialize)]
pub struct OptimizeRequest {
    /// Forecast arrivals per step on stream A (north-south)
    pub arrivals_a: Vec<i64>,

    /// Forecast arrivals per step on stream B (east-west)
    pub arrivals_b: Vec<i64>,

    /// Number of steps to optimize (defaults to the arrival length)
    #[serde(default)]
    pub horizon: Option<usize>,
}

/// Optimized schedule.
#[derive(Debug, Serialize)]
pub struct OptimizeResponse {
    /// Minimum cumulative waiting cost
    pub min_cost: u64,

    /// Number of steps optimized
    pub horizon: usize,

    /// Phase switches in the returned plan
    pub phase_changes: usize,

    /// One optimal phase per step
    pub plan: Vec<PlanStep>,
}

impl From<&Plan> for OptimizeResponse {
    fn from(plan: &Plan) -> Self {
        Self {
            min_cost: plan.total_cost,
            horizon: plan.len(),
            phase_changes: plan.phase_changes(),
            plan: plan.steps.clone(),
        }
    }
}

/// Error response body.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    /// Error message
    pub error: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Phase;

    #[test]
    fn request_horizon_optional() {
        let req: OptimizeRequest =
            serde_json::from_str(r#"{"arrivals_a": [1, 2], "arrivals_b": [3, 4]}"#).unwrap();
        assert_eq!(req.arrivals_a, vec![1, 2]);
        assert_eq!(req.arrivals_b, vec![3, 4]);
        assert_eq!(req.horizon, None);
    }

    #[test]
    fn request_accepts_negative_for_validation() {
        let req: OptimizeRequest =
            serde_json::from_str(r#"{"arrivals_a": [-1], "arrivals_b": [0], "horizon": 1}"#)
                .unwrap();
        assert_eq!(req.arrivals_a, vec![-1]);
        assert_eq!(req.horizon, Some(1));
    }

    #[test]
    fn response_from_plan() {
        let plan = Plan {
            total_cost: 5,
            steps: vec![
                PlanStep {
                    step: 0,
                    phase: Phase::AGreen,
                    queue_a: 0,
                    queue_b: 2,
                    step_cost: 2,
                    cumulative_cost: 2,
                },
                PlanStep {
                    step: 1,
                    phase: Phase::BGreen,
                    queue_a: 3,
                    queue_b: 0,
                    step_cost: 3,
                    cumulative_cost: 5,
                },
            ],
        };

        let resp = OptimizeResponse::from(&plan);
        assert_eq!(resp.min_cost, 5);
        assert_eq!(resp.horizon, 2);
        assert_eq!(resp.phase_changes, 1);

        let json = serde_json::to_value(&resp).unwrap();
        assert_eq!(json["plan"][1]["phase"], "B_GREEN");
    }
}
