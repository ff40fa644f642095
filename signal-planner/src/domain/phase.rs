//! Signal phase type.

use std::fmt;

use serde::{Deserialize, Serialize};

/// The signal configuration active during one time step.
///
/// Variant order is significant: it is the order in which candidate
/// phases are expanded, and it defines the `Ord` used to break ties.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Phase {
    /// Stream A (north-south) has green and discharges.
    AGreen,
    /// Stream B (east-west) has green and discharges.
    BGreen,
    /// Intersection clearing; neither stream discharges.
    AllRed,
}

impl Phase {
    /// Every phase, in expansion order.
    pub const ALL: [Phase; 3] = [Phase::AGreen, Phase::BGreen, Phase::AllRed];

    /// Returns the canonical name (e.g., "A_GREEN").
    pub fn as_str(&self) -> &'static str {
        match self {
            Phase::AGreen => "A_GREEN",
            Phase::BGreen => "B_GREEN",
            Phase::AllRed => "ALL_RED",
        }
    }
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_matches_canonical_name() {
        assert_eq!(Phase::AGreen.to_string(), "A_GREEN");
        assert_eq!(Phase::BGreen.to_string(), "B_GREEN");
        assert_eq!(Phase::AllRed.to_string(), "ALL_RED");
    }

    #[test]
    fn all_lists_each_phase_once() {
        assert_eq!(Phase::ALL.len(), 3);
        assert!(Phase::ALL.contains(&Phase::AGreen));
        assert!(Phase::ALL.contains(&Phase::BGreen));
        assert!(Phase::ALL.contains(&Phase::AllRed));
    }

    #[test]
    fn serde_uses_canonical_name() {
        let json = serde_json::to_string(&Phase::BGreen).unwrap();
        assert_eq!(json, "\"B_GREEN\"");

        let phase: Phase = serde_json::from_str("\"ALL_RED\"").unwrap();
        assert_eq!(phase, Phase::AllRed);
    }
}
