use derive_more::Display;
use serde::Serialize;

#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Debug, Display, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum RiskSeverity {
    Low,
    Medium,
    High,
}

/// Proximity score for a pair of tracked objects.
/// The thresholds and probabilities are a fixed classification table,
/// not a covariance-based collision probability.
#[derive(Copy, Clone, PartialEq, PartialOrd, Debug, Display, Serialize)]
#[display(
    fmt = "{{distance: {} km, severity: {}, probability: {}}}",
    "distance",
    "severity",
    "probability"
)]
pub struct RiskAssessment {
    /// Straight-line separation [km]
    pub distance: f64,
    pub severity: RiskSeverity,
    /// Fixed per-tier probability, in [0, 1]
    pub probability: f64,
}
