//! Pairwise proximity scoring.
//!
//! The tier table is a fixed part of the observable contract, not a
//! covariance-based collision probability model:
//!
//! | distance [km] | severity | probability |
//! |---|---|---|
//! | < 10 | high | 0.8 |
//! | 10 ≤ d < 50 | medium | 0.4 |
//! | ≥ 50 | low | 0.1 |

use crate::geodetic::cartesian_of;
use orbital_types::prelude::*;
use serde::Serialize;
use tracing::debug;

/// Straight-line separation of two geodetic positions, classified by the
/// tier table. Symmetric in its arguments.
pub fn assess_risk(a: &GeodeticPosition, b: &GeodeticPosition) -> RiskAssessment {
    classify((cartesian_of(a) - cartesian_of(b)).norm())
}

/// Tier classification for a separation distance [km]
pub fn classify(distance: f64) -> RiskAssessment {
    let (severity, probability) = if distance < 10.0 {
        (RiskSeverity::High, 0.8)
    } else if distance < 50.0 {
        (RiskSeverity::Medium, 0.4)
    } else {
        (RiskSeverity::Low, 0.1)
    };
    RiskAssessment {
        distance,
        severity,
        probability,
    }
}

/// One scored pair out of a conjunction scan
#[derive(Clone, PartialEq, Debug, Serialize)]
pub struct ConjunctionReport {
    pub id: String,
    pub object1: String,
    pub object2: String,
    pub time: UtcTimestamp,
    #[serde(flatten)]
    pub risk: RiskAssessment,
}

/// Score every unordered pair of objects with a computed position, in input
/// order (i before j). Objects without a position are skipped, not failed.
pub fn scan_conjunctions(objects: &[TrackedObject], at: UtcTimestamp) -> Vec<ConjunctionReport> {
    let mut reports = Vec::new();
    for (i, a) in objects.iter().enumerate() {
        let Some(pos_a) = a.position else {
            debug!(id = a.id.as_str(), "Skipping object without a position");
            continue;
        };
        for b in &objects[i + 1..] {
            let Some(pos_b) = b.position else {
                continue;
            };
            reports.push(ConjunctionReport {
                id: format!("risk-{}-{}", a.id, b.id),
                object1: a.id.clone(),
                object2: b.id.clone(),
                time: at,
                risk: assess_risk(&pos_a, &pos_b),
            });
        }
    }
    reports
}
