pub extern crate nalgebra as na;

pub mod catalog;
pub mod geodetic;
pub mod prediction;
pub mod propagator;
pub mod registry;
pub mod risk;

pub use catalog::Catalog;
pub use geodetic::{cartesian_of, to_geodetic};
pub use prediction::{predict, predict_now, predict_selected, PredictedPosition};
pub use propagator::{propagate, PropagationError};
pub use registry::Registry;
pub use risk::{assess_risk, scan_conjunctions, ConjunctionReport};

use orbital_types::prelude::*;

/// Element-set text faults and propagation faults stay distinct so callers
/// can tell bad input from a bad orbit.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    Parse(#[from] tle::ParseError),
    #[error(transparent)]
    Propagation(#[from] PropagationError),
}

/// Parse a raw two-line element set and propagate it to `at`
pub fn propagate_lines(line1: &str, line2: &str, at: UtcTimestamp) -> Result<StateVector, Error> {
    let elements = tle::parse_element_set(line1, line2)?;
    Ok(propagator::propagate(&elements, at)?)
}
