use crate::time::UtcTimestamp;
use derive_more::Display;
use serde::Serialize;

/// Cartesian state in the Earth-centered inertial frame, valid at `at`
#[derive(Copy, Clone, PartialEq, Debug, Display, Serialize)]
#[display(fmt = "{{at: {}, pos: {}, vel: {}}}", "at", "position", "velocity")]
pub struct StateVector {
    pub at: UtcTimestamp,

    /// Position [km], expressed in ECI
    pub position: na::Vector3<f64>,
    /// Velocity [km/s], expressed in ECI
    pub velocity: na::Vector3<f64>,
}

impl StateVector {
    pub fn new(at: UtcTimestamp, position: na::Vector3<f64>, velocity: na::Vector3<f64>) -> Self {
        Self {
            at,
            position,
            velocity,
        }
    }

    /// Geocentric radius [km]
    pub fn radius(&self) -> f64 {
        self.position.norm()
    }
}
