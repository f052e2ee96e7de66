use crate::time::UtcTimestamp;
use derive_more::Display;
use serde::Serialize;

pub type CatalogNumber = u32;

/// Orbital elements parsed from a two-line element set.
/// Angles are in degrees, mean motion in revolutions per day.
/// https://en.wikipedia.org/wiki/Two-line_element_set
#[derive(Copy, Clone, PartialEq, PartialOrd, Debug, Display, Serialize)]
#[display(
    fmt = "{{catalog: {}, epoch: {}, inc: {}, ecc: {}, n: {}, ...}}",
    "catalog_number",
    "epoch",
    "inclination",
    "eccentricity",
    "mean_motion"
)]
pub struct OrbitalElementSet {
    pub catalog_number: CatalogNumber,
    pub classification: char,
    pub epoch: UtcTimestamp,

    /// First time derivative of mean motion / 2 [rev/day²]
    pub mean_motion_dot: f64,
    /// Second time derivative of mean motion / 6 [rev/day³]
    pub mean_motion_ddot: f64,
    /// B* drag term [1/earth-radii]
    pub bstar: f64,
    pub element_set_number: u32,

    /// Inclination [deg], in [0, 180]
    pub inclination: f64,
    /// Right ascension of the ascending node [deg]
    pub raan: f64,
    /// Eccentricity, in [0, 1)
    pub eccentricity: f64,
    /// Argument of perigee [deg]
    pub argument_of_perigee: f64,
    /// Mean anomaly at epoch [deg]
    pub mean_anomaly: f64,
    /// Mean motion [rev/day], > 0
    pub mean_motion: f64,
    pub revolution_number: u32,
}
