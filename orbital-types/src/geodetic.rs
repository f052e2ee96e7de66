use derive_more::Display;
use serde::Serialize;

/// Geodetic coordinates over the spherical Earth model
#[derive(Copy, Clone, PartialEq, PartialOrd, Debug, Default, Display, Serialize)]
#[display(
    fmt = "{{lat: {}, lon: {}, alt: {}}}",
    "latitude",
    "longitude",
    "altitude"
)]
pub struct GeodeticPosition {
    /// Latitude [deg], in [-90, 90]
    pub latitude: f64,
    /// Longitude [deg], in (-180, 180]
    pub longitude: f64,
    /// Altitude above the mean equatorial radius [km]
    pub altitude: f64,
}

impl GeodeticPosition {
    pub fn new(latitude: f64, longitude: f64, altitude: f64) -> Self {
        Self {
            latitude,
            longitude,
            altitude,
        }
    }
}
