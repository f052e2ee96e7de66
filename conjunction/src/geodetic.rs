//! Cartesian ECI ↔ geodetic conversion over a spherical Earth.
//!
//! Known limitation: the Earth model is a sphere, not the WGS-84 ellipsoid.
//! Both directions share the single [`EARTH_RADIUS_KM`] constant, so
//! positions and the separation distances derived from them stay mutually
//! consistent. Latitude and longitude keep the natural ranges of
//! `asin`/`atan2`; there is no oblateness correction.

use orbital_types::prelude::*;

/// State vector → latitude/longitude [deg] and altitude [km]
pub fn to_geodetic(sv: &StateVector) -> GeodeticPosition {
    let r = sv.radius();
    let latitude = (sv.position.z / r).asin().to_degrees();
    let longitude = sv.position.y.atan2(sv.position.x).to_degrees();
    GeodeticPosition::new(latitude, longitude, r - EARTH_RADIUS_KM)
}

/// Geodetic position → Cartesian [km], the exact inverse of [`to_geodetic`]
pub fn cartesian_of(pos: &GeodeticPosition) -> na::Vector3<f64> {
    let lat = pos.latitude.to_radians();
    let lon = pos.longitude.to_radians();
    let r = pos.altitude + EARTH_RADIUS_KM;
    na::Vector3::new(
        r * lat.cos() * lon.cos(),
        r * lat.cos() * lon.sin(),
        r * lat.sin(),
    )
}
