/// Mean equatorial radius [km], spherical Earth model
pub const EARTH_RADIUS_KM: f64 = 6378.137;

/// Gravitational parameter GM [km³/s²]
pub const EARTH_GM_KM3_S2: f64 = 398600.4418;
