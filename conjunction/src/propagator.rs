//! Two-body propagation of two-line mean elements.
//!
//! A single deterministic model: the mean anomaly is advanced by the epoch
//! mean motion, Kepler's equation is solved for the eccentric anomaly, and
//! the perifocal state is rotated into the Earth-centered inertial frame.
//! Drag terms are carried on the element set but do not feed the model.

use orbital_types::prelude::*;
use std::f64::consts::TAU;

/// Kepler iteration convergence tolerance [rad]
pub const KEPLER_TOLERANCE: f64 = 1e-8;
/// Hard cap on Kepler iterations, guarantees termination
pub const KEPLER_MAX_ITERATIONS: u32 = 50;

/// Eccentricities at or above this are treated as near-parabolic, which the
/// model does not support
const ECCENTRICITY_CEILING: f64 = 1.0 - 1e-6;

#[derive(Copy, Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum PropagationError {
    #[error("Kepler iteration failed to converge after {iterations} iterations")]
    KeplerNoConvergence { iterations: u32 },
    #[error("Degenerate orbit geometry: {0}")]
    DegenerateOrbit(&'static str),
}

/// Propagate an element set to the target instant.
///
/// Pure and deterministic: the same elements and instant always produce the
/// same state vector.
pub fn propagate(
    elements: &OrbitalElementSet,
    at: UtcTimestamp,
) -> Result<StateVector, PropagationError> {
    let e = elements.eccentricity;
    if !(0.0..ECCENTRICITY_CEILING).contains(&e) {
        return Err(PropagationError::DegenerateOrbit(
            "near-parabolic eccentricity",
        ));
    }
    if elements.mean_motion <= 0.0 {
        return Err(PropagationError::DegenerateOrbit("non-positive mean motion"));
    }

    // Mean motion [rad/s] and the semi-major axis [km] it implies
    let n = elements.mean_motion * TAU / 86_400.0;
    let semi_major = (EARTH_GM_KM3_S2 / (n * n)).cbrt();

    let mean_anomaly =
        (elements.mean_anomaly.to_radians() + n * elapsed_seconds(elements.epoch, at))
            .rem_euclid(TAU);
    let ecc_anomaly = solve_kepler(mean_anomaly, e)?;

    let (sin_e, cos_e) = ecc_anomaly.sin_cos();
    let true_anomaly = ((1.0 - e * e).sqrt() * sin_e).atan2(cos_e - e);
    let radius = semi_major * (1.0 - e * cos_e);

    let semi_latus = semi_major * (1.0 - e * e);
    let (sin_nu, cos_nu) = true_anomaly.sin_cos();
    let pos_pqw = na::Vector3::new(radius * cos_nu, radius * sin_nu, 0.0);
    let vel_scale = (EARTH_GM_KM3_S2 / semi_latus).sqrt();
    let vel_pqw = na::Vector3::new(-vel_scale * sin_nu, vel_scale * (e + cos_nu), 0.0);

    let rot = perifocal_to_eci(
        elements.raan.to_radians(),
        elements.inclination.to_radians(),
        elements.argument_of_perigee.to_radians(),
    );

    Ok(StateVector::new(at, rot * pos_pqw, rot * vel_pqw))
}

/// Newton iteration on `E - e·sin E = M`
fn solve_kepler(mean_anomaly: f64, eccentricity: f64) -> Result<f64, PropagationError> {
    let mut ecc_anomaly = mean_anomaly;
    for _ in 0..KEPLER_MAX_ITERATIONS {
        let delta = (ecc_anomaly - eccentricity * ecc_anomaly.sin() - mean_anomaly)
            / (1.0 - eccentricity * ecc_anomaly.cos());
        ecc_anomaly -= delta;
        if delta.abs() < KEPLER_TOLERANCE {
            return Ok(ecc_anomaly);
        }
    }
    Err(PropagationError::KeplerNoConvergence {
        iterations: KEPLER_MAX_ITERATIONS,
    })
}

/// Rz(Ω)·Rx(i)·Rz(ω), mapping the perifocal frame into ECI
fn perifocal_to_eci(raan: f64, inclination: f64, arg_perigee: f64) -> na::Rotation3<f64> {
    na::Rotation3::from_axis_angle(&na::Vector3::z_axis(), raan)
        * na::Rotation3::from_axis_angle(&na::Vector3::x_axis(), inclination)
        * na::Rotation3::from_axis_angle(&na::Vector3::z_axis(), arg_perigee)
}

/// Seconds between the element epoch and the target instant, negative when
/// the target precedes the epoch
fn elapsed_seconds(epoch: UtcTimestamp, at: UtcTimestamp) -> f64 {
    let dt = at - epoch;
    match dt.num_nanoseconds() {
        Some(ns) => ns as f64 / 1e9,
        None => dt.num_milliseconds() as f64 / 1e3,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use chrono::TimeZone;

    fn leo_elements() -> OrbitalElementSet {
        // The catalog 45678 sample: near-circular 53° orbit at ~15 rev/day
        OrbitalElementSet {
            catalog_number: 45678,
            classification: 'U',
            epoch: chrono::Utc.with_ymd_and_hms(2021, 1, 1, 2, 57, 46).unwrap(),
            mean_motion_dot: 0.0,
            mean_motion_ddot: 0.0,
            bstar: 0.0,
            element_set_number: 999,
            inclination: 53.0,
            raan: 180.0,
            eccentricity: 1e-7,
            argument_of_perigee: 0.0,
            mean_anomaly: 0.0,
            mean_motion: 15.0,
            revolution_number: 0,
        }
    }

    #[test]
    fn kepler_solution_satisfies_the_equation() {
        for (m, e) in [(2.5, 0.2), (0.0, 0.0), (5.8, 0.7), (3.14, 0.9)] {
            let ecc_anomaly = solve_kepler(m, e).unwrap();
            assert_relative_eq!(
                ecc_anomaly - e * ecc_anomaly.sin(),
                m,
                epsilon = 1e-7
            );
        }
    }

    #[test]
    fn kepler_known_solution() {
        let ecc_anomaly = solve_kepler(2.5, 0.2).unwrap();
        assert_relative_eq!(ecc_anomaly, 2.6026463827478965, epsilon = 1e-9);
    }

    #[test]
    fn fifteen_revs_per_day_sits_in_leo() {
        let elements = leo_elements();
        let sv = propagate(&elements, elements.epoch).unwrap();
        // a = (mu / n^2)^(1/3) ~ 6945 km for n = 15 rev/day
        assert_relative_eq!(sv.radius(), 6945.033, max_relative = 1e-4);
    }

    #[test]
    fn epoch_state_lies_at_perigee_direction() {
        let elements = leo_elements();
        let sv = propagate(&elements, elements.epoch).unwrap();
        // M = 0 and argp = 0: the position points along the ascending node,
        // which RAAN = 180° puts on the -x axis
        assert!(sv.position.x < 0.0);
        assert_relative_eq!(sv.position.z, 0.0, epsilon = 1e-6);
        // Circular LEO speed
        assert_relative_eq!(sv.velocity.norm(), 7.5758, max_relative = 1e-3);
    }

    #[test]
    fn propagation_is_deterministic() {
        let elements = leo_elements();
        let at = elements.epoch + chrono::Duration::minutes(123);
        let a = propagate(&elements, at).unwrap();
        let b = propagate(&elements, at).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn near_circular_orbit_radius_is_stable_across_a_revolution() {
        let elements = leo_elements();
        let r0 = propagate(&elements, elements.epoch).unwrap().radius();
        for minutes in [24, 48, 72, 96] {
            let at = elements.epoch + chrono::Duration::minutes(minutes);
            let r = propagate(&elements, at).unwrap().radius();
            assert_relative_eq!(r, r0, max_relative = 1e-6);
        }
    }

    #[test]
    fn inclination_bounds_the_z_excursion() {
        let elements = leo_elements();
        // A quarter revolution after the ascending node, the latitude
        // reaches the inclination
        let quarter_rev = chrono::Duration::seconds((86_400.0 / 15.0 / 4.0) as i64);
        let sv = propagate(&elements, elements.epoch + quarter_rev).unwrap();
        let max_z = sv.radius() * elements.inclination.to_radians().sin();
        assert_relative_eq!(sv.position.z, max_z, max_relative = 1e-2);
    }

    #[test]
    fn near_parabolic_orbit_is_rejected() {
        let mut elements = leo_elements();
        elements.eccentricity = 0.9999999;
        assert_eq!(
            propagate(&elements, elements.epoch),
            Err(PropagationError::DegenerateOrbit(
                "near-parabolic eccentricity"
            ))
        );
    }

    #[test]
    fn non_positive_mean_motion_is_rejected() {
        let mut elements = leo_elements();
        elements.mean_motion = 0.0;
        assert_eq!(
            propagate(&elements, elements.epoch),
            Err(PropagationError::DegenerateOrbit("non-positive mean motion"))
        );
    }

    #[test]
    fn target_instants_before_the_epoch_are_supported() {
        let elements = leo_elements();
        let sv = propagate(&elements, elements.epoch - chrono::Duration::hours(3)).unwrap();
        assert_relative_eq!(sv.radius(), 6945.033, max_relative = 1e-4);
    }
}
