//! Trajectory prediction across a time horizon.

use crate::{
    geodetic,
    propagator::{self, PropagationError},
    registry::Registry,
};
use orbital_types::prelude::*;
use serde::Serialize;
use tracing::debug;

/// One propagated sample of one object's trajectory
#[derive(Clone, PartialEq, Debug, Serialize)]
pub struct PredictedPosition {
    pub object_id: String,
    pub time: UtcTimestamp,
    pub position: GeodeticPosition,
}

/// Propagate every object across `hours` one-hour offsets from the shared
/// reference instant `now`.
///
/// The output is grouped by object in input order; within an object the
/// hour offsets are contiguous and strictly increasing. `hours == 0`
/// produces an empty sequence. All samples in one call share the same
/// `now`, so the batch is internally time-consistent.
pub fn predict(
    objects: &[TrackedObject],
    hours: u32,
    now: UtcTimestamp,
) -> Result<Vec<PredictedPosition>, PropagationError> {
    let mut predictions = Vec::with_capacity(objects.len() * hours as usize);
    for object in objects {
        for hour in 0..hours {
            let time = now + chrono::Duration::hours(i64::from(hour));
            let sv = propagator::propagate(&object.elements, time)?;
            predictions.push(PredictedPosition {
                object_id: object.id.clone(),
                time,
                position: geodetic::to_geodetic(&sv),
            });
        }
    }
    Ok(predictions)
}

/// [`predict`] against the wall clock; the reference instant is read
/// exactly once for the whole batch
pub fn predict_now(
    objects: &[TrackedObject],
    hours: u32,
) -> Result<Vec<PredictedPosition>, PropagationError> {
    predict(objects, hours, chrono::Utc::now())
}

/// Predict only the requested ids out of a registry snapshot.
///
/// Ids absent from the snapshot contribute nothing; an unknown id never
/// fails the rest of the batch.
pub fn predict_selected(
    registry: &Registry,
    ids: &[String],
    hours: u32,
    now: UtcTimestamp,
) -> Result<Vec<PredictedPosition>, PropagationError> {
    let mut predictions = Vec::new();
    for id in ids {
        match registry.get(id) {
            Some(object) => {
                predictions.extend(predict(std::slice::from_ref(object), hours, now)?)
            }
            None => debug!(id = id.as_str(), "Unknown object id in prediction request"),
        }
    }
    Ok(predictions)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn test_objects() -> Vec<TrackedObject> {
        ["alpha", "bravo"]
            .into_iter()
            .enumerate()
            .map(|(i, id)| {
                let elements = OrbitalElementSet {
                    catalog_number: 45678 + i as u32,
                    classification: 'U',
                    epoch: chrono::Utc.with_ymd_and_hms(2021, 1, 1, 0, 0, 0).unwrap(),
                    mean_motion_dot: 0.0,
                    mean_motion_ddot: 0.0,
                    bstar: 0.0,
                    element_set_number: 1,
                    inclination: 53.0,
                    raan: 10.0 * i as f64,
                    eccentricity: 1e-7,
                    argument_of_perigee: 0.0,
                    mean_anomaly: 0.0,
                    mean_motion: 15.0,
                    revolution_number: 0,
                };
                TrackedObject::new(id.to_string(), id.to_uppercase(), elements)
            })
            .collect()
    }

    fn now() -> UtcTimestamp {
        chrono::Utc.with_ymd_and_hms(2021, 1, 2, 12, 0, 0).unwrap()
    }

    #[test]
    fn zero_hours_is_empty() {
        let predictions = predict(&test_objects(), 0, now()).unwrap();
        assert!(predictions.is_empty());
    }

    #[test]
    fn objects_outer_hours_inner() {
        let predictions = predict(&test_objects(), 3, now()).unwrap();
        assert_eq!(predictions.len(), 6);

        let ids: Vec<&str> = predictions.iter().map(|p| p.object_id.as_str()).collect();
        assert_eq!(ids, ["alpha", "alpha", "alpha", "bravo", "bravo", "bravo"]);

        for per_object in predictions.chunks(3) {
            for (hour, p) in per_object.iter().enumerate() {
                assert_eq!(p.time, now() + chrono::Duration::hours(hour as i64));
            }
        }
    }

    #[test]
    fn single_object_horizon_length_and_ordering() {
        let objects = test_objects();
        let predictions = predict(&objects[..1], 24, now()).unwrap();
        assert_eq!(predictions.len(), 24);
        for pair in predictions.windows(2) {
            assert!(pair[0].time < pair[1].time);
        }
    }

    #[test]
    fn unknown_ids_are_skipped() {
        let registry = Registry::new(test_objects());
        let ids = vec![
            "alpha".to_string(),
            "missing".to_string(),
            "bravo".to_string(),
        ];
        let predictions = predict_selected(&registry, &ids, 2, now()).unwrap();
        let ids: Vec<&str> = predictions.iter().map(|p| p.object_id.as_str()).collect();
        assert_eq!(ids, ["alpha", "alpha", "bravo", "bravo"]);
    }
}
