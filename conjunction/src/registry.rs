//! By-value snapshot of the tracked-object set.
//!
//! The engine never reads a live store: callers hand in a snapshot and own
//! the refreshed result, so a registry mutating elsewhere during a scan
//! cannot affect an in-flight computation.

use crate::{
    geodetic,
    propagator::{self, PropagationError},
};
use orbital_types::prelude::*;

#[derive(Clone, PartialEq, Debug, Default)]
pub struct Registry {
    objects: Vec<TrackedObject>,
}

impl Registry {
    pub fn new(objects: Vec<TrackedObject>) -> Self {
        Self { objects }
    }

    pub fn all(&self) -> &[TrackedObject] {
        &self.objects
    }

    pub fn get(&self, id: &str) -> Option<&TrackedObject> {
        self.objects.iter().find(|o| o.id == id)
    }

    pub fn len(&self) -> usize {
        self.objects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }

    /// Recompute every object's derived position/velocity at the shared
    /// instant `at`
    pub fn refresh(&mut self, at: UtcTimestamp) -> Result<(), PropagationError> {
        for object in &mut self.objects {
            let sv = propagator::propagate(&object.elements, at)?;
            object.position = Some(geodetic::to_geodetic(&sv));
            object.velocity = Some(sv.velocity);
            object.last_updated = Some(at);
        }
        Ok(())
    }
}
