use crate::{
    elements::{CatalogNumber, OrbitalElementSet},
    geodetic::GeodeticPosition,
    time::UtcTimestamp,
};
use derive_more::Display;
use serde::Serialize;

/// A tracked orbiting object and its most recently derived state.
/// The derived fields are refreshed from `elements` on demand and start
/// out empty.
#[derive(Clone, PartialEq, Debug, Display, Serialize)]
#[display(fmt = "{{id: {}, name: {}, catalog: {}, ...}}", "id", "name", "catalog_number")]
pub struct TrackedObject {
    pub id: String,
    pub name: String,
    pub catalog_number: CatalogNumber,
    pub elements: OrbitalElementSet,

    /// Last computed geodetic position, if any
    pub position: Option<GeodeticPosition>,
    /// Last computed velocity [km/s], expressed in ECI
    pub velocity: Option<na::Vector3<f64>>,
    pub last_updated: Option<UtcTimestamp>,
}

impl TrackedObject {
    pub fn new(id: String, name: String, elements: OrbitalElementSet) -> Self {
        Self {
            id,
            name,
            catalog_number: elements.catalog_number,
            elements,
            position: None,
            velocity: None,
            last_updated: None,
        }
    }
}
