//! TOML catalog of tracked satellites.

use crate::registry::Registry;
use orbital_types::prelude::*;
use serde::Deserialize;
use std::{collections::HashSet, fs, path::Path};
use tle::ParseError;

#[derive(Clone, PartialEq, Debug, Default, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct Catalog {
    pub name: Option<String>,
    #[serde(alias = "satellite")]
    pub satellites: Vec<SatelliteEntry>,
}

#[derive(Clone, PartialEq, Debug, Default, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct SatelliteEntry {
    pub id: String,
    pub name: String,
    pub tle_line1: String,
    pub tle_line2: String,
}

impl Catalog {
    pub fn load<P: AsRef<Path>>(path: P) -> Self {
        let content = fs::read_to_string(path).expect("Failed to read catalog file");
        Self::from_str_checked(&content)
    }

    pub fn from_str_checked(s: &str) -> Self {
        let catalog: Catalog = toml::from_str(s).expect("Failed to parse catalog file");

        let mut ids = HashSet::new();
        for sat in catalog.satellites.iter() {
            if !ids.insert(&sat.id) {
                panic!("Duplicate catalog entry for satellite '{}'", sat.id);
            }
        }

        catalog
    }

    /// Parse each entry's element set into a registry snapshot.
    /// Derived positions start out empty; run [`Registry::refresh`] to fill
    /// them.
    pub fn into_registry(self) -> Result<Registry, ParseError> {
        let mut objects = Vec::with_capacity(self.satellites.len());
        for sat in self.satellites {
            let elements = tle::parse_element_set(&sat.tle_line1, &sat.tle_line2)?;
            objects.push(TrackedObject::new(sat.id, sat.name, elements));
        }
        Ok(Registry::new(objects))
    }
}
