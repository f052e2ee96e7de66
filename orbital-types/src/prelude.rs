pub use crate::earth::{EARTH_GM_KM3_S2, EARTH_RADIUS_KM};
pub use crate::elements::{CatalogNumber, OrbitalElementSet};
pub use crate::geodetic::GeodeticPosition;
pub use crate::object::TrackedObject;
pub use crate::risk::{RiskAssessment, RiskSeverity};
pub use crate::state::StateVector;
pub use crate::time::UtcTimestamp;
pub use crate::tle::UnstructuredTle;
