pub use crate::parser::{parse_element_set, parse_tle_set, ParseError};

pub mod parser;

/// Both lines of an element set are exactly this many columns wide
pub const TLE_LINE_LEN: usize = 69;
