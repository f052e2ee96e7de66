extern crate nalgebra as na;

pub mod earth;
pub mod elements;
pub mod geodetic;
pub mod object;
pub mod prelude;
pub mod risk;
pub mod state;
pub mod time;
pub mod tle;
