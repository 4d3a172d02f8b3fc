//! Cartesian and spherical coordinates in the equatorial frame
//!
//! The frame is right-handed: +X points to the vernal equinox
//! (RA = 0, Dec = 0), +Y lies in the equatorial plane at RA = 90 degrees,
//! and +Z points to the north celestial pole.

mod spherical;
mod vector;

pub use spherical::{RaUnit, Spherical};
pub use vector::Vector;
