pub mod catalogs;
pub mod geometry;

pub use catalogs::BodyKdTree;
pub use catalogs::CelestialBody;
pub use catalogs::Color;
pub use geometry::{RaUnit, Spherical, Vector};

#[cfg(feature = "pybindings")]
mod pybindings;

/// nalgebra vector type used for interop with linear-algebra code
pub type Vector3 = nalgebra::Vector3<f64>;
