use std::fmt;
use std::ops::{Add, Mul, Neg, Sub};

use super::{RaUnit, Spherical};

/// Immutable 3D Cartesian vector in the equatorial frame
///
/// Components can be in any consistent unit (light-years, AU, or a
/// unitless direction). Every operation returns a new vector.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Vector(crate::Vector3);

impl Vector {
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self(crate::Vector3::new(x, y, z))
    }

    pub fn zero() -> Self {
        Self(crate::Vector3::zeros())
    }

    pub fn x(&self) -> f64 {
        self.0.x
    }

    pub fn y(&self) -> f64 {
        self.0.y
    }

    pub fn z(&self) -> f64 {
        self.0.z
    }

    /// Create a vector from astronomical spherical coordinates
    ///
    /// # Arguments
    ///
    /// * `ra` - right ascension, in `ra_unit`
    /// * `dec` - declination in degrees
    /// * `distance` - radial distance; zero gives the zero vector
    /// * `ra_unit` - unit of `ra`
    pub fn from_spherical(ra: f64, dec: f64, distance: f64, ra_unit: RaUnit) -> Self {
        let ra_rad = ra_unit.to_degrees(ra).to_radians();
        let dec_rad = dec.to_radians();
        Self::new(
            distance * dec_rad.cos() * ra_rad.cos(),
            distance * dec_rad.cos() * ra_rad.sin(),
            distance * dec_rad.sin(),
        )
    }

    /// Unit direction vector for a right ascension and declination in degrees
    pub fn from_ra_dec_deg(ra_deg: f64, dec_deg: f64) -> Self {
        Self::from_spherical(ra_deg, dec_deg, 1.0, RaUnit::Degrees)
    }

    /// Convert to spherical coordinates
    ///
    /// The zero vector maps to the all-zero triple. Right ascension is
    /// wrapped into [0, 360) degrees before conversion to `ra_unit`.
    /// At the poles right ascension is undefined and comes out as
    /// whatever `atan2` gives for the residual x, y components.
    pub fn to_spherical(&self, ra_unit: RaUnit) -> Spherical {
        let distance = self.length();
        if distance == 0.0 {
            return Spherical::new(0.0, 0.0, 0.0, ra_unit);
        }

        let dec = (self.0.z / distance).clamp(-1.0, 1.0).asin().to_degrees();

        let mut ra_deg = self.0.y.atan2(self.0.x).to_degrees();
        if ra_deg < 0.0 {
            ra_deg += 360.0;
        }
        // -tiny + 360 rounds to 360
        if ra_deg >= 360.0 {
            ra_deg = 0.0;
        }

        Spherical::new(ra_unit.from_degrees(ra_deg), dec, distance, ra_unit)
    }

    /// Squared norm; overflows for components beyond ~1e154
    pub fn length_squared(&self) -> f64 {
        self.0.norm_squared()
    }

    /// Euclidean norm
    ///
    /// Components are scaled by the largest magnitude first, so the
    /// result is finite whenever it is representable.
    pub fn length(&self) -> f64 {
        let scale = self.0.amax();
        if scale == 0.0 || !scale.is_finite() {
            return self.0.norm();
        }
        (self.0 / scale).norm() * scale
    }

    /// Unit vector in the same direction, or the zero vector if this has
    /// zero length
    pub fn normalize(&self) -> Vector {
        let scale = self.0.amax();
        if scale == 0.0 || scale.is_nan() {
            return Vector::zero();
        }
        (self.0 / scale)
            .try_normalize(0.0)
            .map_or_else(Vector::zero, Vector)
    }

    pub fn dot(&self, other: Vector) -> f64 {
        self.0.dot(&other.0)
    }

    pub fn cross(&self, other: Vector) -> Vector {
        Vector(self.0.cross(&other.0))
    }

    /// Angle between two vectors in degrees, in [0, 180]
    ///
    /// Returns 0 if either vector has zero length.
    pub fn angle_to(&self, other: Vector) -> f64 {
        let (a, b) = (self.normalize(), other.normalize());
        if a == Vector::zero() || b == Vector::zero() {
            return 0.0;
        }
        a.dot(b).clamp(-1.0, 1.0).acos().to_degrees()
    }

    /// Euclidean distance between the points this and `other` describe
    pub fn distance_to(&self, other: Vector) -> f64 {
        (*self - other).length()
    }
}

impl Add for Vector {
    type Output = Vector;

    fn add(self, rhs: Vector) -> Vector {
        Vector(self.0 + rhs.0)
    }
}

impl Sub for Vector {
    type Output = Vector;

    fn sub(self, rhs: Vector) -> Vector {
        Vector(self.0 - rhs.0)
    }
}

impl Mul<f64> for Vector {
    type Output = Vector;

    fn mul(self, scalar: f64) -> Vector {
        Vector(self.0 * scalar)
    }
}

impl Mul<Vector> for f64 {
    type Output = Vector;

    fn mul(self, v: Vector) -> Vector {
        v * self
    }
}

impl Neg for Vector {
    type Output = Vector;

    fn neg(self) -> Vector {
        Vector(-self.0)
    }
}

/// Prints `(x, y, z)` with 6 decimals unless a precision is given
impl fmt::Display for Vector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let p = f.precision().unwrap_or(6);
        write!(f, "({:.*}, {:.*}, {:.*})", p, self.0.x, p, self.0.y, p, self.0.z)
    }
}

impl From<Vector> for crate::Vector3 {
    fn from(v: Vector) -> Self {
        v.0
    }
}

impl From<crate::Vector3> for Vector {
    fn from(v: crate::Vector3) -> Self {
        Vector(v)
    }
}

impl From<[f64; 3]> for Vector {
    fn from(v: [f64; 3]) -> Self {
        Vector(crate::Vector3::from(v))
    }
}

impl From<Vector> for [f64; 3] {
    fn from(v: Vector) -> Self {
        v.0.into()
    }
}
