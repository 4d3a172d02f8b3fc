use std::fmt;
use std::str::FromStr;

use anyhow::bail;

use super::Vector;

/// Unit in which a right ascension is expressed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum RaUnit {
    #[default]
    Degrees,
    /// Hours of right ascension, 1h = 15 degrees
    Hours,
}

impl RaUnit {
    pub const DEGREES_PER_HOUR: f64 = 15.0;

    /// Convert a right ascension in this unit to degrees
    pub fn to_degrees(self, ra: f64) -> f64 {
        match self {
            RaUnit::Degrees => ra,
            RaUnit::Hours => ra * Self::DEGREES_PER_HOUR,
        }
    }

    /// Express a right ascension given in degrees in this unit
    pub fn from_degrees(self, ra_deg: f64) -> f64 {
        match self {
            RaUnit::Degrees => ra_deg,
            RaUnit::Hours => ra_deg / Self::DEGREES_PER_HOUR,
        }
    }
}

impl FromStr for RaUnit {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> anyhow::Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "degrees" | "degree" | "deg" | "d" => Ok(RaUnit::Degrees),
            "hours" | "hour" | "h" => Ok(RaUnit::Hours),
            other => bail!("unknown right ascension unit '{}'", other),
        }
    }
}

impl fmt::Display for RaUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RaUnit::Degrees => f.write_str("degrees"),
            RaUnit::Hours => f.write_str("hours"),
        }
    }
}

/// Astronomical spherical coordinates
///
/// `ra` is expressed in `ra_unit`, `dec` is always in degrees, and
/// `distance` is in whatever unit the Cartesian vector used.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Spherical {
    pub ra: f64,
    pub dec: f64,
    pub distance: f64,
    pub ra_unit: RaUnit,
}

impl Spherical {
    pub fn new(ra: f64, dec: f64, distance: f64, ra_unit: RaUnit) -> Self {
        Self {
            ra,
            dec,
            distance,
            ra_unit,
        }
    }

    /// Right ascension in degrees regardless of `ra_unit`
    pub fn ra_deg(&self) -> f64 {
        self.ra_unit.to_degrees(self.ra)
    }

    pub fn to_vector(&self) -> Vector {
        Vector::from_spherical(self.ra, self.dec, self.distance, self.ra_unit)
    }
}
