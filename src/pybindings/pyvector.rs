use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;

use crate::{RaUnit, Vector};

pub(crate) fn parse_ra_unit(ra_unit: &str) -> PyResult<RaUnit> {
    ra_unit
        .parse::<RaUnit>()
        .map_err(|e| PyErr::new::<PyValueError, _>(e.to_string()))
}

#[pyclass(name = "Vector", frozen)]
#[derive(Clone)]
pub struct PyVector {
    inner: Vector,
}

#[pymethods]
impl PyVector {
    #[new]
    #[pyo3(signature = (x=0.0, y=0.0, z=0.0))]
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Vector::new(x, y, z).into()
    }

    #[staticmethod]
    #[pyo3(signature = (ra, dec, distance=1.0, ra_unit="degrees"))]
    pub fn from_spherical(ra: f64, dec: f64, distance: f64, ra_unit: &str) -> PyResult<Self> {
        let unit = parse_ra_unit(ra_unit)?;
        Ok(Vector::from_spherical(ra, dec, distance, unit).into())
    }

    /// Returns (ra, dec, distance)
    #[pyo3(signature = (ra_unit="degrees"))]
    pub fn to_spherical(&self, ra_unit: &str) -> PyResult<(f64, f64, f64)> {
        let s = self.inner.to_spherical(parse_ra_unit(ra_unit)?);
        Ok((s.ra, s.dec, s.distance))
    }

    #[getter]
    pub fn x(&self) -> f64 {
        self.inner.x()
    }

    #[getter]
    pub fn y(&self) -> f64 {
        self.inner.y()
    }

    #[getter]
    pub fn z(&self) -> f64 {
        self.inner.z()
    }

    pub fn length(&self) -> f64 {
        self.inner.length()
    }

    pub fn normalize(&self) -> Self {
        self.inner.normalize().into()
    }

    pub fn add(&self, other: &PyVector) -> Self {
        (self.inner + other.inner).into()
    }

    pub fn subtract(&self, other: &PyVector) -> Self {
        (self.inner - other.inner).into()
    }

    pub fn multiply(&self, scalar: f64) -> Self {
        (self.inner * scalar).into()
    }

    pub fn dot(&self, other: &PyVector) -> f64 {
        self.inner.dot(other.inner)
    }

    pub fn cross(&self, other: &PyVector) -> Self {
        self.inner.cross(other.inner).into()
    }

    pub fn angle_to(&self, other: &PyVector) -> f64 {
        self.inner.angle_to(other.inner)
    }

    pub fn distance_to(&self, other: &PyVector) -> f64 {
        self.inner.distance_to(other.inner)
    }

    #[pyo3(signature = (decimals=6))]
    pub fn to_string(&self, decimals: usize) -> String {
        format!("{:.*}", decimals, self.inner)
    }

    fn __repr__(&self) -> String {
        format!("Vector{}", self.inner)
    }
}

impl From<Vector> for PyVector {
    fn from(value: Vector) -> Self {
        Self { inner: value }
    }
}

impl From<PyVector> for Vector {
    fn from(value: PyVector) -> Self {
        value.inner
    }
}
