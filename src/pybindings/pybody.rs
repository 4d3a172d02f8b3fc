use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;

use crate::{CelestialBody, Color};

use super::pyvector::PyVector;

#[pyclass(name = "CelestialBody", frozen)]
#[derive(Clone)]
pub struct PyCelestialBody {
    inner: CelestialBody,
}

#[pymethods]
impl PyCelestialBody {
    #[new]
    #[pyo3(signature = (name, ra, dec, distance, magnitude=0.0, color="#ffffff"))]
    pub fn new(
        name: String,
        ra: f64,
        dec: f64,
        distance: f64,
        magnitude: f64,
        color: &str,
    ) -> PyResult<Self> {
        let color = color
            .parse::<Color>()
            .map_err(|e| PyErr::new::<PyValueError, _>(e.to_string()))?;
        Ok(CelestialBody::new(name, ra, dec, distance)
            .with_magnitude(magnitude)
            .with_color(color)
            .into())
    }

    #[getter]
    pub fn name(&self) -> &str {
        &self.inner.name
    }

    #[getter]
    pub fn ra(&self) -> f64 {
        self.inner.right_ascension
    }

    #[getter]
    pub fn dec(&self) -> f64 {
        self.inner.declination
    }

    #[getter]
    pub fn distance(&self) -> f64 {
        self.inner.distance
    }

    #[getter]
    pub fn magnitude(&self) -> f64 {
        self.inner.magnitude
    }

    #[getter]
    pub fn color(&self) -> String {
        self.inner.color.to_string()
    }

    #[getter]
    pub fn position(&self) -> PyVector {
        self.inner.position().into()
    }

    pub fn visual_size(&self) -> f64 {
        self.inner.visual_size()
    }

    pub fn angular_distance_to(&self, other: &PyCelestialBody) -> f64 {
        self.inner.angular_distance_to(&other.inner)
    }

    pub fn physical_distance_to(&self, other: &PyCelestialBody) -> f64 {
        self.inner.physical_distance_to(&other.inner)
    }

    fn __repr__(&self) -> String {
        format!(
            "CelestialBody(name={:?}, ra={}, dec={}, distance={}, magnitude={})",
            self.inner.name,
            self.inner.right_ascension,
            self.inner.declination,
            self.inner.distance,
            self.inner.magnitude
        )
    }
}

impl From<CelestialBody> for PyCelestialBody {
    fn from(value: CelestialBody) -> Self {
        Self { inner: value }
    }
}

impl From<PyCelestialBody> for CelestialBody {
    fn from(value: PyCelestialBody) -> Self {
        value.inner
    }
}
