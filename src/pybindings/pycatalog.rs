use pyo3::prelude::*;

use crate::{BodyKdTree, CelestialBody, Vector};

use super::pybody::PyCelestialBody;
use super::pyvector::PyVector;

#[pyclass(name = "BodyKdTree", frozen)]
pub struct PyBodyKdTree {
    tree: BodyKdTree,
}

#[pymethods]
impl PyBodyKdTree {
    #[new]
    pub fn new(bodies: Vec<PyCelestialBody>) -> Self {
        Self {
            tree: BodyKdTree::from_bodies(bodies.into_iter().map(CelestialBody::from)),
        }
    }

    /// Returns (body, angular distance in degrees) or None
    pub fn nearest_body(&self, direction: PyVector) -> Option<(PyCelestialBody, f64)> {
        self.tree
            .nearest_body(Vector::from(direction))
            .map(|(body, sep)| (body.clone().into(), sep))
    }

    pub fn nearest_bodies(&self, direction: PyVector, k: usize) -> Vec<(PyCelestialBody, f64)> {
        self.tree
            .nearest_bodies(Vector::from(direction), k)
            .into_iter()
            .map(|(body, sep)| (body.clone().into(), sep))
            .collect()
    }

    pub fn bodies_within(&self, direction: PyVector, radius_deg: f64) -> Vec<PyCelestialBody> {
        self.tree
            .bodies_within(Vector::from(direction), radius_deg)
            .into_iter()
            .map(|body| body.clone().into())
            .collect()
    }

    pub fn __len__(&self) -> usize {
        self.tree.len()
    }
}
