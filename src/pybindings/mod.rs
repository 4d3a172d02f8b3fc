mod pybody;
mod pycatalog;
mod pyvector;

use pyo3::prelude::*;

#[pymodule]
pub fn starsphere(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<pyvector::PyVector>()?;
    m.add_class::<pybody::PyCelestialBody>()?;
    m.add_class::<pycatalog::PyBodyKdTree>()?;
    Ok(())
}
