//! Python bindings for bloomset using PyO3

use crate::BloomFilter;
use pyo3::prelude::*;

/// Python wrapper for BloomFilter
#[pyclass(name = "BloomFilter")]
struct PyBloomFilter {
    inner: BloomFilter,
}

#[pymethods]
impl PyBloomFilter {
    #[new]
    fn new(expected_items: usize, false_positive_rate: f64) -> PyResult<Self> {
        let filter = BloomFilter::new(expected_items, false_positive_rate)
            .map_err(|e| PyErr::new::<pyo3::exceptions::PyValueError, _>(e.to_string()))?;

        Ok(PyBloomFilter { inner: filter })
    }

    fn insert(&mut self, item: &str) {
        self.inner.insert(item);
    }

    fn query(&self, item: &str) -> bool {
        self.inner.query(item)
    }

    fn __contains__(&self, item: &str) -> bool {
        self.inner.query(item)
    }

    fn indices(&self, item: &str) -> Vec<usize> {
        self.inner.indices(item)
    }

    #[getter]
    fn expected_items(&self) -> usize {
        self.inner.expected_items()
    }

    #[getter]
    fn false_positive_rate(&self) -> f64 {
        self.inner.false_positive_rate()
    }

    #[getter]
    fn num_bits(&self) -> usize {
        self.inner.num_bits()
    }

    #[getter]
    fn num_hash_functions(&self) -> usize {
        self.inner.num_hash_functions()
    }

    fn load_factor(&self) -> f64 {
        self.inner.load_factor()
    }

    fn estimated_fpr(&self) -> f64 {
        self.inner.estimated_fpr()
    }

    fn stats(&self) -> String {
        self.inner.stats().to_string()
    }

    fn __repr__(&self) -> String {
        format!(
            "BloomFilter(expected_items={}, false_positive_rate={}, num_bits={}, num_hash_functions={})",
            self.inner.expected_items(),
            self.inner.false_positive_rate(),
            self.inner.num_bits(),
            self.inner.num_hash_functions()
        )
    }
}

/// Python module definition
#[pymodule]
fn bloomset(_py: Python, m: &PyModule) -> PyResult<()> {
    m.add_class::<PyBloomFilter>()?;
    m.add("__version__", env!("CARGO_PKG_VERSION"))?;

    Ok(())
}
