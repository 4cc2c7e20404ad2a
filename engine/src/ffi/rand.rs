//! PyO3 wrapper for Rand
//!
//! # Example (from Python)
//!
//! ```python
//! from sfc_rand import Rand
//!
//! rng = Rand(42)
//! state = rng.marshal_binary()
//! roll = rng.intn(6)
//!
//! replay = Rand(0)
//! replay.unmarshal_binary(state)
//! assert replay.intn(6) == roll
//! ```

use pyo3::exceptions::{PyEOFError, PyValueError};
use pyo3::prelude::*;
use pyo3::types::{PyBytes, PyList};

use crate::checkpoint::CheckpointError;
use crate::generator::{Rand as RustRand, RandError};

fn invalid_argument(err: RandError) -> PyErr {
    PyValueError::new_err(err.to_string())
}

fn checkpoint_error(err: CheckpointError) -> PyErr {
    match err {
        CheckpointError::InsufficientData { .. } => PyEOFError::new_err(err.to_string()),
        other => PyValueError::new_err(other.to_string()),
    }
}

/// Python wrapper for the Rust generator
#[pyclass(name = "Rand")]
pub struct PyRand {
    inner: RustRand,
}

#[pymethods]
impl PyRand {
    /// Create a generator; without a seed it is seeded from entropy
    #[new]
    #[pyo3(signature = (seed=None))]
    fn new(seed: Option<u64>) -> Self {
        let inner = match seed {
            Some(seed) => RustRand::new(seed),
            None => RustRand::from_entropy(),
        };
        PyRand { inner }
    }

    /// Create a generator from three independent seed words
    #[staticmethod]
    fn from_seeds(a: u64, b: u64, c: u64) -> Self {
        PyRand {
            inner: RustRand::from_seeds(a, b, c),
        }
    }

    /// Re-seed in place
    fn seed(&mut self, seed: u64) {
        self.inner.seed(seed);
    }

    fn uint64(&mut self) -> u64 {
        self.inner.uint64()
    }

    fn uint32(&mut self) -> u32 {
        self.inner.uint32()
    }

    fn uint64n(&mut self, n: u64) -> u64 {
        self.inner.uint64n(n)
    }

    fn uint32n(&mut self, n: u32) -> u32 {
        self.inner.uint32n(n)
    }

    fn int31(&mut self) -> i32 {
        self.inner.int31()
    }

    fn int31n(&mut self, n: i32) -> PyResult<i32> {
        self.inner.try_int31n(n).map_err(invalid_argument)
    }

    fn int(&mut self) -> isize {
        self.inner.int()
    }

    fn int63(&mut self) -> i64 {
        self.inner.int63()
    }

    fn int63n(&mut self, n: i64) -> PyResult<i64> {
        self.inner.try_int63n(n).map_err(invalid_argument)
    }

    fn intn(&mut self, n: isize) -> PyResult<isize> {
        self.inner.try_intn(n).map_err(invalid_argument)
    }

    fn float32(&mut self) -> f32 {
        self.inner.float32()
    }

    fn float64(&mut self) -> f64 {
        self.inner.float64()
    }

    fn exp_float64(&mut self) -> f64 {
        self.inner.exp_float64()
    }

    fn norm_float64(&mut self) -> f64 {
        self.inner.norm_float64()
    }

    fn perm(&mut self, n: usize) -> Vec<usize> {
        self.inner.perm(n)
    }

    /// Shuffle a list in place
    fn shuffle(&mut self, items: &Bound<'_, PyList>) -> PyResult<()> {
        let mut order: Vec<Bound<'_, PyAny>> = items.iter().collect();
        self.inner.shuffle_slice(&mut order);
        for (i, item) in order.into_iter().enumerate() {
            items.set_item(i, item)?;
        }
        Ok(())
    }

    fn sample(&mut self, k: usize, n: usize) -> PyResult<Vec<usize>> {
        self.inner.try_sample(k, n).map_err(invalid_argument)
    }

    /// Return `n` pseudo-random bytes
    fn read<'py>(&mut self, py: Python<'py>, n: usize) -> Bound<'py, PyBytes> {
        let mut buf = vec![0u8; n];
        self.inner.fill_bytes(&mut buf);
        PyBytes::new_bound(py, &buf)
    }

    /// 41-byte binary state
    fn marshal_binary<'py>(&self, py: Python<'py>) -> Bound<'py, PyBytes> {
        PyBytes::new_bound(py, &self.inner.marshal_binary())
    }

    fn unmarshal_binary(&mut self, data: &[u8]) -> PyResult<()> {
        self.inner.unmarshal_binary(data).map_err(checkpoint_error)
    }

    /// JSON checkpoint with digest
    fn snapshot_json(&self) -> PyResult<String> {
        self.inner.snapshot().to_json().map_err(checkpoint_error)
    }

    #[staticmethod]
    fn restore_json(json: &str) -> PyResult<Self> {
        let snapshot = crate::checkpoint::StateSnapshot::from_json(json).map_err(checkpoint_error)?;
        let inner = RustRand::restore(&snapshot).map_err(checkpoint_error)?;
        Ok(PyRand { inner })
    }
}
