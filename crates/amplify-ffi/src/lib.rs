// ─────────────────────────────────────────────────────────────────────
// Amplitude Amplification Kernel — PyO3 FFI Bindings
// (C) 1998-2026 Miroslav Sotek. All rights reserved.
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
// Note: #[deny(unsafe_code)] not applied — PyO3 proc macros generate
// unsafe blocks internally. All hand-written code in this crate is safe.
//! Python-callable wrappers around the amplification kernel.
//!
//! Exposes `AmplifyConfig`, `Trajectory`, `RustAmplifier`, and the
//! `amplify()` function to Python via PyO3.
//!
//! # FFI Safety
//!
//! - Every kernel error is raised as `ValueError`; nothing panics across
//!   the boundary.
//! - All config validated before storage (`AmplifyConfig::validate()`).
//!
//! Install: `pip install -e crates/amplify-ffi` (requires maturin).
//!
//! Usage from Python:
//! ```python
//! from amplify_kernel import amplify, RustAmplifier
//!
//! amplify(16, 1, 3)            # [-0.25]
//! amp = RustAmplifier(size=4, iterations=3, marked_index=0)
//! amp.run().values             # [-0.5, -1.0, -0.5]
//! ```

use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;
use pyo3::types::PyDict;

use amplify_core::IterationLoop;
use amplify_types::{AmplifyConfig, AmplifyError, Trajectory};

fn to_py_err(e: AmplifyError) -> PyErr {
    PyValueError::new_err(e.to_string())
}

// ─── PyAmplifyConfig ────────────────────────────────────────────────

/// Python-visible run configuration.
#[pyclass(name = "AmplifyConfig")]
#[derive(Clone)]
struct PyAmplifyConfig {
    inner: AmplifyConfig,
}

#[pymethods]
impl PyAmplifyConfig {
    #[new]
    #[pyo3(signature = (size = 16, iterations = 20, marked_index = 3))]
    fn new(size: i64, iterations: i64, marked_index: i64) -> PyResult<Self> {
        let config = AmplifyConfig::new(size, iterations, marked_index);
        config.validate().map_err(to_py_err)?;
        Ok(Self { inner: config })
    }

    /// Construct from JSON string.
    #[staticmethod]
    fn from_json(json: &str) -> PyResult<Self> {
        let config = AmplifyConfig::from_json(json).map_err(to_py_err)?;
        config.validate().map_err(to_py_err)?;
        Ok(Self { inner: config })
    }

    fn to_json(&self) -> PyResult<String> {
        self.inner.to_json().map_err(to_py_err)
    }

    #[getter]
    fn size(&self) -> i64 {
        self.inner.size
    }

    #[getter]
    fn iterations(&self) -> i64 {
        self.inner.iterations
    }

    #[getter]
    fn marked_index(&self) -> i64 {
        self.inner.marked_index
    }

    fn __repr__(&self) -> String {
        format!(
            "AmplifyConfig(size={}, iterations={}, marked_index={})",
            self.inner.size, self.inner.iterations, self.inner.marked_index
        )
    }
}

// ─── PyTrajectory ───────────────────────────────────────────────────

/// Python-visible marked-amplitude trajectory.
#[pyclass(name = "Trajectory")]
#[derive(Clone)]
struct PyTrajectory {
    inner: Trajectory,
}

#[pymethods]
impl PyTrajectory {
    #[getter]
    fn values(&self) -> Vec<f64> {
        self.inner.amplitudes.clone()
    }

    #[getter]
    fn size(&self) -> usize {
        self.inner.size
    }

    #[getter]
    fn marked_index(&self) -> usize {
        self.inner.marked_index
    }

    fn probabilities(&self) -> Vec<f64> {
        self.inner.probabilities()
    }

    /// `(cycle, probability)` of the first maximum, or None when empty.
    fn peak(&self) -> Option<(usize, f64)> {
        self.inner.peak()
    }

    fn to_dict<'py>(&self, py: Python<'py>) -> PyResult<Bound<'py, PyDict>> {
        let dict = PyDict::new(py);
        dict.set_item("size", self.inner.size)?;
        dict.set_item("marked_index", self.inner.marked_index)?;
        dict.set_item("amplitudes", self.inner.amplitudes.clone())?;
        dict.set_item("probabilities", self.inner.probabilities())?;
        Ok(dict)
    }

    fn __len__(&self) -> usize {
        self.inner.len()
    }

    fn __repr__(&self) -> String {
        format!(
            "Trajectory(size={}, marked_index={}, cycles={})",
            self.inner.size,
            self.inner.marked_index,
            self.inner.len()
        )
    }
}

// ─── RustAmplifier ──────────────────────────────────────────────────

/// Stateful amplification run. Step it cycle by cycle or run it out.
#[pyclass(name = "RustAmplifier")]
struct PyAmplifier {
    inner: Option<IterationLoop>,
}

impl PyAmplifier {
    fn live(&mut self) -> PyResult<&mut IterationLoop> {
        self.inner
            .as_mut()
            .ok_or_else(|| PyValueError::new_err("amplifier already consumed by run()"))
    }
}

#[pymethods]
impl PyAmplifier {
    #[new]
    #[pyo3(signature = (size = 16, iterations = 20, marked_index = 3))]
    fn new(size: i64, iterations: i64, marked_index: i64) -> PyResult<Self> {
        let inner = IterationLoop::new(size, iterations, marked_index).map_err(to_py_err)?;
        Ok(Self { inner: Some(inner) })
    }

    #[staticmethod]
    fn from_config(config: &PyAmplifyConfig) -> PyResult<Self> {
        let inner = IterationLoop::from_config(&config.inner).map_err(to_py_err)?;
        Ok(Self { inner: Some(inner) })
    }

    /// Perform one cycle. Returns the marked amplitude, or None when done.
    fn step(&mut self) -> PyResult<Option<f64>> {
        self.live()?.step().map_err(to_py_err)
    }

    /// Run all remaining cycles. The amplifier cannot be used afterwards.
    fn run(&mut self) -> PyResult<PyTrajectory> {
        let inner = self
            .inner
            .take()
            .ok_or_else(|| PyValueError::new_err("amplifier already consumed by run()"))?;
        let trajectory = inner.run().map_err(to_py_err)?;
        Ok(PyTrajectory { inner: trajectory })
    }

    /// Current amplitudes of the whole state vector.
    fn amplitudes(&mut self) -> PyResult<Vec<f64>> {
        Ok(self.live()?.state().as_slice().to_vec())
    }

    fn completed(&mut self) -> PyResult<usize> {
        Ok(self.live()?.completed())
    }

    fn remaining(&mut self) -> PyResult<usize> {
        Ok(self.live()?.remaining())
    }
}

// ─── Functions ──────────────────────────────────────────────────────

/// Marked amplitude after each of `iteration_count` cycles.
#[pyfunction]
#[pyo3(signature = (n, iteration_count, marked_index))]
fn amplify(n: i64, iteration_count: i64, marked_index: i64) -> PyResult<Vec<f64>> {
    amplify_core::amplify(n, iteration_count, marked_index).map_err(to_py_err)
}

#[pymodule]
fn amplify_kernel(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<PyAmplifyConfig>()?;
    m.add_class::<PyTrajectory>()?;
    m.add_class::<PyAmplifier>()?;
    m.add_function(wrap_pyfunction!(amplify, m)?)?;
    Ok(())
}
