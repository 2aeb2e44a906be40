// ─────────────────────────────────────────────────────────────────────
// Amplitude Amplification Kernel — State Vector
// ─────────────────────────────────────────────────────────────────────
//! Fixed-length amplitude buffer and its uniform initialisation.

use amplify_types::{AmplifyError, AmplifyResult};

/// Ordered, fixed-length sequence of real amplitudes.
///
/// Length is set at construction and never changes; entries are mutated
/// in place by the operators in this crate.
#[derive(Debug, Clone, PartialEq)]
pub struct StateVector {
    amplitudes: Vec<f64>,
}

impl StateVector {
    /// Uniform start state: every entry equals `1/√n`.
    ///
    /// Fails with `InvalidSize` for `n == 0` and for sizes whose buffer
    /// cannot be allocated.
    pub fn uniform(n: usize) -> AmplifyResult<Self> {
        if n == 0 {
            return Err(AmplifyError::InvalidSize { size: 0 });
        }
        let mut amplitudes = Vec::new();
        amplitudes.try_reserve_exact(n).map_err(|e| {
            log::warn!("state vector of {n} amplitudes not allocatable: {e}");
            AmplifyError::InvalidSize {
                size: i64::try_from(n).unwrap_or(i64::MAX),
            }
        })?;
        let weight = 1.0 / (n as f64).sqrt();
        amplitudes.resize(n, weight);
        Ok(Self { amplitudes })
    }

    /// Wrap an arbitrary non-empty amplitude vector.
    pub fn from_amplitudes(amplitudes: Vec<f64>) -> AmplifyResult<Self> {
        if amplitudes.is_empty() {
            return Err(AmplifyError::InvalidSize { size: 0 });
        }
        Ok(Self { amplitudes })
    }

    pub fn len(&self) -> usize {
        self.amplitudes.len()
    }

    /// Always false: construction rejects empty vectors.
    pub fn is_empty(&self) -> bool {
        self.amplitudes.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<f64> {
        self.amplitudes.get(index).copied()
    }

    pub fn as_slice(&self) -> &[f64] {
        &self.amplitudes
    }

    pub(crate) fn as_mut_slice(&mut self) -> &mut [f64] {
        &mut self.amplitudes
    }

    pub fn sum(&self) -> f64 {
        self.amplitudes.iter().sum()
    }

    pub fn mean(&self) -> f64 {
        self.sum() / self.amplitudes.len() as f64
    }

    /// Σ x_i². Stays at 1.0 for a uniform start under diffusion and oracle.
    pub fn norm_squared(&self) -> f64 {
        self.amplitudes.iter().map(|x| x * x).sum()
    }
}
