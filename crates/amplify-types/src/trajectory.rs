// ─────────────────────────────────────────────────────────────────────
// Amplitude Amplification Kernel — Trajectory
// ─────────────────────────────────────────────────────────────────────

use serde::{Deserialize, Serialize};

/// Marked amplitude after each diffusion + oracle cycle, in cycle order.
///
/// `amplitudes[k]` is the value observed after cycle `k + 1`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Trajectory {
    /// Vector size N of the run that produced this trajectory.
    pub size: usize,
    /// Index the oracle flipped.
    pub marked_index: usize,
    /// Observed marked amplitudes.
    pub amplitudes: Vec<f64>,
}

impl Trajectory {
    pub fn new(size: usize, marked_index: usize) -> Self {
        Self {
            size,
            marked_index,
            amplitudes: Vec::new(),
        }
    }

    pub fn with_capacity(size: usize, marked_index: usize, iterations: usize) -> Self {
        Self {
            size,
            marked_index,
            amplitudes: Vec::with_capacity(iterations),
        }
    }

    pub fn push(&mut self, amplitude: f64) {
        self.amplitudes.push(amplitude);
    }

    pub fn values(&self) -> &[f64] {
        &self.amplitudes
    }

    pub fn into_values(self) -> Vec<f64> {
        self.amplitudes
    }

    pub fn len(&self) -> usize {
        self.amplitudes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.amplitudes.is_empty()
    }

    pub fn last(&self) -> Option<f64> {
        self.amplitudes.last().copied()
    }

    /// Measurement probability of the marked entry after each cycle.
    pub fn probabilities(&self) -> Vec<f64> {
        self.amplitudes.iter().map(|a| a * a).collect()
    }

    /// Cycle number (1-based) and probability of the first maximum.
    pub fn peak(&self) -> Option<(usize, f64)> {
        self.amplitudes
            .iter()
            .map(|a| a * a)
            .enumerate()
            .fold(None, |best, (i, p)| match best {
                Some((_, bp)) if bp >= p => best,
                _ => Some((i + 1, p)),
            })
    }
}
