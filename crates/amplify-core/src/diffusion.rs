// ─────────────────────────────────────────────────────────────────────
// Amplitude Amplification Kernel — Diffusion Operator
// ─────────────────────────────────────────────────────────────────────
//! Inversion about the mean:
//!
//!   μ = (1/N) Σ_j x_j
//!   x_i ← 2μ − x_i
//!
//! Two passes. The reduction finishes before the transform starts, and
//! the transform reads only the frozen μ. Folding the mean into the
//! transform loop would see partially rewritten entries.

use crate::state::StateVector;

/// Reflection of every amplitude about the vector's current mean.
#[derive(Debug, Clone, Copy, Default)]
pub struct DiffusionOperator;

impl DiffusionOperator {
    pub fn new() -> Self {
        Self
    }

    /// Reflect `state` about its mean in place. Returns the mean used.
    pub fn apply(&self, state: &mut StateVector) -> f64 {
        // Pass 1: reduction over the untouched vector.
        let mean = state.mean();
        let twice_mean = 2.0 * mean;

        // Pass 2: transform.
        for x in state.as_mut_slice() {
            *x = twice_mean - *x;
        }
        mean
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_close(a: &[f64], b: &[f64]) {
        assert_eq!(a.len(), b.len());
        for (i, (x, y)) in a.iter().zip(b).enumerate() {
            assert!((x - y).abs() < 1e-12, "entry {i}: {x} vs {y}");
        }
    }

    #[test]
    fn test_uniform_is_fixed_point() {
        let mut s = StateVector::uniform(16).unwrap();
        let mean = DiffusionOperator.apply(&mut s);
        assert_eq!(mean, 0.25);
        assert!(s.as_slice().iter().all(|&x| x == 0.25));
    }

    #[test]
    fn test_reflects_about_pre_transform_mean() {
        // μ = 0.25; a running mean would drift after entry 0 is rewritten.
        let mut s = StateVector::from_amplitudes(vec![-0.5, 0.5, 0.5, 0.5]).unwrap();
        let mean = DiffusionOperator.apply(&mut s);
        assert_eq!(mean, 0.25);
        assert_eq!(s.as_slice(), &[1.0, 0.0, 0.0, 0.0]);
    }

    #[test]
    fn test_involution() {
        let original = vec![0.3, -1.7, 2.25, 0.0, 5.5, -0.125, 9.0];
        let mut s = StateVector::from_amplitudes(original.clone()).unwrap();
        DiffusionOperator.apply(&mut s);
        DiffusionOperator.apply(&mut s);
        assert_close(s.as_slice(), &original);
    }

    #[test]
    fn test_involution_many_shapes() {
        for n in 1..=12 {
            let original: Vec<f64> = (0..n).map(|i| ((i * 7 + 3) % 11) as f64 - 4.5).collect();
            let mut s = StateVector::from_amplitudes(original.clone()).unwrap();
            DiffusionOperator.apply(&mut s);
            DiffusionOperator.apply(&mut s);
            assert_close(s.as_slice(), &original);
        }
    }

    #[test]
    fn test_sum_invariance() {
        let mut s = StateVector::from_amplitudes(vec![1.5, -2.0, 0.75, 3.0, -0.25]).unwrap();
        let before = s.sum();
        for _ in 0..5 {
            DiffusionOperator.apply(&mut s);
            assert!((s.sum() - before).abs() < 1e-12);
        }
    }

    #[test]
    fn test_single_entry_unchanged() {
        let mut s = StateVector::from_amplitudes(vec![-0.8]).unwrap();
        DiffusionOperator.apply(&mut s);
        assert_eq!(s.as_slice(), &[-0.8]);
    }

    #[test]
    fn test_preserves_norm() {
        let mut s = StateVector::from_amplitudes(vec![0.6, -0.8, 0.0]).unwrap();
        let before = s.norm_squared();
        DiffusionOperator.apply(&mut s);
        assert!((s.norm_squared() - before).abs() < 1e-12);
    }
}
