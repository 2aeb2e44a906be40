// ─────────────────────────────────────────────────────────────────────
// Amplitude Amplification Kernel — Oracle Marker
// ─────────────────────────────────────────────────────────────────────
//! Phase-flip oracle: negates the amplitude at one marked index.

use amplify_types::{AmplifyError, AmplifyResult};

use crate::state::StateVector;

/// Sign flip at a single marked index.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OracleMarker {
    index: usize,
}

impl OracleMarker {
    /// Build a marker for vectors of length `size`.
    ///
    /// Fails with `InvalidIndex` unless `index < size`.
    pub fn new(index: usize, size: usize) -> AmplifyResult<Self> {
        if index >= size {
            return Err(out_of_range(index, size));
        }
        Ok(Self { index })
    }

    pub fn index(&self) -> usize {
        self.index
    }

    /// Negate the marked entry in place; all others are untouched.
    pub fn apply(&self, state: &mut StateVector) -> AmplifyResult<()> {
        let len = state.len();
        let slot = state
            .as_mut_slice()
            .get_mut(self.index)
            .ok_or_else(|| out_of_range(self.index, len))?;
        *slot = -*slot;
        Ok(())
    }
}

fn out_of_range(index: usize, size: usize) -> AmplifyError {
    AmplifyError::InvalidIndex {
        index: i64::try_from(index).unwrap_or(i64::MAX),
        size: i64::try_from(size).unwrap_or(i64::MAX),
    }
}
