// ─────────────────────────────────────────────────────────────────────
// Amplitude Amplification Kernel — Run Configuration
// ─────────────────────────────────────────────────────────────────────

use serde::{Deserialize, Serialize};

use crate::error::{validate_run, AmplifyError, AmplifyResult};

/// Parameters of one amplification run.
///
/// Integers are signed so that malformed input (negative sizes, indices,
/// or counts) survives deserialization and is rejected by `validate()`
/// with the matching error kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AmplifyConfig {
    /// Number of amplitudes N. Must be > 0.
    /// Default: 16.
    pub size: i64,

    /// Diffusion + oracle cycles to perform. Must be >= 0.
    /// Default: 20.
    pub iterations: i64,

    /// Index whose sign the oracle flips. Must lie in [0, size).
    /// Default: 3.
    pub marked_index: i64,
}

impl Default for AmplifyConfig {
    fn default() -> Self {
        Self {
            size: 16,
            iterations: 20,
            marked_index: 3,
        }
    }
}

impl AmplifyConfig {
    pub fn new(size: i64, iterations: i64, marked_index: i64) -> Self {
        Self {
            size,
            iterations,
            marked_index,
        }
    }

    /// Validate configuration parameters.
    pub fn validate(&self) -> AmplifyResult<()> {
        validate_run(self.size, self.iterations, self.marked_index).map(|_| ())
    }

    /// Load from JSON string. Missing fields take their defaults.
    pub fn from_json(json: &str) -> AmplifyResult<Self> {
        serde_json::from_str(json)
            .map_err(|e| AmplifyError::Config(format!("JSON parse error: {e}")))
    }

    /// Serialize to a JSON string.
    pub fn to_json(&self) -> AmplifyResult<String> {
        serde_json::to_string(self)
            .map_err(|e| AmplifyError::Config(format!("JSON encode error: {e}")))
    }
}
