// ─────────────────────────────────────────────────────────────────────
// Amplitude Amplification Kernel — Error Hierarchy
// ─────────────────────────────────────────────────────────────────────

use thiserror::Error;

/// Root error type for all kernel failures.
///
/// The first three variants are the run-input errors. They are raised
/// before any state is mutated, so a failed run never yields a partial
/// trajectory.
#[derive(Error, Debug)]
pub enum AmplifyError {
    /// Vector size N was zero or negative.
    #[error("invalid size: N must be > 0, got {size}")]
    InvalidSize { size: i64 },

    /// Marked index outside [0, N).
    #[error("invalid marked index: {index} is outside [0, {size})")]
    InvalidIndex { index: i64, size: i64 },

    /// Negative iteration count.
    #[error("invalid iteration count: must be >= 0, got {count}")]
    InvalidIterationCount { count: i64 },

    /// Configuration could not be parsed.
    #[error("config error: {0}")]
    Config(String),

    /// A reporter sink failed to write.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type AmplifyResult<T> = Result<T, AmplifyError>;

/// Check the three run inputs in fixed order: size, marked index,
/// iteration count.
///
/// Returns the validated `(size, iterations, marked_index)` as `usize`.
pub fn validate_run(
    size: i64,
    iterations: i64,
    marked_index: i64,
) -> AmplifyResult<(usize, usize, usize)> {
    let n = usize::try_from(size)
        .ok()
        .filter(|&n| n > 0)
        .ok_or(AmplifyError::InvalidSize { size })?;
    let idx = usize::try_from(marked_index)
        .ok()
        .filter(|&i| i < n)
        .ok_or(AmplifyError::InvalidIndex {
            index: marked_index,
            size,
        })?;
    let k = usize::try_from(iterations)
        .map_err(|_| AmplifyError::InvalidIterationCount { count: iterations })?;
    Ok((n, k, idx))
}
