// ─────────────────────────────────────────────────────────────────────
// Amplitude Amplification Kernel — Core Engine
// (C) 1998-2026 Miroslav Sotek. All rights reserved.
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
#![deny(unsafe_code)]
//! Classical simulation of inversion-about-the-mean amplification, the
//! real-valued analog of a Grover iteration.
//!
//! A uniform vector of `1/√N` amplitudes is driven through repeated
//! cycles of diffusion (reflection about the mean) followed by an oracle
//! sign flip at one marked index. The marked amplitude is observed after
//! every cycle.
//!
//! # Invariants
//!
//! 1. **Validate, then run**: size, marked index, and iteration count are
//!    checked before the state vector is allocated. A rejected run never
//!    produces a partial trajectory.
//!
//! 2. **Two-pass diffusion**: the mean is reduced over the whole vector
//!    before any entry is rewritten. The transform pass reads only that
//!    frozen mean.
//!
//! 3. **Exclusive ownership**: `IterationLoop` owns its `StateVector`;
//!    operators borrow it mutably for the duration of one application.
//!
//! 4. **Determinism**: no randomness, no shared state. Identical inputs
//!    give bit-identical trajectories.

pub mod diffusion;
pub mod iteration;
pub mod oracle;
pub mod reporter;
pub mod state;

pub use diffusion::DiffusionOperator;
pub use iteration::{amplify, IterationLoop};
pub use oracle::OracleMarker;
pub use reporter::{CollectingReporter, LogReporter, Reporter, WriteReporter};
pub use state::StateVector;

pub use amplify_types::{AmplifyConfig, AmplifyError, AmplifyResult, Trajectory};
