// ─────────────────────────────────────────────────────────────────────
// Amplitude Amplification Kernel — Types
// (C) 1998-2026 Miroslav Sotek. All rights reserved.
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
#![deny(unsafe_code)]
//! Type definitions, configuration, and error hierarchy for the
//! inversion-about-the-mean amplification kernel.

pub mod config;
pub mod error;
pub mod trajectory;

pub use config::AmplifyConfig;
pub use error::{AmplifyError, AmplifyResult};
pub use trajectory::Trajectory;
