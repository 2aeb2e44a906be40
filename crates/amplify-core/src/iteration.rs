// ─────────────────────────────────────────────────────────────────────
// Amplitude Amplification Kernel — Iteration Loop
// ─────────────────────────────────────────────────────────────────────
//! Drives `iterations` cycles of diffusion → oracle over one owned
//! state vector, observing the marked amplitude after each cycle.

use amplify_types::error::validate_run;
use amplify_types::{AmplifyConfig, AmplifyResult, Trajectory};

use crate::diffusion::DiffusionOperator;
use crate::oracle::OracleMarker;
use crate::reporter::Reporter;
use crate::state::StateVector;

/// Sequential amplification run.
///
/// Construction validates every input and allocates the uniform start
/// state. Each cycle depends on the state left by the previous one.
#[derive(Debug, Clone)]
pub struct IterationLoop {
    state: StateVector,
    diffusion: DiffusionOperator,
    oracle: OracleMarker,
    iterations: usize,
    completed: usize,
}

impl IterationLoop {
    /// Validate `(size, iterations, marked_index)` and build the start state.
    ///
    /// Errors, in check order: `InvalidSize`, `InvalidIndex`,
    /// `InvalidIterationCount`.
    pub fn new(size: i64, iterations: i64, marked_index: i64) -> AmplifyResult<Self> {
        let (n, iterations, index) = validate_run(size, iterations, marked_index)?;
        Ok(Self {
            state: StateVector::uniform(n)?,
            diffusion: DiffusionOperator::new(),
            oracle: OracleMarker::new(index, n)?,
            iterations,
            completed: 0,
        })
    }

    pub fn from_config(config: &AmplifyConfig) -> AmplifyResult<Self> {
        Self::new(config.size, config.iterations, config.marked_index)
    }

    pub fn state(&self) -> &StateVector {
        &self.state
    }

    pub fn marked_index(&self) -> usize {
        self.oracle.index()
    }

    pub fn iterations(&self) -> usize {
        self.iterations
    }

    pub fn completed(&self) -> usize {
        self.completed
    }

    pub fn remaining(&self) -> usize {
        self.iterations - self.completed
    }

    /// Perform one diffusion → oracle cycle.
    ///
    /// Returns the marked amplitude afterwards, or `None` once all
    /// cycles have run.
    pub fn step(&mut self) -> AmplifyResult<Option<f64>> {
        if self.completed >= self.iterations {
            return Ok(None);
        }
        let mean = self.diffusion.apply(&mut self.state);
        self.oracle.apply(&mut self.state)?;
        self.completed += 1;

        let marked = self.state.as_slice()[self.oracle.index()];
        log::debug!(
            "cycle {}/{}: mean={mean:.6} marked={marked:.6}",
            self.completed,
            self.iterations
        );
        Ok(Some(marked))
    }

    /// Run every remaining cycle and return the trajectory.
    pub fn run(self) -> AmplifyResult<Trajectory> {
        self.drive(None)
    }

    /// As `run`, notifying `reporter` after each cycle.
    pub fn run_with(self, reporter: &mut dyn Reporter) -> AmplifyResult<Trajectory> {
        self.drive(Some(reporter))
    }

    fn drive(mut self, mut reporter: Option<&mut dyn Reporter>) -> AmplifyResult<Trajectory> {
        log::info!(
            "amplify: N={} iterations={} marked_index={}",
            self.state.len(),
            self.iterations,
            self.oracle.index()
        );
        let mut trajectory =
            Trajectory::with_capacity(self.state.len(), self.oracle.index(), self.remaining());

        while let Some(marked) = self.step()? {
            if let Some(r) = reporter.as_deref_mut() {
                r.observe(self.completed, marked)?;
            }
            trajectory.push(marked);
        }

        if let Some((cycle, p)) = trajectory.peak() {
            log::info!(
                "amplify: done, {} cycles, peak probability {p:.6} at cycle {cycle}",
                trajectory.len()
            );
        }
        Ok(trajectory)
    }
}

/// Simulate `iteration_count` amplification cycles on a uniform vector of
/// `n` amplitudes and return the marked amplitude after each cycle.
///
/// Inputs are validated before any work is done; on error nothing is
/// returned.
pub fn amplify(n: i64, iteration_count: i64, marked_index: i64) -> AmplifyResult<Vec<f64>> {
    IterationLoop::new(n, iteration_count, marked_index)?
        .run()
        .map(Trajectory::into_values)
}
