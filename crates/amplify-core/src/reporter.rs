// ─────────────────────────────────────────────────────────────────────
// Amplitude Amplification Kernel — Reporters
// ─────────────────────────────────────────────────────────────────────
//! Observation sinks for the marked amplitude.
//!
//! Reporters receive values in cycle order and never transform them.

use std::io::Write;

use amplify_types::{AmplifyResult, Trajectory};

/// Sink for per-cycle marked amplitudes.
pub trait Reporter {
    /// Called once per cycle, `cycle` starting at 1.
    fn observe(&mut self, cycle: usize, amplitude: f64) -> AmplifyResult<()>;

    /// Replay a finished trajectory in order.
    fn emit(&mut self, trajectory: &Trajectory) -> AmplifyResult<()> {
        for (i, &amplitude) in trajectory.values().iter().enumerate() {
            self.observe(i + 1, amplitude)?;
        }
        Ok(())
    }
}

/// Buffers observed values in memory.
#[derive(Debug, Clone, Default)]
pub struct CollectingReporter {
    cycles: Vec<usize>,
    values: Vec<f64>,
}

impl CollectingReporter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cycles(&self) -> &[usize] {
        &self.cycles
    }

    pub fn values(&self) -> &[f64] {
        &self.values
    }

    pub fn into_values(self) -> Vec<f64> {
        self.values
    }
}

impl Reporter for CollectingReporter {
    fn observe(&mut self, cycle: usize, amplitude: f64) -> AmplifyResult<()> {
        self.cycles.push(cycle);
        self.values.push(amplitude);
        Ok(())
    }
}

/// Emits each value through the `log` facade.
#[derive(Debug, Clone, Copy)]
pub struct LogReporter {
    level: log::Level,
}

impl LogReporter {
    pub fn new(level: log::Level) -> Self {
        Self { level }
    }
}

impl Default for LogReporter {
    fn default() -> Self {
        Self::new(log::Level::Info)
    }
}

impl Reporter for LogReporter {
    fn observe(&mut self, cycle: usize, amplitude: f64) -> AmplifyResult<()> {
        log::log!(self.level, "cycle {cycle}: marked amplitude {amplitude}");
        Ok(())
    }
}

/// Writes one value per line, shortest round-trip `f64` formatting.
pub struct WriteReporter<W: Write> {
    out: W,
}

impl<W: Write> WriteReporter<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> Reporter for WriteReporter<W> {
    fn observe(&mut self, _cycle: usize, amplitude: f64) -> AmplifyResult<()> {
        writeln!(self.out, "{amplitude}")?;
        Ok(())
    }

    fn emit(&mut self, trajectory: &Trajectory) -> AmplifyResult<()> {
        for &amplitude in trajectory.values() {
            writeln!(self.out, "{amplitude}")?;
        }
        self.out.flush()?;
        Ok(())
    }
}
