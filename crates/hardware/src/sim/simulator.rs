//! Simulator: owns the CPU and drives it to completion.
//!
//! The simulator ticks the CPU until the pipeline drains, writing one snapshot per
//! completed cycle to a caller-supplied sink, and enforces the optional cycle limit.

use std::io::Write;

use crate::common::error::{RunError, SimError};
use crate::config::Config;
use crate::core::Cpu;
use crate::sim::snapshot::Snapshot;
use crate::stats::SimStats;

/// Top-level simulator: CPU state plus run limits.
#[derive(Clone, Debug)]
pub struct Simulator {
    /// CPU architectural and pipeline state.
    pub cpu: Cpu,
    /// Abort the run after this many cycles, if set.
    pub max_cycles: Option<u64>,
}

impl Simulator {
    /// Creates a simulator with an empty program.
    ///
    /// # Errors
    ///
    /// Returns `SimError::InvalidConfig` if the configuration fails validation.
    pub fn new(config: &Config) -> Result<Self, SimError> {
        config.validate()?;
        Ok(Self {
            cpu: Cpu::new(config),
            max_cycles: config.max_cycles,
        })
    }

    /// Creates a simulator and loads `program` into it.
    ///
    /// # Errors
    ///
    /// Returns `SimError::InvalidConfig` if the configuration fails validation.
    pub fn with_program(config: &Config, program: &[u32]) -> Result<Self, SimError> {
        let mut sim = Self::new(config)?;
        sim.cpu.load_program(program);
        Ok(sim)
    }

    /// Advances the simulator by one clock cycle.
    ///
    /// # Errors
    ///
    /// Propagates the fault of the failing stage.
    pub fn tick(&mut self) -> Result<bool, RunError> {
        self.cpu.tick()
    }

    /// Runs until the pipeline drains, writing one snapshot per cycle to `out`.
    ///
    /// # Returns
    ///
    /// The statistics of the completed run.
    ///
    /// # Errors
    ///
    /// * `RunError::Fault` if a stage faults; snapshots of earlier cycles have
    ///   already been written.
    /// * `RunError::Sink` if `out` rejects a write.
    /// * `RunError::CycleLimit` if the pipeline is still busy after `max_cycles`.
    pub fn run<W: Write>(&mut self, out: &mut W) -> Result<SimStats, RunError> {
        tracing::info!(
            instructions = self.cpu.program.len(),
            max_cycles = ?self.max_cycles,
            "starting run"
        );
        while self.cpu.tick()? {
            let cycle = self.cpu.cycle;
            write!(out, "{}", Snapshot(&self.cpu))
                .map_err(|source| RunError::Sink { cycle, source })?;
            if let Some(limit) = self.max_cycles {
                if cycle >= limit && !self.cpu.is_drained() {
                    return Err(RunError::CycleLimit { limit });
                }
            }
        }
        out.flush().map_err(|source| RunError::Sink {
            cycle: self.cpu.cycle,
            source,
        })?;
        Ok(self.cpu.stats.clone())
    }
}
