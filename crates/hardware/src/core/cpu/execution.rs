//! Main Execution Loop.
//!
//! This module implements the clock of the CPU. Each cycle it performs the following:
//! 1. **Hazard Resolution:** Runs the hazard unit on the latches the previous cycle left.
//! 2. **Stage Execution:** Runs Writeback, Memory, Execute, Decode, then Fetch, so every
//!    latch is consumed before its producer overwrites it.
//! 3. **Termination:** Detects the cycle in which no stage did any work.
//! 4. **Observability:** Records statistics and attaches cycle, stage and instruction
//!    context to faults.

use super::Cpu;
use crate::common::error::RunError;
use crate::core::pipeline::hazards;
use crate::core::pipeline::stages::{Decode, Execute, Fetch, Memory, Writeback};
use crate::core::pipeline::traits::PipelineStage;

/// Ticks one stage, wrapping any fault with the cycle, stage and instruction encoding.
fn run_stage<S: PipelineStage>(cycle: u64, raw: u32, port: S) -> Result<bool, RunError> {
    port.tick().map_err(|source| RunError::Fault {
        cycle,
        stage: S::STAGE,
        raw,
        source,
    })
}

impl Cpu {
    /// Advances the pipeline by one clock cycle.
    ///
    /// # Returns
    ///
    /// `Ok(true)` if any stage did work (the cycle counter was incremented), or
    /// `Ok(false)` if the pipeline has drained (the counter is left unchanged).
    ///
    /// # Errors
    ///
    /// Returns `RunError::Fault` if a stage faults. The run cannot be continued.
    pub fn tick(&mut self) -> Result<bool, RunError> {
        let cycle = self.cycle + 1;
        let report = hazards::resolve(
            &mut self.pc,
            &mut self.if_id,
            &mut self.id_ex,
            &self.ex_mem,
            &self.mem_wb,
        );
        let retiring = self.mem_wb.inst;

        let mut busy = false;
        busy |= run_stage(
            cycle,
            self.mem_wb.inst.raw,
            Writeback {
                input: &self.mem_wb,
                regs: &mut self.regs,
            },
        )?;
        busy |= run_stage(
            cycle,
            self.ex_mem.inst.raw,
            Memory {
                input: &self.ex_mem,
                mem: &self.mem,
                out: &mut self.mem_wb,
            },
        )?;
        busy |= run_stage(
            cycle,
            self.id_ex.inst.raw,
            Execute {
                input: &self.id_ex,
                out: &mut self.ex_mem,
            },
        )?;
        busy |= run_stage(
            cycle,
            self.if_id.inst,
            Decode {
                input: &self.if_id,
                regs: &self.regs,
                out: &mut self.id_ex,
            },
        )?;
        busy |= run_stage(
            cycle,
            0,
            Fetch {
                pc: &mut self.pc,
                program: &self.program,
                out: &mut self.if_id,
            },
        )?;

        if !busy {
            tracing::info!(cycles = self.cycle, "pipeline drained");
            return Ok(false);
        }

        self.cycle = cycle;
        self.stats.cycles = cycle;
        self.stats.record_hazards(&report);
        self.stats.record_retire(&retiring);
        tracing::debug!(cycle, pc = self.pc, "cycle complete");
        Ok(true)
    }
}
