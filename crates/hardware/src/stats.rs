//! Simulation statistics collection and reporting.
//!
//! This module tracks performance metrics for the pipeline simulator. It provides:
//! 1. **Cycle and CPI:** Total cycles, retired instructions, and cycles per instruction.
//! 2. **Instruction mix:** Counts by category (ALU, load, branch).
//! 3. **Hazards:** Control-hazard flushes, load-use stalls, and forwarded operands.

use std::fmt;

use crate::core::pipeline::hazards::HazardReport;
use crate::isa::instruction::{Instruction, Op};

/// Simulation statistics structure tracking all performance metrics.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SimStats {
    /// Total cycles elapsed (equals the number of snapshots written).
    pub cycles: u64,
    /// Number of instructions that left the writeback stage.
    pub instructions_retired: u64,

    /// Count of register-form and immediate ALU instructions retired.
    pub inst_alu: u64,
    /// Count of `lw` instructions retired.
    pub inst_load: u64,
    /// Count of `beq` instructions retired.
    pub inst_branch: u64,

    /// Fetched instructions discarded by taken branches.
    pub flushes_control: u64,
    /// Bubbles inserted by load-use stalls.
    pub stalls_data: u64,
    /// Operands forwarded from EX/MEM.
    pub forwards_ex_mem: u64,
    /// Operands forwarded from MEM/WB.
    pub forwards_mem_wb: u64,
}

impl SimStats {
    /// Records an instruction leaving the writeback stage.
    pub fn record_retire(&mut self, inst: &Instruction) {
        let Some(op) = inst.op else {
            return;
        };
        self.instructions_retired += 1;
        match op {
            Op::Lw => self.inst_load += 1,
            Op::Beq => self.inst_branch += 1,
            Op::Add | Op::Sub | Op::And | Op::Or | Op::Addi | Op::Ori => self.inst_alu += 1,
        }
    }

    /// Records the actions of the hazard unit for one cycle.
    pub fn record_hazards(&mut self, report: &HazardReport) {
        if report.branch_taken() {
            self.flushes_control += 1;
        }
        if report.stalled {
            self.stalls_data += 1;
        }
        self.forwards_ex_mem += u64::from(report.forwards_ex_mem);
        self.forwards_mem_wb += u64::from(report.forwards_mem_wb);
    }

    /// Cycles per retired instruction, or `0.0` if nothing retired.
    pub fn cpi(&self) -> f64 {
        if self.instructions_retired == 0 {
            return 0.0;
        }
        self.cycles as f64 / self.instructions_retired as f64
    }
}

impl fmt::Display for SimStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "==========================================================")?;
        writeln!(f, "PIPELINE STATISTICS")?;
        writeln!(f, "==========================================================")?;
        writeln!(f, "  cycles                  {}", self.cycles)?;
        writeln!(f, "  instructions retired    {}", self.instructions_retired)?;
        writeln!(f, "  cpi                     {:.3}", self.cpi())?;
        writeln!(f, "----------------------------------------------------------")?;
        writeln!(f, "  alu                     {}", self.inst_alu)?;
        writeln!(f, "  load                    {}", self.inst_load)?;
        writeln!(f, "  branch                  {}", self.inst_branch)?;
        writeln!(f, "----------------------------------------------------------")?;
        writeln!(f, "  control flushes         {}", self.flushes_control)?;
        writeln!(f, "  load-use stalls         {}", self.stalls_data)?;
        writeln!(f, "  forwards from EX/MEM    {}", self.forwards_ex_mem)?;
        writeln!(f, "  forwards from MEM/WB    {}", self.forwards_mem_wb)?;
        write!(f, "==========================================================")
    }
}
