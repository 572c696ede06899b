//! Writeback (WB) Stage.
//!
//! This module implements the final stage of the instruction pipeline. It commits
//! the MEM/WB result to the register file: the loaded word for `lw`, the ALU result
//! for every other register-writing instruction. Branches retire without a write.

use crate::common::error::SimError;
use crate::core::arch::gpr::RegisterFile;
use crate::core::pipeline::latches::MemWb;
use crate::core::pipeline::traits::{PipelineStage, Stage};

/// Port of the writeback stage.
#[derive(Debug)]
pub struct Writeback<'a> {
    /// MEM/WB latch read by this stage.
    pub input: &'a MemWb,
    /// Register file written by this stage.
    pub regs: &'a mut RegisterFile,
}

impl PipelineStage for Writeback<'_> {
    const STAGE: Stage = Stage::Writeback;

    /// Retires the MEM/WB instruction.
    ///
    /// # Returns
    ///
    /// `true` for any real instruction (including `beq`), `false` for a bubble.
    ///
    /// # Errors
    ///
    /// Returns `SimError::RegisterIndexInvalid` if the destination is beyond the file.
    fn tick(self) -> Result<bool, SimError> {
        let inst = self.input.inst;
        if inst.is_bubble() {
            return Ok(false);
        }
        if !inst.ctrl.reg_write {
            return Ok(true);
        }

        let dest = inst.dest_reg();
        let data = self.input.result();
        self.regs.write(dest, data)?;
        tracing::trace!(reg = dest, data, "writeback");
        Ok(true)
    }
}
