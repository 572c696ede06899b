//! Memory Access (MEM) Stage.
//!
//! This module implements the fourth stage of the instruction pipeline. It passes
//! the instruction and ALU result through to MEM/WB and, for `lw`, loads the word
//! at the computed address.

use crate::common::error::SimError;
use crate::core::arch::memory::DataMemory;
use crate::core::pipeline::latches::{ExMem, MemWb};
use crate::core::pipeline::traits::{PipelineStage, Stage};

/// Port of the memory stage.
#[derive(Debug)]
pub struct Memory<'a> {
    /// EX/MEM latch read by this stage.
    pub input: &'a ExMem,
    /// Data memory read by loads.
    pub mem: &'a DataMemory,
    /// MEM/WB latch written by this stage.
    pub out: &'a mut MemWb,
}

impl PipelineStage for Memory<'_> {
    const STAGE: Stage = Stage::Memory;

    /// Performs the memory access of the EX/MEM instruction.
    ///
    /// # Errors
    ///
    /// Returns `SimError::MemoryOutOfRange` if a load address falls outside data memory.
    fn tick(self) -> Result<bool, SimError> {
        let inst = self.input.inst;
        let read_data = if inst.ctrl.mem_read {
            let word = self.mem.load(self.input.alu)?;
            tracing::trace!(addr = self.input.alu, word, "load");
            word
        } else {
            0
        };

        *self.out = MemWb {
            inst,
            alu: self.input.alu,
            read_data,
        };
        Ok(!inst.is_bubble())
    }
}
