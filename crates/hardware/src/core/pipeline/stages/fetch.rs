//! Instruction Fetch (IF) Stage.
//!
//! This module implements the first stage of the instruction pipeline. It reads the
//! instruction at the current Program Counter from the instruction store into the
//! IF/ID latch and advances the PC by one word, whether or not an instruction was
//! found there.

use crate::common::constants::{PC_STEP, WORD_BYTES};
use crate::common::error::SimError;
use crate::core::pipeline::latches::IfId;
use crate::core::pipeline::traits::{PipelineStage, Stage};
use crate::isa::disasm::disassemble;

/// Port of the fetch stage.
#[derive(Debug)]
pub struct Fetch<'a> {
    /// Program counter; advanced by one word every cycle.
    pub pc: &'a mut u32,
    /// Instruction store, indexed by `pc / 4`.
    pub program: &'a [u32],
    /// IF/ID latch written by this stage.
    pub out: &'a mut IfId,
}

impl PipelineStage for Fetch<'_> {
    const STAGE: Stage = Stage::Fetch;

    /// Fetches the instruction at the PC.
    ///
    /// # Returns
    ///
    /// `true` if a real instruction was fetched, `false` if the PC is past the end of
    /// the program (IF/ID then holds a bubble).
    fn tick(self) -> Result<bool, SimError> {
        let index = (*self.pc / WORD_BYTES) as usize;
        let fetched = self.program.get(index).copied();

        self.out.inst = fetched.unwrap_or(0);
        *self.pc = self.pc.wrapping_add(PC_STEP);
        self.out.pc = *self.pc;

        if let Some(raw) = fetched {
            tracing::trace!(
                pc = self.out.pc - PC_STEP,
                inst = %disassemble(raw),
                "fetch"
            );
        }
        Ok(fetched.is_some())
    }
}
