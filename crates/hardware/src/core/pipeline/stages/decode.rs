//! Instruction Decode (ID) Stage.
//!
//! This module implements the second stage of the instruction pipeline. It decodes
//! the raw encoding held in IF/ID, reads the two source registers and latches the
//! operands, the sign-extended immediate and the PC into ID/EX.

use crate::common::error::SimError;
use crate::core::arch::gpr::RegisterFile;
use crate::core::pipeline::latches::{IdEx, IfId};
use crate::core::pipeline::traits::{PipelineStage, Stage};
use crate::isa::decode::decode;

/// Port of the decode stage.
#[derive(Debug)]
pub struct Decode<'a> {
    /// IF/ID latch read by this stage.
    pub input: &'a IfId,
    /// Register file the source operands are read from.
    pub regs: &'a RegisterFile,
    /// ID/EX latch written by this stage.
    pub out: &'a mut IdEx,
}

impl PipelineStage for Decode<'_> {
    const STAGE: Stage = Stage::Decode;

    /// Decodes the IF/ID instruction and reads its operands.
    ///
    /// # Errors
    ///
    /// Returns `SimError::Decode` for unknown encodings and
    /// `SimError::RegisterIndexInvalid` if a source register is beyond the file.
    fn tick(self) -> Result<bool, SimError> {
        let inst = decode(self.input.inst)?;

        if inst.is_bubble() {
            *self.out = IdEx {
                pc: self.input.pc,
                ..IdEx::default()
            };
            return Ok(false);
        }

        let rv1 = self.regs.read(inst.rs)?;
        let rv2 = self.regs.read(inst.rt)?;
        *self.out = IdEx {
            pc: self.input.pc,
            inst,
            rv1,
            rv2,
            imm: inst.imm,
        };
        tracing::trace!(op = ?inst.op, rs = inst.rs, rt = inst.rt, rv1, rv2, "decode");
        Ok(true)
    }
}
