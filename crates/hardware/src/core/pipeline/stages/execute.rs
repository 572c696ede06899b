//! Execute (EX) Stage.
//!
//! This module implements the third stage of the instruction pipeline. It computes
//! the ALU result from the (possibly forwarded) ID/EX operands and records the
//! destination register field for EX/MEM.

use crate::common::error::SimError;
use crate::core::pipeline::latches::{DestField, ExMem, IdEx};
use crate::core::pipeline::traits::{PipelineStage, Stage};
use crate::isa::instruction::{Format, Op};

/// Port of the execute stage.
#[derive(Debug)]
pub struct Execute<'a> {
    /// ID/EX latch read by this stage.
    pub input: &'a IdEx,
    /// EX/MEM latch written by this stage.
    pub out: &'a mut ExMem,
}

/// Computes the ALU result of an operation.
///
/// Arithmetic wraps on overflow. `beq` subtracts; the result is informational only,
/// the branch itself is resolved by the hazard unit.
pub fn alu(op: Op, a: i64, b: i64, imm: i64) -> i64 {
    match op {
        Op::Add => a.wrapping_add(b),
        Op::Sub | Op::Beq => a.wrapping_sub(b),
        Op::And => a & b,
        Op::Or => a | b,
        Op::Addi | Op::Lw => a.wrapping_add(imm),
        Op::Ori => a | imm,
    }
}

impl PipelineStage for Execute<'_> {
    const STAGE: Stage = Stage::Execute;

    fn tick(self) -> Result<bool, SimError> {
        let inst = self.input.inst;
        let Some(op) = inst.op else {
            *self.out = ExMem::default();
            return Ok(false);
        };

        let (dest_field, dest) = match op.format() {
            Format::Register => (DestField::Rd, inst.rd),
            Format::Immediate => (DestField::Rt, inst.rt),
        };
        let result = alu(op, self.input.rv1, self.input.rv2, inst.imm);
        *self.out = ExMem {
            inst,
            alu: result,
            write_data: self.input.rv2,
            dest_field,
            dest,
        };
        tracing::trace!(%op, alu = result, "execute");
        Ok(true)
    }
}
