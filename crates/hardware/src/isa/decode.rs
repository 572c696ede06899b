//! MIPS Instruction Decoder.
//!
//! This module turns a raw 32-bit encoding into a typed `Instruction`. It classifies
//! the encoding by its opcode field, resolves the operation through the function or
//! opcode table, extracts the register indices and sign-extends the immediate of
//! immediate-form instructions.

use crate::common::error::{DecodeTable, SimError};
use crate::core::pipeline::signals::ControlSignals;
use crate::isa::funct;
use crate::isa::instruction::{Format, Instruction, InstructionBits, Op};
use crate::isa::opcodes;

/// Decodes a 32-bit instruction encoding.
///
/// The all-zero encoding decodes to the pipeline bubble.
///
/// # Arguments
///
/// * `raw` - The 32-bit instruction encoding to decode
///
/// # Returns
///
/// The decoded instruction, or `SimError::Decode` if the function field (register
/// form) or opcode field (immediate form) matches no known operation.
pub fn decode(raw: u32) -> Result<Instruction, SimError> {
    if raw == 0 {
        return Ok(Instruction::bubble());
    }

    let op = resolve_op(raw)?;
    let (rd, imm) = match op.format() {
        Format::Register => (raw.rd(), 0),
        Format::Immediate => (0, raw.imm16()),
    };

    Ok(Instruction {
        raw,
        op: Some(op),
        rs: raw.rs(),
        rt: raw.rt(),
        rd,
        imm,
        ctrl: ControlSignals::for_op(Some(op)),
    })
}

/// Resolves the operation of a non-zero encoding.
fn resolve_op(raw: u32) -> Result<Op, SimError> {
    let opcode = raw.opcode();
    if opcode == opcodes::OP_REG {
        let value = raw.funct();
        return match value {
            funct::FUNCT_ADD => Ok(Op::Add),
            funct::FUNCT_SUB => Ok(Op::Sub),
            funct::FUNCT_AND => Ok(Op::And),
            funct::FUNCT_OR => Ok(Op::Or),
            _ => Err(SimError::Decode {
                raw,
                table: DecodeTable::Funct,
                value,
            }),
        };
    }

    match opcode {
        opcodes::OP_LW => Ok(Op::Lw),
        opcodes::OP_ADDI => Ok(Op::Addi),
        opcodes::OP_ORI => Ok(Op::Ori),
        opcodes::OP_BEQ => Ok(Op::Beq),
        _ => Err(SimError::Decode {
            raw,
            table: DecodeTable::Opcode,
            value: opcode,
        }),
    }
}
