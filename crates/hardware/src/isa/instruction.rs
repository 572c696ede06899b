//! Instruction encoding and the typed instruction model.
//!
//! Provides bit extraction for the MIPS instruction fields and the `Instruction`
//! value that flows through the pipeline latches.
//!
//! ```text
//! R-form: opcode[31:26] | rs[25:21] | rt[20:16] | rd[15:11] | shamt[10:6] | funct[5:0]
//! I-form: opcode[31:26] | rs[25:21] | rt[20:16] | imm[15:0]
//! ```

use std::fmt;

use crate::core::pipeline::signals::ControlSignals;

/// Bit shift of the opcode field.
const OPCODE_SHIFT: u32 = 26;
/// Bit mask for 6-bit fields (opcode, funct).
const FIELD6_MASK: u32 = 0x3F;
/// Bit shift of the `rs` field.
const RS_SHIFT: u32 = 21;
/// Bit shift of the `rt` field.
const RT_SHIFT: u32 = 16;
/// Bit shift of the `rd` field.
const RD_SHIFT: u32 = 11;
/// Bit mask for 5-bit register fields.
const REG_MASK: u32 = 0x1F;
/// Bit mask for the 16-bit immediate field.
const IMM_MASK: u32 = 0xFFFF;

/// Trait for extracting instruction fields from encoded instructions.
pub trait InstructionBits {
    /// Extracts the opcode field (bits 31-26).
    fn opcode(&self) -> u32;

    /// Extracts the first source register field (bits 25-21).
    fn rs(&self) -> usize;

    /// Extracts the second source register field (bits 20-16).
    ///
    /// This is the destination of immediate-form instructions.
    fn rt(&self) -> usize;

    /// Extracts the destination register field of register-form instructions (bits 15-11).
    fn rd(&self) -> usize;

    /// Extracts the function field (bits 5-0).
    fn funct(&self) -> u32;

    /// Extracts the 16-bit immediate and sign-extends it.
    fn imm16(&self) -> i64;
}

impl InstructionBits for u32 {
    #[inline(always)]
    fn opcode(&self) -> u32 {
        (self >> OPCODE_SHIFT) & FIELD6_MASK
    }

    #[inline(always)]
    fn rs(&self) -> usize {
        ((self >> RS_SHIFT) & REG_MASK) as usize
    }

    #[inline(always)]
    fn rt(&self) -> usize {
        ((self >> RT_SHIFT) & REG_MASK) as usize
    }

    #[inline(always)]
    fn rd(&self) -> usize {
        ((self >> RD_SHIFT) & REG_MASK) as usize
    }

    #[inline(always)]
    fn funct(&self) -> u32 {
        self & FIELD6_MASK
    }

    #[inline(always)]
    fn imm16(&self) -> i64 {
        i64::from((self & IMM_MASK) as u16 as i16)
    }
}

/// Encoding format, selected by whether the opcode field is zero.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Format {
    /// Register form: three register operands, operation in the function field.
    Register,
    /// Immediate form: two registers and a 16-bit immediate.
    Immediate,
}

/// Operations of the modelled instruction set.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Op {
    /// `rd = rs + rt`.
    Add,
    /// `rd = rs - rt`.
    Sub,
    /// `rd = rs & rt`.
    And,
    /// `rd = rs | rt`.
    Or,
    /// `rt = mem[(rs + imm) / 4]`.
    Lw,
    /// `rt = rs + imm`.
    Addi,
    /// `rt = rs | imm`.
    Ori,
    /// Branch to `pc + 4 + imm * 4` when `rs == rt`.
    Beq,
}

impl Op {
    /// Returns the encoding format of the operation.
    pub const fn format(self) -> Format {
        match self {
            Self::Add | Self::Sub | Self::And | Self::Or => Format::Register,
            Self::Lw | Self::Addi | Self::Ori | Self::Beq => Format::Immediate,
        }
    }

    /// Returns the assembler mnemonic.
    pub const fn mnemonic(self) -> &'static str {
        match self {
            Self::Add => "add",
            Self::Sub => "sub",
            Self::And => "and",
            Self::Or => "or",
            Self::Lw => "lw",
            Self::Addi => "addi",
            Self::Ori => "ori",
            Self::Beq => "beq",
        }
    }
}

impl fmt::Display for Op {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.mnemonic())
    }
}

/// A decoded instruction.
///
/// Produced by [`crate::isa::decode`]. The all-zero encoding is the pipeline bubble:
/// it has no operation, all fields zero, and no control signals asserted.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Instruction {
    /// The raw 32-bit encoding.
    pub raw: u32,
    /// The resolved operation; `None` only for bubbles.
    pub op: Option<Op>,
    /// First source register.
    pub rs: usize,
    /// Second source register (destination of immediate-form instructions).
    pub rt: usize,
    /// Destination register of register-form instructions; zero otherwise.
    pub rd: usize,
    /// Sign-extended immediate of immediate-form instructions; zero otherwise.
    pub imm: i64,
    /// Control signals derived from the operation.
    pub ctrl: ControlSignals,
}

impl Instruction {
    /// Returns the pipeline bubble.
    pub fn bubble() -> Self {
        Self::default()
    }

    /// Returns `true` for the all-zero bubble encoding.
    #[inline]
    pub fn is_bubble(&self) -> bool {
        self.op.is_none()
    }

    /// Returns the encoding format, or `None` for a bubble.
    pub fn kind(&self) -> Option<Format> {
        self.op.map(Op::format)
    }

    /// Returns `true` if the instruction is the given operation.
    #[inline]
    pub fn is(&self, op: Op) -> bool {
        self.op == Some(op)
    }

    /// Returns the register this instruction eventually writes.
    ///
    /// `rd` for register-form, `rt` for immediate-form (including `beq`, whose
    /// control signals never enable the write), zero for bubbles.
    pub fn dest_reg(&self) -> usize {
        match self.kind() {
            Some(Format::Register) => self.rd,
            Some(Format::Immediate) => self.rt,
            None => 0,
        }
    }

    /// Returns the register this instruction writes back, if any.
    ///
    /// `None` for bubbles, branches, and writes to the zero register.
    pub fn writeback_reg(&self) -> Option<usize> {
        let dest = self.dest_reg();
        (self.ctrl.reg_write && dest != 0).then_some(dest)
    }
}
