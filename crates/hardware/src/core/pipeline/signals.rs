//! Pipeline control signals.
//!
//! This module defines the 9-bit control vector produced by the decoder. It performs:
//! 1. **Signal Generation:** Derives the vector from the decoded operation.
//! 2. **Encoding:** Packs the vector MSB-first as
//!    `RegDst, ALUOp1, ALUOp0, ALUSrc, Branch, MemRead, MemWrite, RegWrite, MemtoReg`.
//! 3. **Display:** Renders the suffix of the vector each latch carries (all nine bits in
//!    ID/EX, the last five in EX/MEM, the last two in MEM/WB).

use crate::common::constants::CONTROL_SIGNAL_BITS;
use crate::isa::instruction::Op;

/// ALU operation class for register-form instructions.
pub const ALU_OP_FUNCT: u8 = 0b10;
/// ALU operation class for `beq` (subtract).
pub const ALU_OP_SUB: u8 = 0b01;
/// ALU operation class for `ori` (bitwise or).
pub const ALU_OP_OR: u8 = 0b11;
/// ALU operation class for `lw` and `addi` (add).
pub const ALU_OP_ADD: u8 = 0b00;

/// Control signals generated by the decode stage.
///
/// These signals travel with the instruction through the pipeline and gate the
/// datapath actions of the later stages.
#[allow(clippy::struct_excessive_bools)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ControlSignals {
    /// Destination is `rd` (register form) rather than `rt`.
    pub reg_dst: bool,
    /// Two-bit ALU operation class.
    pub alu_op: u8,
    /// Second ALU operand is the immediate rather than `rt`.
    pub alu_src: bool,
    /// Instruction is a conditional branch.
    pub branch: bool,
    /// Instruction reads data memory.
    pub mem_read: bool,
    /// Instruction writes data memory.
    pub mem_write: bool,
    /// Instruction writes a register in writeback.
    pub reg_write: bool,
    /// Writeback value comes from memory rather than the ALU.
    pub mem_to_reg: bool,
}

impl ControlSignals {
    /// Derives the control vector for an operation.
    ///
    /// `None` (a bubble) yields the all-zero vector.
    pub const fn for_op(op: Option<Op>) -> Self {
        let Some(op) = op else {
            return Self {
                reg_dst: false,
                alu_op: ALU_OP_ADD,
                alu_src: false,
                branch: false,
                mem_read: false,
                mem_write: false,
                reg_write: false,
                mem_to_reg: false,
            };
        };
        match op {
            Op::Add | Op::Sub | Op::And | Op::Or => Self {
                reg_dst: true,
                alu_op: ALU_OP_FUNCT,
                alu_src: false,
                branch: false,
                mem_read: false,
                mem_write: false,
                reg_write: true,
                mem_to_reg: false,
            },
            Op::Lw => Self {
                reg_dst: false,
                alu_op: ALU_OP_ADD,
                alu_src: true,
                branch: false,
                mem_read: true,
                mem_write: false,
                reg_write: true,
                mem_to_reg: true,
            },
            Op::Beq => Self {
                reg_dst: false,
                alu_op: ALU_OP_SUB,
                alu_src: false,
                branch: true,
                mem_read: false,
                mem_write: false,
                reg_write: false,
                mem_to_reg: false,
            },
            Op::Addi => Self {
                reg_dst: false,
                alu_op: ALU_OP_ADD,
                alu_src: true,
                branch: false,
                mem_read: false,
                mem_write: false,
                reg_write: true,
                mem_to_reg: false,
            },
            Op::Ori => Self {
                reg_dst: false,
                alu_op: ALU_OP_OR,
                alu_src: true,
                branch: false,
                mem_read: false,
                mem_write: false,
                reg_write: true,
                mem_to_reg: false,
            },
        }
    }

    /// Packs the vector into its low nine bits, `RegDst` most significant.
    pub fn to_bits(self) -> u16 {
        let flags = [
            self.reg_dst,
            self.alu_op & 0b10 != 0,
            self.alu_op & 0b01 != 0,
            self.alu_src,
            self.branch,
            self.mem_read,
            self.mem_write,
            self.reg_write,
            self.mem_to_reg,
        ];
        flags
            .iter()
            .fold(0, |acc, &bit| (acc << 1) | u16::from(bit))
    }

    /// Renders the vector as a bit string, dropping the first `from` signals.
    ///
    /// `bit_string(0)` is the full nine-character vector.
    pub fn bit_string(self, from: usize) -> String {
        let full = format!(
            "{:0width$b}",
            self.to_bits(),
            width = CONTROL_SIGNAL_BITS
        );
        full.get(from..).unwrap_or_default().to_string()
    }
}
