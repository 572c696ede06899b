//! Instruction Set Architecture definitions.
//!
//! Contains the encodings of the modelled MIPS subset and the logic that turns raw
//! 32-bit words into typed instructions.
//!
//! # Formats
//!
//! * Register form (`opcode == 0`): `add`, `sub`, `and`, `or`, selected by `funct`.
//! * Immediate form: `lw`, `addi`, `ori`, `beq`, selected by `opcode`.

/// Register naming conventions.
pub mod abi;

/// Instruction decoding into typed `Instruction` values.
pub mod decode;

/// Instruction disassembler for tracing and diagnostics.
pub mod disasm;

/// Function field values of register-form instructions.
pub mod funct;

/// Bit field extraction and the typed instruction model.
pub mod instruction;

/// Opcode field values of immediate-form instructions.
pub mod opcodes;

pub use decode::decode;
pub use instruction::{Format, Instruction, InstructionBits, Op};
