//! Instruction Disassembler for the MIPS subset.
//!
//! Converts a 32-bit instruction encoding into a human-readable mnemonic
//! string for debug tracing, logging, and the `disasm` command.
//!
//! # Usage
//!
//! ```
//! use pipesim_core::isa::disasm::disassemble;
//! let text = disassemble(0b001000_00000_00001_0000000000000101);
//! assert_eq!(text, "addi $1, $0, 5");
//! ```

use crate::isa::abi::reg_name;
use crate::isa::decode::decode;
use crate::isa::instruction::Op;

/// Disassembles a 32-bit instruction into a human-readable string.
///
/// Returns `"nop"` for the all-zero bubble and `"unknown"` for encodings
/// the decoder rejects.
pub fn disassemble(raw: u32) -> String {
    let Ok(inst) = decode(raw) else {
        return "unknown".to_string();
    };
    let Some(op) = inst.op else {
        return "nop".to_string();
    };

    let (rs, rt) = (reg_name(inst.rs), reg_name(inst.rt));
    match op {
        Op::Add | Op::Sub | Op::And | Op::Or => {
            format!("{op} {}, {rs}, {rt}", reg_name(inst.rd))
        }
        Op::Addi | Op::Ori => format!("{op} {rt}, {rs}, {}", inst.imm),
        Op::Lw => format!("{op} {rt}, {}({rs})", inst.imm),
        Op::Beq => format!("{op} {rs}, {rt}, {}", inst.imm),
    }
}
