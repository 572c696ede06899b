//! Opcode values (bits 31..26).

/// Register-form instructions; the operation is selected by the function field.
pub const OP_REG: u32 = 0b000000;

/// Load word: `lw $rt, imm($rs)`.
pub const OP_LW: u32 = 0b100011;

/// Add immediate: `addi $rt, $rs, imm`.
pub const OP_ADDI: u32 = 0b001000;

/// Or immediate: `ori $rt, $rs, imm`.
pub const OP_ORI: u32 = 0b001101;

/// Branch if equal: `beq $rs, $rt, offset`.
pub const OP_BEQ: u32 = 0b000100;
