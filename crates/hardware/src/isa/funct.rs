//! Function field values (bits 5..0) of register-form instructions.

/// `add $rd, $rs, $rt`.
pub const FUNCT_ADD: u32 = 0b100000;

/// `sub $rd, $rs, $rt`.
pub const FUNCT_SUB: u32 = 0b100010;

/// `and $rd, $rs, $rt`.
pub const FUNCT_AND: u32 = 0b100100;

/// `or $rd, $rs, $rt`.
pub const FUNCT_OR: u32 = 0b100101;
