//! Register naming conventions.
//!
//! The modelled machine only names its registers by number (`$0`, `$1`, ...).

/// Register `$0` (hard-wired zero).
pub const REG_ZERO: usize = 0;

/// Returns the assembler name of a register index.
pub fn reg_name(idx: usize) -> String {
    format!("${idx}")
}
