//! Architectural state of the modelled machine.
//!
//! This module contains the state that instructions read and update:
//! 1. **GPRs:** The general-purpose register file, with register `$0` hard-wired to zero.
//! 2. **Memory:** The word-addressed data memory read by `lw`.

/// General-Purpose Register file implementation.
pub mod gpr;

/// Word-addressed data memory.
pub mod memory;
