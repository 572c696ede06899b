//! Core processor implementation.
//!
//! This module contains the pipelined CPU: the architectural state it updates, the
//! five pipeline stages with their latches and hazard unit, and the clock driver
//! that advances them one cycle at a time.

/// Architectural state (register file, data memory).
pub mod arch;

/// CPU core implementation and the per-cycle clock driver.
pub mod cpu;

/// Instruction pipeline implementation (stages, latches, hazards, signals).
pub mod pipeline;

pub use self::cpu::Cpu;
