//! Five-stage MIPS pipeline simulator library.
//!
//! This crate implements a cycle-accurate model of the textbook five-stage pipeline
//! (Fetch, Decode, Execute, Memory, Writeback) running a minimal MIPS subset
//! (`add`, `sub`, `and`, `or`, `lw`, `addi`, `ori`, `beq`). It provides:
//! 1. **Core:** Register file, data memory, inter-stage latches, the five stages and the
//!    hazard unit (branch flush, operand forwarding, load-use stall).
//! 2. **ISA:** Field extraction, decoding into typed instructions, and disassembly.
//! 3. **Simulation:** Program loading, the run loop, and the per-cycle snapshot report.
//! 4. **Support:** Configuration, error types, and run statistics.

/// Common types (errors, constants).
pub mod common;
/// Simulator configuration (initial register and memory images, run limits).
pub mod config;
/// CPU core (architectural state, pipeline, clock driver).
pub mod core;
/// Instruction set (field extraction, decode, disassembly).
pub mod isa;
/// Program loader, run loop, and snapshot rendering.
pub mod sim;
/// Simulation statistics collection and reporting.
pub mod stats;

/// Root configuration type; use `Config::default()` or `Config::from_json`.
pub use crate::config::Config;
/// Main CPU type; holds architectural state, latches and stats.
pub use crate::core::Cpu;
/// Top-level simulator: owns the CPU and writes per-cycle snapshots.
pub use crate::sim::Simulator;
