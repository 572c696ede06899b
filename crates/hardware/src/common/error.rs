//! Simulation fault and run abort definitions.
//!
//! This module defines the error handling for the simulator. It provides:
//! 1. **Faults:** `SimError`, raised by a single operation (decode, memory access,
//!    register access, program parsing, configuration).
//! 2. **Run Aborts:** `RunError`, raised by the clock driver, which attaches the cycle
//!    number, the failing stage and the offending instruction to a fault.
//!
//! Every fault is fatal for the current run. Writes to register 0 are a defined
//! no-op, never an error.

use std::fmt;
use std::io;

use thiserror::Error;

use crate::core::pipeline::traits::Stage;

/// Lookup table consulted while resolving an instruction's operation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DecodeTable {
    /// The 6-bit function field of a register-form instruction.
    Funct,
    /// The 6-bit opcode field of an immediate-form instruction.
    Opcode,
}

impl fmt::Display for DecodeTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Funct => write!(f, "function"),
            Self::Opcode => write!(f, "opcode"),
        }
    }
}

/// A fault raised by a single simulator operation.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum SimError {
    /// The encoding matches no entry of the function or opcode table.
    #[error("cannot decode {raw:#034b}: no {table} entry for {value:#08b}")]
    Decode {
        /// The raw 32-bit encoding.
        raw: u32,
        /// Which table missed.
        table: DecodeTable,
        /// The 6-bit value that was looked up.
        value: u32,
    },

    /// A load address falls outside data memory.
    #[error("data memory address {addr} is out of range ({words} words)")]
    MemoryOutOfRange {
        /// Byte address computed by the ALU.
        addr: i64,
        /// Number of words in data memory.
        words: usize,
    },

    /// A decoded register index exceeds the register file.
    #[error("register ${index} does not exist ({size} registers)")]
    RegisterIndexInvalid {
        /// The register index from the instruction.
        index: usize,
        /// Number of registers in the file.
        size: usize,
    },

    /// A program line is not a 32-digit binary string.
    #[error("line {line}: expected 32 binary digits, found {text:?}")]
    MalformedInstruction {
        /// One-based line number in the program text.
        line: usize,
        /// The offending text (trimmed).
        text: String,
    },

    /// The configuration could not be parsed or describes an impossible machine.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}

/// A fatal abort of a simulation run.
#[derive(Debug, Error)]
pub enum RunError {
    /// A stage faulted while processing an instruction.
    #[error("cycle {cycle}: {stage} stage faulted on {raw:032b}: {source}")]
    Fault {
        /// The cycle being computed when the fault occurred.
        cycle: u64,
        /// The stage that raised the fault.
        stage: Stage,
        /// Encoding of the instruction the stage was processing.
        raw: u32,
        /// The underlying fault.
        source: SimError,
    },

    /// The snapshot sink rejected a write.
    #[error("cycle {cycle}: failed to write snapshot: {source}")]
    Sink {
        /// The cycle whose snapshot could not be written.
        cycle: u64,
        /// The I/O error reported by the sink.
        source: io::Error,
    },

    /// The pipeline was still busy after the configured cycle limit.
    #[error("pipeline did not drain within {limit} cycles")]
    CycleLimit {
        /// The configured limit.
        limit: u64,
    },
}

impl RunError {
    /// Returns the underlying fault, if this abort was caused by one.
    pub fn fault(&self) -> Option<&SimError> {
        match self {
            Self::Fault { source, .. } => Some(source),
            _ => None,
        }
    }

    /// Returns the cycle at which the run aborted, if known.
    pub fn cycle(&self) -> Option<u64> {
        match self {
            Self::Fault { cycle, .. } | Self::Sink { cycle, .. } => Some(*cycle),
            Self::CycleLimit { .. } => None,
        }
    }
}
