//! Pipeline Stage and Latch Interfaces.
//!
//! This module defines the common traits for pipeline components. It provides:
//! 1. **Stage Identity:** The `Stage` enum naming each of the five stages.
//! 2. **Pipeline Stage Interface:** Standardizes the `tick` operation for all stages.
//! 3. **Pipeline Latch Interface:** Provides methods for flushing and status checking.

use std::fmt;

use crate::common::error::SimError;

/// The five pipeline stages.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Stage {
    /// Instruction fetch (IF).
    Fetch,
    /// Instruction decode and register read (ID).
    Decode,
    /// ALU execution (EX).
    Execute,
    /// Data memory access (MEM).
    Memory,
    /// Register writeback (WB).
    Writeback,
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Fetch => "fetch",
            Self::Decode => "decode",
            Self::Execute => "execute",
            Self::Memory => "memory",
            Self::Writeback => "writeback",
        };
        f.write_str(name)
    }
}

/// Represents a stage in the instruction pipeline.
///
/// Implementors are port structs that borrow exactly the latches and architectural
/// state the stage reads (`&`) or writes (`&mut`), so each latch has a single writer.
pub trait PipelineStage {
    /// The stage this port drives.
    const STAGE: Stage;

    /// Executes one cycle of the pipeline stage.
    ///
    /// # Returns
    ///
    /// `true` if the stage processed a real instruction this cycle, `false` if it
    /// only moved a bubble.
    ///
    /// # Errors
    ///
    /// Returns the fault raised while processing the instruction.
    fn tick(self) -> Result<bool, SimError>;
}

/// Represents a pipeline latch (inter-stage buffer).
///
/// Latches hold the state of an instruction as it moves between stages. They
/// support flushing and status checks.
pub trait PipelineLatch {
    /// Replaces the latch contents with a bubble.
    ///
    /// Called by the hazard unit on a taken branch or a load-use stall.
    fn flush(&mut self);

    /// Checks if the latch is empty.
    ///
    /// # Returns
    ///
    /// `true` if the latch holds a bubble, `false` otherwise.
    fn is_empty(&self) -> bool;
}
