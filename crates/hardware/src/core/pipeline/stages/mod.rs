//! Pipeline stage implementations.
//!
//! This module contains the individual implementations for the five stages of the
//! instruction pipeline. Each stage is a port struct borrowing only the latches and
//! state it touches, driven through the `PipelineStage` trait. It includes:
//! 1. **Fetch:** Retrieves the instruction at the PC and advances the PC.
//! 2. **Decode:** Decodes the IF/ID encoding and reads the source registers.
//! 3. **Execute:** Performs the ALU operation.
//! 4. **Memory:** Loads from data memory for `lw`.
//! 5. **Writeback:** Commits results to the register file.

/// Instruction decode stage implementation.
pub mod decode;

/// Instruction execute stage implementation.
pub mod execute;

/// Instruction fetch stage implementation.
pub mod fetch;

/// Memory access stage implementation.
pub mod memory;

/// Writeback stage implementation.
pub mod writeback;

/// Decode stage port (ID stage).
pub use decode::Decode;
/// Execute stage port (EX stage).
pub use execute::Execute;
/// Fetch stage port (IF stage).
pub use fetch::Fetch;
/// Memory stage port (MEM stage).
pub use memory::Memory;
/// Writeback stage port (WB stage).
pub use writeback::Writeback;
