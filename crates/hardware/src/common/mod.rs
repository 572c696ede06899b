//! Common utilities and types used throughout the pipeline simulator.
//!
//! This module provides the building blocks shared across all components:
//! 1. **Constants:** Machine geometry, instruction width, and snapshot layout.
//! 2. **Error Handling:** Fatal simulation faults and the run-level abort type.

/// Common constants used throughout the simulator.
pub mod constants;

/// Error types for decoding, memory and register faults, and run aborts.
pub mod error;

pub use error::{RunError, SimError};
