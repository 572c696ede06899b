//! Simulation driver, program loading and reporting.
//!
//! This module wraps the CPU for whole-program runs. It provides:
//! 1. **Loader:** Parses program text (one 32-digit binary encoding per line).
//! 2. **Simulator:** Runs a program until the pipeline drains, writing a snapshot per cycle.
//! 3. **Snapshot:** Renders the architectural and latch state of one cycle.

/// Program text parsing and file loading.
pub mod loader;

/// Run loop writing one snapshot per cycle.
pub mod simulator;

/// Per-cycle state report.
pub mod snapshot;

pub use simulator::Simulator;
pub use snapshot::Snapshot;
