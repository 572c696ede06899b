//! General-Purpose Register File.
//!
//! This module implements the register file of the modelled machine. It performs
//! the following:
//! 1. **Storage:** Maintains a fixed number of integer registers (`$0`, `$1`, ...).
//! 2. **Invariant Enforcement:** Ensures that register `$0` is hardwired to zero.
//! 3. **Bounds Checking:** Rejects indices beyond the configured register count.

use crate::common::error::SimError;
use crate::isa::abi::REG_ZERO;

/// General-Purpose Register file.
///
/// The register count is fixed at construction. Register `$0` always reads as zero
/// and writes to it are discarded.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RegisterFile {
    regs: Vec<i64>,
}

impl RegisterFile {
    /// Creates a register file from an initial image.
    ///
    /// Register `$0` is forced to zero regardless of the image.
    pub fn new(image: &[i64]) -> Self {
        let mut regs = image.to_vec();
        if let Some(zero) = regs.get_mut(REG_ZERO) {
            *zero = 0;
        }
        Self { regs }
    }

    /// Reads a register.
    ///
    /// # Errors
    ///
    /// Returns `SimError::RegisterIndexInvalid` if `idx` is beyond the register file.
    pub fn read(&self, idx: usize) -> Result<i64, SimError> {
        let val = self.regs.get(idx).copied().ok_or(SimError::RegisterIndexInvalid {
            index: idx,
            size: self.regs.len(),
        })?;
        Ok(if idx == REG_ZERO { 0 } else { val })
    }

    /// Writes a register. Writes to `$0` are discarded.
    ///
    /// # Errors
    ///
    /// Returns `SimError::RegisterIndexInvalid` if `idx` is beyond the register file.
    pub fn write(&mut self, idx: usize, val: i64) -> Result<(), SimError> {
        let size = self.regs.len();
        let slot = self
            .regs
            .get_mut(idx)
            .ok_or(SimError::RegisterIndexInvalid { index: idx, size })?;
        if idx != REG_ZERO {
            *slot = val;
        }
        Ok(())
    }

    /// Number of registers.
    pub fn len(&self) -> usize {
        self.regs.len()
    }

    /// Returns `true` if the file holds no registers.
    pub fn is_empty(&self) -> bool {
        self.regs.is_empty()
    }

    /// Current register values, `$0` first.
    pub fn as_slice(&self) -> &[i64] {
        &self.regs
    }
}
