//! Configuration system for the pipeline simulator.
//!
//! This module defines the configuration structure used to parameterize a run. It provides:
//! 1. **Defaults:** The register and memory images of the reference machine.
//! 2. **Parsing:** JSON deserialization with per-field defaults.
//! 3. **Validation:** Rejection of machines the pipeline cannot model.
//!
//! Use `Config::default()` for the reference machine or `Config::from_json` for a
//! configuration file supplied on the command line.

use serde::Deserialize;

use crate::common::constants::{DEFAULT_MEMORY, DEFAULT_REGISTERS};
use crate::common::error::SimError;

/// Root configuration for a simulation run.
///
/// ```json
/// { "registers": [0, 1, 2, 3], "memory": [10, 20], "max_cycles": 1000 }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Initial register file contents; the length fixes the register count.
    #[serde(default = "Config::default_registers")]
    pub registers: Vec<i64>,

    /// Initial data memory contents in words; the length fixes the memory size.
    #[serde(default = "Config::default_memory")]
    pub memory: Vec<i64>,

    /// Abort the run if the pipeline has not drained after this many cycles.
    #[serde(default)]
    pub max_cycles: Option<u64>,
}

impl Config {
    fn default_registers() -> Vec<i64> {
        DEFAULT_REGISTERS.to_vec()
    }

    fn default_memory() -> Vec<i64> {
        DEFAULT_MEMORY.to_vec()
    }

    /// Parses and validates a JSON configuration.
    ///
    /// # Errors
    ///
    /// Returns `SimError::InvalidConfig` when the text is not valid JSON for this
    /// structure or when validation fails.
    pub fn from_json(text: &str) -> Result<Self, SimError> {
        let config: Self =
            serde_json::from_str(text).map_err(|e| SimError::InvalidConfig(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Checks that the configuration describes a machine the pipeline can model.
    ///
    /// # Errors
    ///
    /// Returns `SimError::InvalidConfig` if the register file is empty, register 0 is
    /// not zero, or the cycle limit is zero.
    pub fn validate(&self) -> Result<(), SimError> {
        match self.registers.first() {
            None => {
                return Err(SimError::InvalidConfig(
                    "register file must hold at least $0".to_string(),
                ));
            }
            Some(&v) if v != 0 => {
                return Err(SimError::InvalidConfig(format!(
                    "register $0 is hard-wired to zero, got initial value {v}"
                )));
            }
            Some(_) => {}
        }
        if self.max_cycles == Some(0) {
            return Err(SimError::InvalidConfig(
                "max_cycles must be positive".to_string(),
            ));
        }
        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            registers: Self::default_registers(),
            memory: Self::default_memory(),
            max_cycles: None,
        }
    }
}
