//! Program Loader.
//!
//! This module turns program text into instruction encodings. It performs:
//! 1. **Parsing:** Each non-blank line must be exactly 32 binary digits, most
//!    significant bit first. Surrounding whitespace (including `\r`) is ignored.
//! 2. **File loading:** Reads a program file from disk and parses it.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::common::constants::INSTRUCTION_BITS;
use crate::common::error::SimError;

/// Error raised while loading a program file.
#[derive(Debug, Error)]
pub enum LoadError {
    /// The file could not be read.
    #[error("could not read '{}': {source}", path.display())]
    Io {
        /// Path of the program file.
        path: PathBuf,
        /// Underlying I/O error.
        source: io::Error,
    },

    /// The file contents are not a valid program.
    #[error(transparent)]
    Parse(#[from] SimError),
}

/// Parses one instruction given as a string of 32 binary digits.
///
/// # Arguments
///
/// * `text` - The instruction text; surrounding whitespace is ignored.
/// * `line` - One-based line number reported on error.
///
/// # Errors
///
/// Returns `SimError::MalformedInstruction` if the trimmed text is not exactly 32
/// characters of `0` and `1`.
pub fn parse_instruction(text: &str, line: usize) -> Result<u32, SimError> {
    let bits = text.trim();
    let malformed = || SimError::MalformedInstruction {
        line,
        text: bits.to_string(),
    };
    if bits.len() != INSTRUCTION_BITS || !bits.bytes().all(|b| b == b'0' || b == b'1') {
        return Err(malformed());
    }
    u32::from_str_radix(bits, 2).map_err(|_| malformed())
}

/// Parses program text into instruction encodings, skipping blank lines.
///
/// # Errors
///
/// Returns the first `SimError::MalformedInstruction`, with its line number.
pub fn parse_program(text: &str) -> Result<Vec<u32>, SimError> {
    text.lines()
        .enumerate()
        .filter(|(_, line)| !line.trim().is_empty())
        .map(|(idx, line)| parse_instruction(line, idx + 1))
        .collect()
}

/// Reads and parses a program file.
///
/// # Errors
///
/// Returns `LoadError::Io` if the file cannot be read and `LoadError::Parse` if a
/// line is malformed.
pub fn load_program(path: impl AsRef<Path>) -> Result<Vec<u32>, LoadError> {
    let path = path.as_ref();
    let text = fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let program = parse_program(&text)?;
    tracing::debug!(path = %path.display(), instructions = program.len(), "loaded program");
    Ok(program)
}
