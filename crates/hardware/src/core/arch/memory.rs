//! Data memory.
//!
//! A fixed-size array of words addressed by byte address. The word index is the
//! byte address divided by the word size; there is no alignment check.

use crate::common::constants::WORD_BYTES;
use crate::common::error::SimError;

/// Word-addressed data memory read by `lw`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DataMemory {
    words: Vec<i64>,
}

impl DataMemory {
    /// Creates data memory from an initial image.
    pub fn new(image: &[i64]) -> Self {
        Self {
            words: image.to_vec(),
        }
    }

    /// Loads the word containing byte address `addr`.
    ///
    /// # Errors
    ///
    /// Returns `SimError::MemoryOutOfRange` for negative addresses and for addresses
    /// whose word index is beyond the memory.
    pub fn load(&self, addr: i64) -> Result<i64, SimError> {
        let out_of_range = || SimError::MemoryOutOfRange {
            addr,
            words: self.words.len(),
        };
        if addr < 0 {
            return Err(out_of_range());
        }
        let index = usize::try_from(addr / i64::from(WORD_BYTES)).map_err(|_| out_of_range())?;
        self.words.get(index).copied().ok_or_else(out_of_range)
    }

    /// Number of words.
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Returns `true` if the memory holds no words.
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Current memory contents, word 0 first.
    pub fn as_slice(&self) -> &[i64] {
        &self.words
    }
}
