//! CPU Core Definition and Initialization.
//!
//! This module defines the central `Cpu` structure, which serves as the container for the
//! entire processor state. It coordinates the following:
//! 1. **State Management:** Maintains the register file, data memory and program counter.
//! 2. **Program Store:** Holds the instruction encodings fetched by the IF stage.
//! 3. **Pipeline Control:** Owns the four inter-stage latches driven by `tick`.

/// Per-cycle clock driver and pipeline coordination.
pub mod execution;

use crate::common::constants::WORD_BYTES;
use crate::common::error::SimError;
use crate::config::Config;
use crate::core::arch::gpr::RegisterFile;
use crate::core::arch::memory::DataMemory;
use crate::core::pipeline::latches::{ExMem, IdEx, IfId, MemWb};
use crate::core::pipeline::traits::PipelineLatch;
use crate::sim::loader::parse_instruction;
use crate::stats::SimStats;

/// Main CPU structure containing all processor state.
///
/// Every latch starts as a bubble, the PC at 0 and the cycle counter at 0.
#[derive(Clone, Debug)]
pub struct Cpu {
    /// General-purpose registers.
    pub regs: RegisterFile,
    /// Data memory.
    pub mem: DataMemory,
    /// Program Counter (byte address of the next fetch).
    pub pc: u32,
    /// Instruction store; instruction `i` lives at byte address `4 * i`.
    pub program: Vec<u32>,

    /// IF/ID Pipeline Latch (Fetch -> Decode).
    pub if_id: IfId,
    /// ID/EX Pipeline Latch (Decode -> Execute).
    pub id_ex: IdEx,
    /// EX/MEM Pipeline Latch (Execute -> Memory).
    pub ex_mem: ExMem,
    /// MEM/WB Pipeline Latch (Memory -> Writeback).
    pub mem_wb: MemWb,

    /// Number of completed cycles.
    pub cycle: u64,
    /// Performance statistics.
    pub stats: SimStats,
}

impl Cpu {
    /// Creates a CPU with the register and memory images of `config` and an empty
    /// program.
    pub fn new(config: &Config) -> Self {
        Self {
            regs: RegisterFile::new(&config.registers),
            mem: DataMemory::new(&config.memory),
            pc: 0,
            program: Vec::new(),
            if_id: IfId::default(),
            id_ex: IdEx::default(),
            ex_mem: ExMem::default(),
            mem_wb: MemWb::default(),
            cycle: 0,
            stats: SimStats::default(),
        }
    }

    /// Appends an encoded instruction to the program.
    pub fn push_instruction(&mut self, raw: u32) {
        self.program.push(raw);
    }

    /// Appends an instruction given as a 32-character binary string.
    ///
    /// # Errors
    ///
    /// Returns `SimError::MalformedInstruction` if `text` is not exactly 32 binary
    /// digits.
    pub fn load_instruction(&mut self, text: &str) -> Result<(), SimError> {
        let raw = parse_instruction(text, self.program.len() + 1)?;
        self.push_instruction(raw);
        Ok(())
    }

    /// Appends a sequence of encoded instructions to the program.
    pub fn load_program(&mut self, program: &[u32]) {
        self.program.extend_from_slice(program);
    }

    /// Returns `true` once every latch holds a bubble and the PC is past the program.
    pub fn is_drained(&self) -> bool {
        let fetch_done = (self.pc / WORD_BYTES) as usize >= self.program.len();
        fetch_done
            && self.if_id.is_empty()
            && self.id_ex.is_empty()
            && self.ex_mem.is_empty()
            && self.mem_wb.is_empty()
    }
}
