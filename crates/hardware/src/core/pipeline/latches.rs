//! Pipeline latch structures for inter-stage communication.
//!
//! This module defines the records carried between the five stages:
//! Fetch → Decode → Execute → Memory → Writeback.
//!
//! 1. **Instruction Flow:** Each latch carries one instruction (or a bubble) and the
//!    values the next stage needs.
//! 2. **Reset:** Every latch defaults to a bubble, which is also the state after a flush.

use std::fmt;

use crate::core::pipeline::traits::PipelineLatch;
use crate::isa::instruction::Instruction;

/// IF/ID latch (Fetch to Decode stage).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct IfId {
    /// Program counter after this fetch (fetch address + 4).
    pub pc: u32,
    /// Raw 32-bit instruction encoding; zero for a bubble.
    pub inst: u32,
}

/// ID/EX latch (Decode to Execute stage).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct IdEx {
    /// Program counter copied from IF/ID.
    pub pc: u32,
    /// Decoded instruction.
    pub inst: Instruction,
    /// Value of `rs`, possibly replaced by forwarding.
    pub rv1: i64,
    /// Value of `rt`, possibly replaced by forwarding.
    pub rv2: i64,
    /// Sign-extended immediate.
    pub imm: i64,
}

/// Register field an EX/MEM destination index was taken from.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum DestField {
    /// The `rt` field (immediate form and bubbles).
    #[default]
    Rt,
    /// The `rd` field (register form).
    Rd,
}

impl fmt::Display for DestField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Rt => f.write_str("Rt"),
            Self::Rd => f.write_str("Rd"),
        }
    }
}

/// EX/MEM latch (Execute to Memory stage).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ExMem {
    /// Instruction being carried.
    pub inst: Instruction,
    /// ALU result.
    pub alu: i64,
    /// Value of `rt` as seen by Execute. No store instruction consumes it.
    pub write_data: i64,
    /// Which register field the destination came from.
    pub dest_field: DestField,
    /// Destination register index.
    pub dest: usize,
}

/// MEM/WB latch (Memory to Writeback stage).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct MemWb {
    /// Instruction being carried.
    pub inst: Instruction,
    /// ALU result passed through from EX/MEM.
    pub alu: i64,
    /// Word loaded from data memory; zero unless the instruction is `lw`.
    pub read_data: i64,
}

impl MemWb {
    /// The value this instruction writes back: `read_data` for loads, `alu` otherwise.
    pub fn result(&self) -> i64 {
        if self.inst.ctrl.mem_to_reg {
            self.read_data
        } else {
            self.alu
        }
    }
}

impl PipelineLatch for IfId {
    fn flush(&mut self) {
        self.inst = 0;
    }

    fn is_empty(&self) -> bool {
        self.inst == 0
    }
}

impl PipelineLatch for IdEx {
    fn flush(&mut self) {
        *self = Self::default();
    }

    fn is_empty(&self) -> bool {
        self.inst.is_bubble()
    }
}

impl PipelineLatch for ExMem {
    fn flush(&mut self) {
        *self = Self::default();
    }

    fn is_empty(&self) -> bool {
        self.inst.is_bubble()
    }
}

impl PipelineLatch for MemWb {
    fn flush(&mut self) {
        *self = Self::default();
    }

    fn is_empty(&self) -> bool {
        self.inst.is_bubble()
    }
}
