//! Per-cycle state report.
//!
//! Renders the register file, data memory and the four pipeline latches after a
//! cycle, in the fixed text layout of the trace files:
//!
//! ```text
//! CC 1:
//!
//! Registers:
//! $0: 0	$1: 8	$2: 7	
//! ...
//! MEM/WB :
//! ReadData	0
//! ALUout		0
//! Control signals	00
//! =================================================================
//! ```

use std::fmt;

use crate::common::constants::{
    EX_MEM_SIGNALS_FROM, MEM_WB_SIGNALS_FROM, REGISTERS_PER_ROW, SEPARATOR_WIDTH, WORD_BYTES,
};
use crate::core::Cpu;
use crate::core::pipeline::latches::{ExMem, IdEx, IfId, MemWb};

/// Display adapter rendering the state of a CPU as one cycle's report.
#[derive(Clone, Copy, Debug)]
pub struct Snapshot<'a>(pub &'a Cpu);

impl fmt::Display for Snapshot<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let cpu = self.0;
        write!(f, "CC {}:\n\n", cpu.cycle)?;

        writeln!(f, "Registers:")?;
        for (row, chunk) in cpu.regs.as_slice().chunks(REGISTERS_PER_ROW).enumerate() {
            for (col, val) in chunk.iter().enumerate() {
                write!(f, "${}: {val}\t", row * REGISTERS_PER_ROW + col)?;
            }
            writeln!(f)?;
        }
        writeln!(f)?;

        writeln!(f, "Data memory:")?;
        for (idx, val) in cpu.mem.as_slice().iter().enumerate() {
            writeln!(f, "{:02}:\t{val}", idx * WORD_BYTES as usize)?;
        }
        writeln!(f)?;

        writeln!(f, "IF/ID :")?;
        write_if_id(f, &cpu.if_id)?;
        writeln!(f)?;

        writeln!(f, "ID/EX :")?;
        write_id_ex(f, &cpu.id_ex)?;
        writeln!(f)?;

        writeln!(f, "EX/MEM :")?;
        write_ex_mem(f, &cpu.ex_mem)?;
        writeln!(f)?;

        writeln!(f, "MEM/WB :")?;
        write_mem_wb(f, &cpu.mem_wb)?;
        writeln!(f, "{}", "=".repeat(SEPARATOR_WIDTH))
    }
}

fn write_if_id(f: &mut fmt::Formatter<'_>, latch: &IfId) -> fmt::Result {
    writeln!(f, "PC\t\t{}", latch.pc)?;
    writeln!(f, "Instruction\t{:032b}", latch.inst)
}

fn write_id_ex(f: &mut fmt::Formatter<'_>, latch: &IdEx) -> fmt::Result {
    writeln!(f, "ReadData1\t{}", latch.rv1)?;
    writeln!(f, "ReadData2\t{}", latch.rv2)?;
    writeln!(f, "sign_ext\t{}", latch.imm)?;
    writeln!(f, "Rs\t\t{}", latch.inst.rs)?;
    writeln!(f, "Rt\t\t{}", latch.inst.rt)?;
    writeln!(f, "Rd\t\t{}", latch.inst.rd)?;
    writeln!(f, "Control signals\t{}", latch.inst.ctrl.bit_string(0))
}

fn write_ex_mem(f: &mut fmt::Formatter<'_>, latch: &ExMem) -> fmt::Result {
    writeln!(f, "ALUout\t\t{}", latch.alu)?;
    writeln!(f, "WriteData\t{}", latch.write_data)?;
    writeln!(f, "{}\t\t{}", latch.dest_field, latch.dest)?;
    writeln!(
        f,
        "Control signals\t{}",
        latch.inst.ctrl.bit_string(EX_MEM_SIGNALS_FROM)
    )
}

fn write_mem_wb(f: &mut fmt::Formatter<'_>, latch: &MemWb) -> fmt::Result {
    writeln!(f, "ReadData\t{}", latch.read_data)?;
    writeln!(f, "ALUout\t\t{}", latch.alu)?;
    writeln!(
        f,
        "Control signals\t{}",
        latch.inst.ctrl.bit_string(MEM_WB_SIGNALS_FROM)
    )
}
