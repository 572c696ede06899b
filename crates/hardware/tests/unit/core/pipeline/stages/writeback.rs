//! # Writeback Stage Tests

use pipesim_core::core::arch::gpr::RegisterFile;
use pipesim_core::core::pipeline::latches::MemWb;
use pipesim_core::core::pipeline::stages::Writeback;
use pipesim_core::core::pipeline::traits::PipelineStage;

use crate::common::builder::instruction::*;
use crate::common::builder::pipeline_state::MemWbBuilder;

fn regs() -> RegisterFile {
    RegisterFile::new(&[0, 8, 7, 6, 3, 9, 5, 2, 7])
}

fn retire(mem_wb: &MemWb, regs: &mut RegisterFile) -> bool {
    Writeback {
        input: mem_wb,
        regs,
    }
    .tick()
    .unwrap()
}

#[test]
fn alu_result_written_to_rd() {
    let mut regs = regs();
    let mem_wb = MemWbBuilder::new().inst(add(3, 1, 2)).alu_result(15).build();
    assert!(retire(&mem_wb, &mut regs));
    assert_eq!(regs.read(3), Ok(15));
}

#[test]
fn load_writes_read_data_to_rt() {
    let mut regs = regs();
    let mem_wb = MemWbBuilder::new()
        .inst(lw(2, 8, 0))
        .alu_result(8)
        .read_data(6)
        .build();
    assert!(retire(&mem_wb, &mut regs));
    assert_eq!(regs.read(2), Ok(6));
}

#[test]
fn branch_retires_without_write() {
    let mut regs = regs();
    let before = regs.clone();
    let mem_wb = MemWbBuilder::new().inst(beq(1, 2, 1)).alu_result(1).build();
    assert!(retire(&mem_wb, &mut regs));
    assert_eq!(regs, before);
}

#[test]
fn bubble_reports_no_work() {
    let mut regs = regs();
    assert!(!retire(&MemWb::default(), &mut regs));
}

#[test]
fn write_to_zero_register_discarded() {
    let mut regs = regs();
    let mem_wb = MemWbBuilder::new().inst(addi(0, 1, 5)).alu_result(13).build();
    assert!(retire(&mem_wb, &mut regs));
    assert_eq!(regs.read(0), Ok(0));
}
