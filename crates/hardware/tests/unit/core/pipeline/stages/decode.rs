//! # Decode Stage Tests

use pipesim_core::common::SimError;
use pipesim_core::core::arch::gpr::RegisterFile;
use pipesim_core::core::pipeline::latches::IdEx;
use pipesim_core::core::pipeline::stages::Decode;
use pipesim_core::core::pipeline::traits::PipelineStage;
use pipesim_core::isa::Op;

use crate::common::builder::instruction::*;
use crate::common::builder::pipeline_state::{IdExBuilder, IfIdBuilder};

fn regs() -> RegisterFile {
    RegisterFile::new(&[0, 8, 7, 6, 3, 9, 5, 2, 7])
}

#[test]
fn reads_both_source_registers() {
    let if_id = IfIdBuilder::new().pc(8).inst(add(3, 1, 2)).build();
    let mut id_ex = IdEx::default();

    let busy = Decode {
        input: &if_id,
        regs: &regs(),
        out: &mut id_ex,
    }
    .tick()
    .unwrap();

    assert!(busy);
    assert_eq!(id_ex.inst.op, Some(Op::Add));
    assert_eq!((id_ex.rv1, id_ex.rv2), (8, 7));
    assert_eq!(id_ex.pc, 8);
    assert_eq!(id_ex.imm, 0);
}

#[test]
fn latches_sign_extended_immediate() {
    let if_id = IfIdBuilder::new().pc(4).inst(addi(1, 4, -2)).build();
    let mut id_ex = IdEx::default();

    let _ = Decode {
        input: &if_id,
        regs: &regs(),
        out: &mut id_ex,
    }
    .tick()
    .unwrap();

    assert_eq!(id_ex.imm, -2);
    assert_eq!((id_ex.rv1, id_ex.rv2), (3, 8));
}

#[test]
fn bubble_clears_operands() {
    let if_id = IfIdBuilder::new().pc(12).inst(0).build();
    let mut id_ex = IdExBuilder::new().inst(add(3, 1, 2)).rv1(5).rv2(6).build();

    let busy = Decode {
        input: &if_id,
        regs: &regs(),
        out: &mut id_ex,
    }
    .tick()
    .unwrap();

    assert!(!busy);
    assert!(id_ex.inst.is_bubble());
    assert_eq!((id_ex.rv1, id_ex.rv2, id_ex.imm), (0, 0, 0));
}

#[test]
fn register_beyond_file_is_error() {
    let small = RegisterFile::new(&[0, 1, 2, 3]);
    let if_id = IfIdBuilder::new().inst(addi(5, 0, 1)).build();
    let mut id_ex = IdEx::default();

    let err = Decode {
        input: &if_id,
        regs: &small,
        out: &mut id_ex,
    }
    .tick()
    .unwrap_err();

    assert_eq!(err, SimError::RegisterIndexInvalid { index: 5, size: 4 });
}

#[test]
fn undecodable_instruction_is_error() {
    let if_id = IfIdBuilder::new().inst(0xFC00_0000).build();
    let mut id_ex = IdEx::default();

    let err = Decode {
        input: &if_id,
        regs: &regs(),
        out: &mut id_ex,
    }
    .tick()
    .unwrap_err();

    assert!(matches!(err, SimError::Decode { raw: 0xFC00_0000, .. }));
}
