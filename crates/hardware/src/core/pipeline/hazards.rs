//! Hazard Detection and Resolution.
//!
//! This module implements the logic that keeps the pipeline consistent. It runs once
//! per cycle, before any stage, on the latches as the previous cycle left them, and
//! applies four steps in a fixed order:
//! 1. **Control Hazard:** A taken `beq` in ID/EX flushes IF/ID and redirects the PC.
//! 2. **Forwarding from MEM/WB:** Replaces stale ID/EX operands with the MEM/WB result.
//! 3. **Forwarding from EX/MEM:** Same for the EX/MEM ALU result. Applied last, so the
//!    nearer producer wins when both target the same register.
//! 4. **Load-Use Stall:** A `lw` in ID/EX whose destination is named by the IF/ID
//!    encoding flushes IF/ID and rolls the PC back one word, so the consumer is
//!    fetched again one cycle later.

use crate::common::constants::PC_STEP;
use crate::core::pipeline::latches::{ExMem, IdEx, IfId, MemWb};
use crate::core::pipeline::traits::PipelineLatch;
use crate::isa::instruction::{Instruction, InstructionBits, Op};

/// What the hazard unit did in one cycle.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct HazardReport {
    /// New PC if a taken branch redirected fetch.
    pub branch_target: Option<u32>,
    /// Operands replaced from MEM/WB.
    pub forwards_mem_wb: u32,
    /// Operands replaced from EX/MEM.
    pub forwards_ex_mem: u32,
    /// Whether a load-use stall was inserted.
    pub stalled: bool,
}

impl HazardReport {
    /// Returns `true` if a taken branch flushed IF/ID this cycle.
    pub fn branch_taken(&self) -> bool {
        self.branch_target.is_some()
    }
}

/// Returns the redirect target if ID/EX holds a taken `beq`.
///
/// The comparison uses the operands as currently latched, before this cycle's
/// forwarding. The target is `id_ex.pc + imm * 4`, where `id_ex.pc` already points
/// one word past the branch.
pub fn branch_target(id_ex: &IdEx) -> Option<u32> {
    if !id_ex.inst.is(Op::Beq) || id_ex.rv1 != id_ex.rv2 {
        return None;
    }
    let target = i64::from(id_ex.pc).wrapping_add(id_ex.imm.wrapping_mul(i64::from(PC_STEP)));
    Some(target as u32)
}

/// Checks if a stall is needed because IF/ID reads the register a `lw` in ID/EX loads.
///
/// Both the `rs` and `rt` fields of the raw IF/ID encoding are compared, whatever the
/// consumer's format, and register 0 is not exempt.
///
/// # Arguments
///
/// * `id_ex` - The ID/EX latch holding the potential load.
/// * `if_id` - The IF/ID latch holding the potential consumer.
///
/// # Returns
///
/// `true` if a one-cycle stall is required.
pub fn need_stall_load_use(id_ex: &IdEx, if_id: &IfId) -> bool {
    if !id_ex.inst.is(Op::Lw) {
        return false;
    }
    let loaded = id_ex.inst.rt;
    loaded == if_id.inst.rs() || loaded == if_id.inst.rt()
}

/// Overwrites the ID/EX operands that `producer` writes with `value`.
///
/// Producers that write no register (bubbles, `beq`) or target register 0 forward
/// nothing.
///
/// # Returns
///
/// The number of operands replaced (0, 1 or 2).
pub fn forward_from(producer: &Instruction, value: i64, id_ex: &mut IdEx) -> u32 {
    let Some(dest) = producer.writeback_reg() else {
        return 0;
    };
    let mut replaced = 0;
    if dest == id_ex.inst.rs {
        id_ex.rv1 = value;
        replaced += 1;
    }
    if dest == id_ex.inst.rt {
        id_ex.rv2 = value;
        replaced += 1;
    }
    replaced
}

/// Runs the hazard unit for one cycle.
///
/// # Arguments
///
/// * `pc` - The program counter, redirected or rolled back in place.
/// * `if_id` - IF/ID latch; flushed by a taken branch or a stall.
/// * `id_ex` - ID/EX latch; its operands are replaced by forwarding.
/// * `ex_mem` - EX/MEM latch, the nearer forwarding source.
/// * `mem_wb` - MEM/WB latch, the farther forwarding source.
///
/// # Returns
///
/// A `HazardReport` describing the actions taken.
pub fn resolve(
    pc: &mut u32,
    if_id: &mut IfId,
    id_ex: &mut IdEx,
    ex_mem: &ExMem,
    mem_wb: &MemWb,
) -> HazardReport {
    let mut report = HazardReport::default();

    if let Some(target) = branch_target(id_ex) {
        tracing::debug!(from = id_ex.pc, target, "branch taken, flushing IF/ID");
        if_id.flush();
        *pc = target;
        report.branch_target = Some(target);
    }

    report.forwards_mem_wb = forward_from(&mem_wb.inst, mem_wb.result(), id_ex);
    report.forwards_ex_mem = forward_from(&ex_mem.inst, ex_mem.alu, id_ex);
    if report.forwards_mem_wb + report.forwards_ex_mem > 0 {
        tracing::trace!(
            mem_wb = report.forwards_mem_wb,
            ex_mem = report.forwards_ex_mem,
            rv1 = id_ex.rv1,
            rv2 = id_ex.rv2,
            "forwarded operands"
        );
    }

    if need_stall_load_use(id_ex, if_id) {
        tracing::debug!(reg = id_ex.inst.rt, "load-use stall");
        if_id.flush();
        *pc = pc.wrapping_sub(PC_STEP);
        report.stalled = true;
    }

    report
}
