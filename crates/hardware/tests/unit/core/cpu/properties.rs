//! # Pipeline Property Tests
//!
//! Random straight-line programs are run through the pipeline and compared with a
//! sequential reference model. Any forwarding or stall bug shows up as a
//! register mismatch.

use proptest::prelude::*;

use pipesim_core::config::Config;

use crate::common::builder::instruction::*;
use crate::common::harness::TestContext;

const MEMORY: [i64; 5] = [5, 5, 6, 8, 8];

#[derive(Clone, Copy, Debug)]
enum Step {
    Add(u32, u32, u32),
    Sub(u32, u32, u32),
    And(u32, u32, u32),
    Or(u32, u32, u32),
    Addi(u32, u32, i32),
    Lw(u32, i32),
}

impl Step {
    fn encode(self) -> u32 {
        match self {
            Self::Add(rd, rs, rt) => add(rd, rs, rt),
            Self::Sub(rd, rs, rt) => sub(rd, rs, rt),
            Self::And(rd, rs, rt) => and(rd, rs, rt),
            Self::Or(rd, rs, rt) => or(rd, rs, rt),
            Self::Addi(rt, rs, imm) => addi(rt, rs, imm),
            Self::Lw(rt, offset) => lw(rt, offset, 0),
        }
    }

    /// Executes the step on the sequential reference machine.
    fn apply(self, regs: &mut [i64]) {
        let r = |idx: u32| regs[idx as usize];
        let (dest, value) = match self {
            Self::Add(rd, rs, rt) => (rd, r(rs).wrapping_add(r(rt))),
            Self::Sub(rd, rs, rt) => (rd, r(rs).wrapping_sub(r(rt))),
            Self::And(rd, rs, rt) => (rd, r(rs) & r(rt)),
            Self::Or(rd, rs, rt) => (rd, r(rs) | r(rt)),
            Self::Addi(rt, rs, imm) => (rt, r(rs).wrapping_add(i64::from(imm))),
            Self::Lw(rt, offset) => (rt, MEMORY[offset as usize / 4]),
        };
        if dest != 0 {
            regs[dest as usize] = value;
        }
    }
}

fn step_strategy() -> impl Strategy<Value = Step> {
    let reg = 0..9u32;
    prop_oneof![
        (reg.clone(), reg.clone(), reg.clone()).prop_map(|(d, s, t)| Step::Add(d, s, t)),
        (reg.clone(), reg.clone(), reg.clone()).prop_map(|(d, s, t)| Step::Sub(d, s, t)),
        (reg.clone(), reg.clone(), reg.clone()).prop_map(|(d, s, t)| Step::And(d, s, t)),
        (reg.clone(), reg.clone(), reg.clone()).prop_map(|(d, s, t)| Step::Or(d, s, t)),
        (reg.clone(), reg.clone(), -100..100i32).prop_map(|(t, s, imm)| Step::Addi(t, s, imm)),
        (reg, 0..5i32).prop_map(|(t, word)| Step::Lw(t, word * 4)),
    ]
}

fn registers_strategy() -> impl Strategy<Value = Vec<i64>> {
    prop::collection::vec(-1000i64..1000, 8).prop_map(|tail| {
        let mut regs = vec![0];
        regs.extend(tail);
        regs
    })
}

proptest! {
    #[test]
    fn pipeline_matches_sequential_model(
        registers in registers_strategy(),
        steps in prop::collection::vec(step_strategy(), 1..12),
    ) {
        let config = Config {
            registers: registers.clone(),
            memory: MEMORY.to_vec(),
            max_cycles: None,
        };
        let program: Vec<u32> = steps.iter().copied().map(Step::encode).collect();
        let mut ctx = TestContext::with_config(&config).load_program(&program);
        let _ = ctx.run_to_completion();

        let mut expected = registers;
        for step in &steps {
            step.apply(&mut expected);
        }
        prop_assert_eq!(ctx.regs(), expected);
        prop_assert_eq!(ctx.cpu().stats.instructions_retired, steps.len() as u64);
    }

    #[test]
    fn zero_register_reads_zero_every_cycle(
        steps in prop::collection::vec(step_strategy(), 1..12),
    ) {
        let program: Vec<u32> = steps.iter().copied().map(Step::encode).collect();
        let mut ctx = TestContext::new().load_program(&program);
        while ctx.step() {
            prop_assert_eq!(ctx.cpu().regs.as_slice()[0], 0);
        }
    }

    #[test]
    fn cycles_are_n_plus_four_plus_stalls(
        steps in prop::collection::vec(step_strategy(), 1..12),
    ) {
        // A trailing `lw $0` matches the empty IF/ID and stalls without costing a cycle.
        prop_assume!(!matches!(steps.last(), Some(Step::Lw(0, _))));
        let program: Vec<u32> = steps.iter().copied().map(Step::encode).collect();
        let mut ctx = TestContext::new().load_program(&program);
        let cycles = ctx.run_to_completion();
        let stats = &ctx.cpu().stats;
        prop_assert_eq!(cycles, steps.len() as u64 + 4 + stats.stalls_data);
    }
}
