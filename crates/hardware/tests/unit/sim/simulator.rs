//! # Simulator Tests
//!
//! The run loop: one snapshot per cycle, statistics, cycle limits and aborts.

use std::io::{self, Write};

use pipesim_core::Simulator;
use pipesim_core::common::{RunError, SimError};
use pipesim_core::config::Config;
use pipesim_core::core::pipeline::traits::Stage;

use crate::common::builder::instruction::*;
use crate::common::harness::TestContext;

/// A sink that rejects every write.
struct BrokenSink;

impl Write for BrokenSink {
    fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
        Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

#[test]
fn test_run_writes_one_snapshot_per_cycle() {
    let mut ctx = TestContext::new().load_program(&[addi(1, 0, 5)]);
    let (result, trace) = ctx.run_with_trace();

    let stats = result.unwrap();
    assert_eq!(stats.cycles, 5);
    assert_eq!(stats.instructions_retired, 1);
    assert_eq!(trace.matches("CC ").count(), 5);
    assert!(trace.starts_with("CC 1:\n"));
    assert!(trace.contains("CC 5:\n"));
    assert!(!trace.contains("CC 6:"));
}

#[test]
fn test_empty_program_writes_nothing() {
    let mut ctx = TestContext::new();
    let (result, trace) = ctx.run_with_trace();

    assert_eq!(result.unwrap().cycles, 0);
    assert!(trace.is_empty());
}

#[test]
fn test_with_program_runs_to_completion() {
    let program = [lw(2, 8, 0), add(3, 2, 1)];
    let mut sim = Simulator::with_program(&Config::default(), &program).unwrap();
    let mut out = Vec::new();

    let stats = sim.run(&mut out).unwrap();
    assert_eq!(stats.cycles, 7);
    assert_eq!(stats.stalls_data, 1);
    assert_eq!(sim.cpu.regs.read(3).unwrap(), 14);
}

#[test]
fn test_invalid_config_is_rejected() {
    let config = Config {
        registers: vec![1, 2, 3],
        ..Config::default()
    };
    assert!(matches!(
        Simulator::new(&config),
        Err(SimError::InvalidConfig(_))
    ));
}

#[test]
fn test_fault_keeps_earlier_snapshots() {
    // Byte address 40 is word 10; memory holds 5 words.
    let mut ctx = TestContext::new().load_program(&[lw(1, 40, 0)]);
    let (result, trace) = ctx.run_with_trace();

    let err = result.unwrap_err();
    match &err {
        RunError::Fault {
            cycle,
            stage,
            raw,
            source,
        } => {
            assert_eq!(*cycle, 4);
            assert_eq!(*stage, Stage::Memory);
            assert_eq!(*raw, lw(1, 40, 0));
            assert_eq!(
                *source,
                SimError::MemoryOutOfRange {
                    addr: 40,
                    words: 5
                }
            );
        }
        other => panic!("expected Fault, got {other:?}"),
    }
    assert_eq!(err.cycle(), Some(4));
    assert!(err.to_string().contains("memory stage"));
    assert_eq!(trace.matches("CC ").count(), 3);
}

#[test]
fn test_undecodable_instruction_faults_in_decode() {
    let mut ctx = TestContext::new().load_program(&[0b111111 << 26]);
    let (result, trace) = ctx.run_with_trace();

    let err = result.unwrap_err();
    assert!(matches!(
        err,
        RunError::Fault {
            cycle: 2,
            stage: Stage::Decode,
            ..
        }
    ));
    assert!(matches!(err.fault(), Some(SimError::Decode { .. })));
    assert_eq!(trace.matches("CC ").count(), 1);
}

#[test]
fn test_cycle_limit_aborts_busy_pipeline() {
    let config = Config {
        max_cycles: Some(6),
        ..Config::default()
    };
    let mut ctx = TestContext::with_config(&config).load_program(&[beq(0, 0, -1)]);
    let (result, trace) = ctx.run_with_trace();

    assert!(matches!(result, Err(RunError::CycleLimit { limit: 6 })));
    assert_eq!(trace.matches("CC ").count(), 6);
}

#[test]
fn test_cycle_limit_equal_to_run_length_succeeds() {
    let config = Config {
        max_cycles: Some(5),
        ..Config::default()
    };
    let mut ctx = TestContext::with_config(&config).load_program(&[addi(1, 0, 5)]);
    let (result, _) = ctx.run_with_trace();

    assert_eq!(result.unwrap().cycles, 5);
}

#[test]
fn test_broken_sink_aborts_run() {
    let mut sim = Simulator::with_program(&Config::default(), &[addi(1, 0, 5)]).unwrap();
    let err = sim.run(&mut BrokenSink).unwrap_err();

    match err {
        RunError::Sink { cycle, source } => {
            assert_eq!(cycle, 1);
            assert_eq!(source.kind(), io::ErrorKind::BrokenPipe);
        }
        other => panic!("expected Sink, got {other:?}"),
    }
}
