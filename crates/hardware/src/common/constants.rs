//! System-wide constants.
//!
//! Geometry of the modelled machine and the fixed parts of the snapshot layout.

/// Width of one instruction in bits.
pub const INSTRUCTION_BITS: usize = 32;

/// Size of one instruction (and one data word) in bytes.
pub const WORD_BYTES: u32 = 4;

/// Program counter increment per fetch.
pub const PC_STEP: u32 = WORD_BYTES;

/// Number of bits in the control signal vector.
pub const CONTROL_SIGNAL_BITS: usize = 9;

/// First control bit shown in the EX/MEM section of a snapshot (Branch onwards).
pub const EX_MEM_SIGNALS_FROM: usize = 4;

/// First control bit shown in the MEM/WB section of a snapshot (RegWrite onwards).
pub const MEM_WB_SIGNALS_FROM: usize = 7;

/// Registers printed per row in a snapshot.
pub const REGISTERS_PER_ROW: usize = 3;

/// Width of the separator line terminating each cycle's snapshot.
pub const SEPARATOR_WIDTH: usize = 65;

/// Initial register image of the reference machine.
pub const DEFAULT_REGISTERS: [i64; 9] = [0, 8, 7, 6, 3, 9, 5, 2, 7];

/// Initial data memory image of the reference machine.
pub const DEFAULT_MEMORY: [i64; 5] = [5, 5, 6, 8, 8];
