use pipesim_core::isa::funct::*;
use pipesim_core::isa::opcodes::*;

pub struct InstructionBuilder {
    opcode: u32,
    rs: u32,
    rt: u32,
    rd: u32,
    funct: u32,
    imm: i32,
}

impl Default for InstructionBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl InstructionBuilder {
    pub fn new() -> Self {
        Self {
            opcode: 0,
            rs: 0,
            rt: 0,
            rd: 0,
            funct: 0,
            imm: 0,
        }
    }

    pub fn opcode(mut self, op: u32) -> Self {
        self.opcode = op;
        self
    }

    pub fn rs(mut self, rs: u32) -> Self {
        self.rs = rs;
        self
    }

    pub fn rt(mut self, rt: u32) -> Self {
        self.rt = rt;
        self
    }

    pub fn rd(mut self, rd: u32) -> Self {
        self.rd = rd;
        self
    }

    pub fn funct(mut self, funct: u32) -> Self {
        self.funct = funct;
        self
    }

    pub fn imm(mut self, imm: i32) -> Self {
        self.imm = imm;
        self
    }

    // --- Helpers for Common Instructions ---

    fn reg(self, funct: u32, rd: u32, rs: u32, rt: u32) -> Self {
        self.opcode(OP_REG).rd(rd).rs(rs).rt(rt).funct(funct)
    }

    fn immediate(self, opcode: u32, rt: u32, rs: u32, imm: i32) -> Self {
        self.opcode(opcode).rt(rt).rs(rs).imm(imm)
    }

    pub fn add(self, rd: u32, rs: u32, rt: u32) -> Self {
        self.reg(FUNCT_ADD, rd, rs, rt)
    }

    pub fn sub(self, rd: u32, rs: u32, rt: u32) -> Self {
        self.reg(FUNCT_SUB, rd, rs, rt)
    }

    pub fn and(self, rd: u32, rs: u32, rt: u32) -> Self {
        self.reg(FUNCT_AND, rd, rs, rt)
    }

    pub fn or(self, rd: u32, rs: u32, rt: u32) -> Self {
        self.reg(FUNCT_OR, rd, rs, rt)
    }

    pub fn addi(self, rt: u32, rs: u32, imm: i32) -> Self {
        self.immediate(OP_ADDI, rt, rs, imm)
    }

    pub fn ori(self, rt: u32, rs: u32, imm: i32) -> Self {
        self.immediate(OP_ORI, rt, rs, imm)
    }

    /// `lw $rt, offset($base)`
    pub fn lw(self, rt: u32, offset: i32, base: u32) -> Self {
        self.immediate(OP_LW, rt, base, offset)
    }

    /// `beq $rs, $rt, offset` (offset in words from the next instruction).
    pub fn beq(self, rs: u32, rt: u32, offset: i32) -> Self {
        self.opcode(OP_BEQ).rs(rs).rt(rt).imm(offset)
    }

    pub fn build(self) -> u32 {
        let head = (self.opcode << 26) | ((self.rs & 0x1F) << 21) | ((self.rt & 0x1F) << 16);
        if self.opcode == OP_REG {
            head | ((self.rd & 0x1F) << 11) | (self.funct & 0x3F)
        } else {
            head | (self.imm as u32 & 0xFFFF)
        }
    }
}

pub fn add(rd: u32, rs: u32, rt: u32) -> u32 {
    InstructionBuilder::new().add(rd, rs, rt).build()
}

pub fn sub(rd: u32, rs: u32, rt: u32) -> u32 {
    InstructionBuilder::new().sub(rd, rs, rt).build()
}

pub fn and(rd: u32, rs: u32, rt: u32) -> u32 {
    InstructionBuilder::new().and(rd, rs, rt).build()
}

pub fn or(rd: u32, rs: u32, rt: u32) -> u32 {
    InstructionBuilder::new().or(rd, rs, rt).build()
}

pub fn addi(rt: u32, rs: u32, imm: i32) -> u32 {
    InstructionBuilder::new().addi(rt, rs, imm).build()
}

pub fn ori(rt: u32, rs: u32, imm: i32) -> u32 {
    InstructionBuilder::new().ori(rt, rs, imm).build()
}

pub fn lw(rt: u32, offset: i32, base: u32) -> u32 {
    InstructionBuilder::new().lw(rt, offset, base).build()
}

pub fn beq(rs: u32, rt: u32, offset: i32) -> u32 {
    InstructionBuilder::new().beq(rs, rt, offset).build()
}
